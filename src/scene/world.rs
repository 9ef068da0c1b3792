//! Scene aggregate - everything the render chain advances each tick
//!
//! One `Scene` owns the four batched populations, the dust field, the
//! photo set, and the centerpiece. The render chain ticks it once per
//! presented frame and reads transforms back out.

use nalgebra::{Rotation3, Vector3};

use crate::interaction::InteractionMode;

use super::config::SceneConfig;
use super::dust::DustField;
use super::elements::{Centerpiece, Population};
use super::photos::PhotoSet;
use super::rng::XorShift32;

/// Global time advance per render tick
pub const TIME_STEP: f32 = 0.01;

pub const POPULATION_COUNT: usize = 4;

/// Identity of a batched population; the shell maps each to a material
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopulationKind {
    Gold,
    Silver,
    Gem,
    Emerald,
}

impl PopulationKind {
    pub const ALL: [PopulationKind; POPULATION_COUNT] = [
        PopulationKind::Gold,
        PopulationKind::Silver,
        PopulationKind::Gem,
        PopulationKind::Emerald,
    ];

    pub fn from_index(idx: u32) -> Option<Self> {
        Self::ALL.get(idx as usize).copied()
    }

    fn count(self, cfg: &SceneConfig) -> usize {
        match self {
            PopulationKind::Gold => cfg.gold_count,
            PopulationKind::Silver => cfg.silver_count,
            PopulationKind::Gem => cfg.gem_count,
            PopulationKind::Emerald => cfg.emerald_count,
        }
    }
}

pub struct Scene {
    config: SceneConfig,
    time: f32,
    populations: [Population; POPULATION_COUNT],
    dust: DustField,
    photos: PhotoSet,
    star: Centerpiece,
    rng: XorShift32,
}

impl Scene {
    pub fn new(config: SceneConfig, seed: u32) -> Self {
        let mut rng = XorShift32::new(seed);
        let populations = PopulationKind::ALL
            .map(|kind| Population::build(kind.count(&config), &mut rng, &config));
        let dust = DustField::build(&mut rng, &config);
        Self {
            config,
            time: 0.0,
            populations,
            dust,
            photos: PhotoSet::new(config.max_photos),
            star: Centerpiece::new(&config),
            rng,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn population(&self, kind: PopulationKind) -> &Population {
        &self.populations[kind as usize]
    }

    pub fn dust(&self) -> &DustField {
        &self.dust
    }

    pub fn photos(&self) -> &PhotoSet {
        &self.photos
    }

    pub fn star(&self) -> &Centerpiece {
        &self.star
    }

    /// Register one more focusable photo element, if the cap allows
    pub fn add_photo(&mut self) -> Option<usize> {
        let cfg = self.config;
        self.photos.try_add(&mut self.rng, &cfg)
    }

    /// World-space photo positions under the given formation orientation
    pub fn photo_world_positions(&self, orientation: &Rotation3<f32>) -> Vec<Vector3<f32>> {
        self.photos.world_positions(orientation)
    }

    /// Advance everything one render tick.
    pub fn tick(&mut self, mode: InteractionMode, anchor_local: Vector3<f32>) {
        self.time += TIME_STEP;
        for population in self.populations.iter_mut() {
            population.update(mode, self.time);
        }
        self.dust.update(mode);
        self.photos.update(mode, self.time, anchor_local);
        self.star.update(mode);
    }
}

/// Orientation of the formation group: pitch about x, then yaw about y
/// (three.js XYZ Euler order with roll fixed at zero).
pub fn formation_rotation(pitch: f32, yaw: f32) -> Rotation3<f32> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), pitch)
        * Rotation3::from_axis_angle(&Vector3::y_axis(), yaw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::config::PerfTier;

    fn scene() -> Scene {
        Scene::new(SceneConfig::for_tier(PerfTier::Low), 5)
    }

    #[test]
    fn populations_match_tier_counts() {
        let s = scene();
        let cfg = s.config();
        assert_eq!(s.population(PopulationKind::Gold).len(), cfg.gold_count);
        assert_eq!(s.population(PopulationKind::Silver).len(), cfg.silver_count);
        assert_eq!(s.population(PopulationKind::Gem).len(), cfg.gem_count);
        assert_eq!(s.population(PopulationKind::Emerald).len(), cfg.emerald_count);
        assert_eq!(s.dust().len(), cfg.dust_count);
        assert!(s.photos().is_empty());
    }

    #[test]
    fn tick_advances_global_time() {
        let mut s = scene();
        for _ in 0..10 {
            s.tick(InteractionMode::Formation, Vector3::zeros());
        }
        assert!((s.time() - 10.0 * TIME_STEP).abs() < 1e-6);
    }

    #[test]
    fn photo_cap_is_enforced() {
        let mut s = scene();
        let cap = s.config().max_photos;
        for i in 0..cap {
            assert_eq!(s.add_photo(), Some(i));
        }
        assert_eq!(s.add_photo(), None);
    }

    #[test]
    fn kind_index_round_trips() {
        for (i, kind) in PopulationKind::ALL.iter().enumerate() {
            assert_eq!(PopulationKind::from_index(i as u32), Some(*kind));
        }
        assert_eq!(PopulationKind::from_index(4), None);
    }

    #[test]
    fn identity_orientation_preserves_the_anchor() {
        let anchor = Vector3::new(0.0, 0.0, 80.0);
        let local = formation_rotation(0.0, 0.0).inverse() * anchor;
        assert!((local - anchor).norm() < 1e-6);
    }

    #[test]
    fn yawed_orientation_moves_the_anchor_local_frame() {
        let anchor = Vector3::new(0.0, 0.0, 80.0);
        let local = formation_rotation(0.0, std::f32::consts::FRAC_PI_2).inverse() * anchor;
        // A quarter yaw turn puts the camera-facing anchor on the x axis
        assert!((local.x.abs() - 80.0).abs() < 1e-3);
        assert!(local.z.abs() < 1e-3);
    }
}
