//! Ambient dust field
//!
//! In Formation the dust ignores the lerp model entirely: motes drift
//! upward, wrap at the top of the cone, and get pulled softly back
//! inside the silhouette. Dispersal falls back to the usual
//! converge-to-free behavior.

use nalgebra::Vector3;

use crate::interaction::InteractionMode;

use super::config::SceneConfig;
use super::layout;
use super::rng::XorShift32;

/// Convergence factor toward the free position, per tick
const DUST_LERP: f32 = 0.05;

/// Upward drift per tick while gathered
const DRIFT_SPEED: f32 = 0.05;

/// Soft radial pull-back once outside the permitted radius
const CONTAINMENT_DECAY: f32 = 0.98;

/// Free positions land on this sphere shell
const FREE_RADIUS: f32 = 60.0;

pub struct DustMote {
    pub free: Vector3<f32>,
    pub current: Vector3<f32>,
}

pub struct DustField {
    motes: Vec<DustMote>,
    cfg: SceneConfig,
}

impl DustField {
    pub fn build(rng: &mut XorShift32, cfg: &SceneConfig) -> Self {
        let mut motes = Vec::with_capacity(cfg.dust_count);
        for _ in 0..cfg.dust_count {
            let current = layout::dust_point(rng, cfg);
            let free = layout::sphere_point(rng, FREE_RADIUS);
            motes.push(DustMote { free, current });
        }
        Self { motes, cfg: *cfg }
    }

    pub fn len(&self) -> usize {
        self.motes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motes.is_empty()
    }

    pub fn motes(&self) -> &[DustMote] {
        &self.motes
    }

    pub fn update(&mut self, mode: InteractionMode) {
        let half = self.cfg.tree_height / 2.0;
        let cfg = self.cfg;
        for mote in self.motes.iter_mut() {
            if mode == InteractionMode::Formation {
                mote.current.y += DRIFT_SPEED;
                if mote.current.y > half {
                    mote.current.y = -half;
                }
                let r_max = layout::dust_radius_at(mote.current.y, &cfg);
                let r = (mote.current.x * mote.current.x + mote.current.z * mote.current.z).sqrt();
                if r > r_max {
                    mote.current.x *= CONTAINMENT_DECAY;
                    mote.current.z *= CONTAINMENT_DECAY;
                }
            } else {
                mote.current += (mote.free - mote.current) * DUST_LERP;
            }
        }
    }

    /// 3 floats per mote
    pub fn write_positions(&self, out: &mut Vec<f32>) {
        out.reserve(self.motes.len() * 3);
        for mote in &self.motes {
            out.extend_from_slice(&[mote.current.x, mote.current.y, mote.current.z]);
        }
    }
}
