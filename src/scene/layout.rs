//! Procedural layout sampling
//!
//! Rest positions come from a conical volume (the tree silhouette),
//! free positions from sphere shells. All samplers draw from the
//! scene's xorshift RNG so construction is reproducible.

use std::f32::consts::PI;

use nalgebra::Vector3;

use super::config::SceneConfig;
use super::rng::XorShift32;

/// Radius margin added to the dust containment cone
pub const DUST_RADIUS_MARGIN: f32 = 2.0;

/// Point inside the conical formation volume. Radius shrinks linearly
/// toward the apex; sqrt(u) keeps density from clustering at the axis.
pub fn cone_point(rng: &mut XorShift32, cfg: &SceneConfig) -> Vector3<f32> {
    let h = rng.next_f32() * cfg.tree_height - cfg.tree_height / 2.0;
    let r_max = cfg.max_radius * (1.0 - normalized_height(h, cfg));
    let r = rng.next_f32().sqrt() * r_max;
    let theta = rng.next_f32() * 2.0 * PI;
    Vector3::new(r * theta.cos(), h, r * theta.sin())
}

/// Initial dust position: uniform radius with a small outward margin
pub fn dust_point(rng: &mut XorShift32, cfg: &SceneConfig) -> Vector3<f32> {
    let h = rng.next_f32() * cfg.tree_height - cfg.tree_height / 2.0;
    let r = rng.next_f32() * cfg.max_radius * (1.0 - normalized_height(h, cfg))
        + DUST_RADIUS_MARGIN;
    let theta = rng.next_f32() * 2.0 * PI;
    Vector3::new(r * theta.cos(), h, r * theta.sin())
}

/// Photo rest position: kept inside a mid-radius band of the cone so
/// frames neither pierce the trunk line nor float off the silhouette.
pub fn photo_rest_point(rng: &mut XorShift32, cfg: &SceneConfig) -> Vector3<f32> {
    let h = rng.next_f32() * cfg.tree_height - cfg.tree_height / 2.0;
    let r_max = cfg.max_radius * (1.0 - normalized_height(h, cfg));
    let r = r_max * (0.3 + 0.6 * rng.next_f32().sqrt());
    let theta = rng.next_f32() * 2.0 * PI;
    Vector3::new(r * theta.cos(), h, r * theta.sin())
}

/// Uniform point on a sphere shell of the given radius
pub fn sphere_point(rng: &mut XorShift32, radius: f32) -> Vector3<f32> {
    let u = rng.next_f32();
    let v = rng.next_f32();
    let theta = 2.0 * PI * u;
    let phi = (2.0 * v - 1.0).acos();
    Vector3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Height mapped to [0,1] across the cone, 1 at the apex
pub fn normalized_height(h: f32, cfg: &SceneConfig) -> f32 {
    (h + cfg.tree_height / 2.0) / cfg.tree_height
}

/// Permitted dust radius at a given height
pub fn dust_radius_at(h: f32, cfg: &SceneConfig) -> f32 {
    cfg.max_radius * (1.0 - normalized_height(h, cfg)) + DUST_RADIUS_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::config::PerfTier;

    fn cfg() -> SceneConfig {
        SceneConfig::for_tier(PerfTier::Low)
    }

    fn radial(p: &Vector3<f32>) -> f32 {
        (p.x * p.x + p.z * p.z).sqrt()
    }

    #[test]
    fn cone_points_respect_the_silhouette() {
        let cfg = cfg();
        let mut rng = XorShift32::new(7);
        for _ in 0..2000 {
            let p = cone_point(&mut rng, &cfg);
            assert!(p.y.abs() <= cfg.tree_height / 2.0);
            let r_max = cfg.max_radius * (1.0 - normalized_height(p.y, &cfg));
            assert!(radial(&p) <= r_max + 1e-3);
        }
    }

    #[test]
    fn dust_points_stay_within_margined_cone() {
        let cfg = cfg();
        let mut rng = XorShift32::new(8);
        for _ in 0..2000 {
            let p = dust_point(&mut rng, &cfg);
            assert!(radial(&p) <= dust_radius_at(p.y, &cfg) + 1e-3);
        }
    }

    #[test]
    fn photo_rest_sits_in_the_mid_band() {
        let cfg = cfg();
        let mut rng = XorShift32::new(9);
        for _ in 0..2000 {
            let p = photo_rest_point(&mut rng, &cfg);
            let r_max = cfg.max_radius * (1.0 - normalized_height(p.y, &cfg));
            let r = radial(&p);
            assert!(r >= 0.3 * r_max - 1e-3);
            assert!(r <= 0.9 * r_max + 1e-3);
        }
    }

    #[test]
    fn sphere_points_lie_on_the_shell() {
        let mut rng = XorShift32::new(10);
        for _ in 0..1000 {
            let p = sphere_point(&mut rng, 60.0);
            assert!((p.norm() - 60.0).abs() < 1e-2);
        }
    }
}
