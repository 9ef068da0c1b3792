//! Damped rotation physics for the whole formation
//!
//! Hand motion while roaming adds yaw/pitch impulses; velocity decays
//! multiplicatively every tick and is clamped per axis. A stylized
//! damped-spring approximation, not rigid-body dynamics.

use nalgebra::Vector2;

use crate::gesture::GestureSample;
use crate::interaction::InteractionMode;

/// Impulse gain from normalized palm deltas
pub const SENSITIVITY: f32 = 1.5;

/// Palm deltas below this are detection jitter, no impulse
pub const DEAD_ZONE: f32 = 0.001;

/// Multiplicative velocity decay per tick
pub const YAW_DAMPING: f32 = 0.99;
pub const PITCH_DAMPING: f32 = 0.98;

/// Per-axis velocity clamp, radians per tick
pub const MAX_SPEED: f32 = 0.05;

/// Idle yaw advance while the formation is gathered
pub const FORMATION_SPIN: f32 = 0.003;

/// Pitch pulled toward level while gathered
const FORMATION_LEVELING: f32 = 0.95;

/// Mild pitch self-leveling while roaming, applied after integration
const ROAM_LEVELING: f32 = 0.98;

/// Angular velocity and accumulated orientation of the formation group.
/// x is pitch, y is yaw throughout.
pub struct RotationPhysics {
    velocity: Vector2<f32>,
    orientation: Vector2<f32>,
    prev_palm: Vector2<f32>,
    hand_was_present: bool,
}

impl RotationPhysics {
    pub fn new() -> Self {
        Self {
            velocity: Vector2::zeros(),
            orientation: Vector2::zeros(),
            prev_palm: Vector2::zeros(),
            hand_was_present: false,
        }
    }

    pub fn velocity(&self) -> Vector2<f32> {
        self.velocity
    }

    /// (pitch, yaw) applied to the whole formation group
    pub fn orientation(&self) -> Vector2<f32> {
        self.orientation
    }

    /// Seed the previous-palm tracker. Called on the
    /// Formation -> Dispersed transition so the first roam tick does
    /// not compute a velocity spike from stale data.
    pub fn seed_prev_palm(&mut self, palm: Vector2<f32>) {
        self.prev_palm = palm;
    }

    /// Advance one render tick.
    pub fn step(&mut self, mode: InteractionMode, sample: &GestureSample) {
        match mode {
            InteractionMode::Focused { .. } => {
                // Orientation locked while inspecting
                self.velocity = Vector2::zeros();
            }
            InteractionMode::Formation => {
                // Slow idle spin; residual velocity survives untouched
                self.orientation.y += FORMATION_SPIN;
                self.orientation.x *= FORMATION_LEVELING;
            }
            InteractionMode::Dispersed => {
                if sample.hand_present {
                    if !self.hand_was_present {
                        // Re-acquisition: overwrite so there is no jump
                        self.prev_palm = sample.palm;
                    }
                    let delta = sample.palm - self.prev_palm;
                    if delta.x.abs() > DEAD_ZONE || delta.y.abs() > DEAD_ZONE {
                        self.velocity.y += delta.x * SENSITIVITY;
                        self.velocity.x += delta.y * SENSITIVITY;
                    }
                    self.prev_palm = sample.palm;
                }

                self.velocity.y = (self.velocity.y * YAW_DAMPING).clamp(-MAX_SPEED, MAX_SPEED);
                self.velocity.x = (self.velocity.x * PITCH_DAMPING).clamp(-MAX_SPEED, MAX_SPEED);

                self.orientation += self.velocity;
                self.orientation.x *= ROAM_LEVELING;
            }
        }
        self.hand_was_present = sample.hand_present;
    }
}

impl Default for RotationPhysics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(x: f32, y: f32) -> GestureSample {
        GestureSample {
            hand_present: true,
            palm: Vector2::new(x, y),
            confirmed_fist: false,
            pinch_active: false,
        }
    }

    fn absent() -> GestureSample {
        GestureSample::default()
    }

    #[test]
    fn velocity_decays_to_zero_without_input() {
        let mut p = RotationPhysics::new();
        p.step(InteractionMode::Dispersed, &present(0.5, 0.5));
        p.step(InteractionMode::Dispersed, &present(0.52, 0.52));
        let mut last = p.velocity().norm();
        assert!(last > 0.0);

        for _ in 0..2000 {
            p.step(InteractionMode::Dispersed, &absent());
            let now = p.velocity().norm();
            if now == 0.0 {
                break;
            }
            assert!(now < last, "velocity must strictly decrease");
            last = now;
        }
        assert!(p.velocity().norm() < 1e-6);
    }

    #[test]
    fn velocity_never_exceeds_clamp() {
        let mut p = RotationPhysics::new();
        // Violent zig-zag hand motion
        for i in 0..200 {
            let x = if i % 2 == 0 { 0.0 } else { 1.0 };
            p.step(InteractionMode::Dispersed, &present(x, 1.0 - x));
            assert!(p.velocity().x.abs() <= MAX_SPEED);
            assert!(p.velocity().y.abs() <= MAX_SPEED);
        }
    }

    #[test]
    fn dead_zone_suppresses_jitter() {
        let mut p = RotationPhysics::new();
        p.step(InteractionMode::Dispersed, &present(0.5, 0.5));
        p.step(InteractionMode::Dispersed, &present(0.5005, 0.5005));
        assert_eq!(p.velocity(), Vector2::zeros());
    }

    #[test]
    fn reacquisition_does_not_spike() {
        let mut p = RotationPhysics::new();
        p.step(InteractionMode::Dispersed, &present(0.1, 0.1));
        for _ in 0..100 {
            p.step(InteractionMode::Dispersed, &absent());
        }
        let settled = p.velocity().norm();
        // Hand reappears far away; previous palm is overwritten first
        p.step(InteractionMode::Dispersed, &present(0.9, 0.9));
        assert!(p.velocity().norm() <= settled + 1e-6);
    }

    #[test]
    fn seeding_prevents_transition_spike() {
        let mut p = RotationPhysics::new();
        p.step(InteractionMode::Dispersed, &present(0.1, 0.1));
        // Hand drifted while the machine sat in Formation
        p.step(InteractionMode::Formation, &present(0.8, 0.8));
        p.seed_prev_palm(Vector2::new(0.8, 0.8));
        p.step(InteractionMode::Dispersed, &present(0.8, 0.8));
        assert_eq!(p.velocity(), Vector2::zeros());
    }

    #[test]
    fn focused_zeroes_velocity_and_freezes_orientation() {
        let mut p = RotationPhysics::new();
        p.step(InteractionMode::Dispersed, &present(0.2, 0.2));
        p.step(InteractionMode::Dispersed, &present(0.6, 0.6));
        assert!(p.velocity().norm() > 0.0);

        let orientation = p.orientation();
        p.step(InteractionMode::Focused { target: 0 }, &present(0.9, 0.9));
        assert_eq!(p.velocity(), Vector2::zeros());
        assert_eq!(p.orientation(), orientation);
    }

    #[test]
    fn formation_spins_and_levels() {
        let mut p = RotationPhysics::new();
        p.step(InteractionMode::Dispersed, &present(0.2, 0.5));
        p.step(InteractionMode::Dispersed, &present(0.2, 0.9));
        let residual = p.velocity();
        let pitch = p.orientation().x;

        let yaw = p.orientation().y;
        p.step(InteractionMode::Formation, &absent());
        assert!((p.orientation().y - (yaw + FORMATION_SPIN)).abs() < 1e-6);
        assert!(p.orientation().x.abs() < pitch.abs().max(1e-6));
        // Residual velocity survives for the next roam
        assert_eq!(p.velocity(), residual);
    }

    #[test]
    fn horizontal_motion_maps_to_yaw() {
        let mut p = RotationPhysics::new();
        p.step(InteractionMode::Dispersed, &present(0.4, 0.5));
        p.step(InteractionMode::Dispersed, &present(0.6, 0.5));
        assert!(p.velocity().y > 0.0);
        assert_eq!(p.velocity().x, 0.0);
    }
}
