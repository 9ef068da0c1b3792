//! Batched ornament populations and the centerpiece star
//!
//! Every decorative population ("gold", "silver", "gem", "emerald" in
//! the shell's materials) shares one element record and one update
//! routine; per-population differences are data, not code.

use nalgebra::Vector3;

use crate::interaction::InteractionMode;

use super::config::SceneConfig;
use super::layout;
use super::rng::XorShift32;

/// Convergence factor toward the mode target, per tick
pub const ORNAMENT_LERP: f32 = 0.08;

/// Vertical float amplitude while dispersed
const WOBBLE_AMPLITUDE: f32 = 0.005;

/// Non-photo geometry recedes while a photo is inspected
pub const FOCUS_SHRINK: f32 = 0.6;

/// Free positions land on a shell between these radii
const FREE_RADIUS_MIN: f32 = 40.0;
const FREE_RADIUS_SPAN: f32 = 40.0;

const STAR_LERP: f32 = 0.05;
const STAR_SPIN: f32 = 0.01;
/// Dispersed anchor height for the star
const STAR_FREE_HEIGHT: f32 = 60.0;

/// One decorative element of a batched population
pub struct Ornament {
    /// Formation layout position
    pub rest: Vector3<f32>,
    /// Dispersed layout position
    pub free: Vector3<f32>,
    /// Live position, always converging toward the mode target
    pub current: Vector3<f32>,
    pub scale: f32,
    /// Scale handed to the renderer this tick
    pub render_scale: f32,
    /// Constant self-rotation speed per axis
    pub rot_speed: Vector3<f32>,
    pub rotation: Vector3<f32>,
}

/// A homogeneous batched population updated by one shared routine
pub struct Population {
    pub elements: Vec<Ornament>,
}

impl Population {
    pub fn build(count: usize, rng: &mut XorShift32, cfg: &SceneConfig) -> Self {
        let mut elements = Vec::with_capacity(count);
        for _ in 0..count {
            let rest = layout::cone_point(rng, cfg);
            let radius = FREE_RADIUS_MIN + rng.next_f32() * FREE_RADIUS_SPAN;
            let free = layout::sphere_point(rng, radius);
            let scale = 0.6 + rng.next_f32() * 0.8;
            let rot_speed = Vector3::new(
                rng.next_f32() * 0.03,
                rng.next_f32() * 0.03,
                rng.next_f32() * 0.03,
            );
            let rotation = Vector3::new(
                rng.next_f32() * std::f32::consts::PI,
                rng.next_f32() * std::f32::consts::PI,
                0.0,
            );
            elements.push(Ornament {
                rest,
                free,
                current: rest,
                scale,
                render_scale: scale,
                rot_speed,
                rotation,
            });
        }
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Advance every element one tick toward its mode-implied target.
    pub fn update(&mut self, mode: InteractionMode, time: f32) {
        let focused = matches!(mode, InteractionMode::Focused { .. });
        for (i, el) in self.elements.iter_mut().enumerate() {
            let target = match mode {
                InteractionMode::Formation => el.rest,
                _ => el.free,
            };
            if mode == InteractionMode::Dispersed {
                el.current.y += (time + i as f32).sin() * WOBBLE_AMPLITUDE;
            }
            el.current += (target - el.current) * ORNAMENT_LERP;
            el.rotation += el.rot_speed;
            el.render_scale = if focused { el.scale * FOCUS_SHRINK } else { el.scale };
        }
    }

    /// 7 floats per element: position, rotation, render scale
    pub fn write_transforms(&self, out: &mut Vec<f32>) {
        out.reserve(self.elements.len() * 7);
        for el in &self.elements {
            out.extend_from_slice(&[
                el.current.x,
                el.current.y,
                el.current.z,
                el.rotation.x,
                el.rotation.y,
                el.rotation.z,
                el.render_scale,
            ]);
        }
    }
}

/// The tree topper. Fixed formation/dispersed anchors, no population
/// array behind it.
pub struct Centerpiece {
    rest: Vector3<f32>,
    free: Vector3<f32>,
    current: Vector3<f32>,
    spin: f32,
}

impl Centerpiece {
    pub fn new(cfg: &SceneConfig) -> Self {
        let rest = Vector3::new(0.0, cfg.tree_height / 2.0 + 2.0, 0.0);
        Self {
            rest,
            free: Vector3::new(0.0, STAR_FREE_HEIGHT, 0.0),
            current: rest,
            spin: 0.0,
        }
    }

    pub fn update(&mut self, mode: InteractionMode) {
        let target = match mode {
            InteractionMode::Formation => self.rest,
            _ => self.free,
        };
        self.current += (target - self.current) * STAR_LERP;
        self.spin += STAR_SPIN;
    }

    pub fn position(&self) -> Vector3<f32> {
        self.current
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }
}
