//! User photo elements - the focusable subset
//!
//! Photos are ordinary animated elements plus a base orientation and
//! focus eligibility. The collection only grows, up to the tier's cap;
//! texture handling stays in the JS shell.

use std::f32::consts::PI;

use nalgebra::{Rotation3, Vector3};

use crate::interaction::InteractionMode;

use super::config::SceneConfig;
use super::layout;
use super::rng::XorShift32;

/// Convergence factor for photo position and scale, per tick
pub const PHOTO_LERP: f32 = 0.1;

/// Target scales per mode
pub const SCALE_FORMATION: f32 = 2.0;
pub const SCALE_DISPERSED: f32 = 8.0;
pub const SCALE_FOCUSED: f32 = 12.0;

/// Vertical float amplitude outside Formation
const PHOTO_WOBBLE: f32 = 0.01;

/// Yaw accumulated per Formation tick on top of the base orientation
const PHOTO_SPIN: f32 = 0.01;

/// Free positions land on this sphere shell
const FREE_RADIUS: f32 = 50.0;

pub struct PhotoElement {
    pub rest: Vector3<f32>,
    pub free: Vector3<f32>,
    pub current: Vector3<f32>,
    /// Animated scale, lerped toward the mode target
    pub scale: f32,
    /// Fixed formation orientation assigned at creation
    pub base_yaw: f32,
    /// Slow spin accumulated while gathered
    pub spin: f32,
    /// Renderer should orient this photo toward the viewpoint this tick
    pub faces_viewpoint: bool,
}

impl PhotoElement {
    pub fn yaw(&self) -> f32 {
        self.base_yaw + self.spin
    }
}

pub struct PhotoSet {
    photos: Vec<PhotoElement>,
    max: usize,
}

impl PhotoSet {
    pub fn new(max: usize) -> Self {
        Self {
            photos: Vec::new(),
            max,
        }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn photos(&self) -> &[PhotoElement] {
        &self.photos
    }

    /// Add one photo element, if the cap allows. Returns its index.
    pub fn try_add(&mut self, rng: &mut XorShift32, cfg: &SceneConfig) -> Option<usize> {
        if self.photos.len() >= self.max {
            return None;
        }
        let rest = layout::photo_rest_point(rng, cfg);
        let free = layout::sphere_point(rng, FREE_RADIUS);
        self.photos.push(PhotoElement {
            rest,
            free,
            current: rest,
            scale: 1.0,
            base_yaw: rng.next_f32() * PI,
            spin: 0.0,
            faces_viewpoint: false,
        });
        Some(self.photos.len() - 1)
    }

    /// Advance all photos one tick. `anchor_local` is the inspection
    /// placement target already transformed into formation-local space.
    pub fn update(&mut self, mode: InteractionMode, time: f32, anchor_local: Vector3<f32>) {
        let pinned = mode.focus_target();
        for (i, photo) in self.photos.iter_mut().enumerate() {
            let mut target_scale = SCALE_FORMATION;
            let mut faces = false;
            if mode == InteractionMode::Dispersed {
                target_scale = SCALE_DISPERSED;
                faces = true;
            }

            let target_pos = if pinned == Some(i) {
                target_scale = SCALE_FOCUSED;
                faces = true;
                anchor_local
            } else {
                if mode != InteractionMode::Formation {
                    photo.current.y += (time + i as f32).sin() * PHOTO_WOBBLE;
                } else {
                    photo.spin += PHOTO_SPIN;
                }
                match mode {
                    InteractionMode::Formation => photo.rest,
                    _ => photo.free,
                }
            };

            photo.current += (target_pos - photo.current) * PHOTO_LERP;
            photo.scale += (target_scale - photo.scale) * PHOTO_LERP;
            photo.faces_viewpoint = faces;
        }
    }

    /// World-space positions (formation orientation applied), used for
    /// focus-target selection against the viewpoint.
    pub fn world_positions(&self, orientation: &Rotation3<f32>) -> Vec<Vector3<f32>> {
        self.photos
            .iter()
            .map(|p| orientation * p.current)
            .collect()
    }

    /// 6 floats per photo: position, scale, faces-viewpoint flag, yaw
    pub fn write_transforms(&self, out: &mut Vec<f32>) {
        out.reserve(self.photos.len() * 6);
        for p in &self.photos {
            out.extend_from_slice(&[
                p.current.x,
                p.current.y,
                p.current.z,
                p.scale,
                if p.faces_viewpoint { 1.0 } else { 0.0 },
                p.yaw(),
            ]);
        }
    }
}
