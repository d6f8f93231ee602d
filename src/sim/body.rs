//! Celestial body state
//!
//! A body is a point mass drawn as a disc. Mass is derived from density and
//! radius at creation and stored as its reciprocal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA display color (no physical meaning)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized `[r, g, b, a]` for vertex buffers
    pub fn to_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub const ORANGE: Color = Color::rgb(255, 161, 0);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RAYWHITE: Color = Color::rgb(245, 245, 245);
}

/// One simulated mass point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub position: Vec2,
    /// Position at the start of the last fixed step (for render interpolation)
    pub prev_position: Vec2,
    pub velocity: Vec2,
    /// Net force accumulated during the current step
    pub force: Vec2,
    /// Net force from the previous step
    pub prev_force: Vec2,
    pub radius: f32,
    pub inv_mass: f32,
    pub color: Color,
}

impl CelestialBody {
    /// Create a body at rest in force space.
    ///
    /// `density` and `radius` must be positive; callers clamp them.
    pub fn new(position: Vec2, velocity: Vec2, density: f32, radius: f32, color: Color) -> Self {
        debug_assert!(density > 0.0 && radius > 0.0);
        Self {
            position,
            prev_position: position,
            velocity,
            force: Vec2::ZERO,
            prev_force: Vec2::ZERO,
            radius,
            inv_mass: 1.0 / (density * radius * radius),
            color,
        }
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        1.0 / self.inv_mass
    }

    /// Position blended between the last two fixed steps
    #[inline]
    pub fn interpolated_position(&self, alpha: f32) -> Vec2 {
        self.prev_position.lerp(self.position, alpha)
    }

    /// Clear both force accumulators
    pub fn clear_forces(&mut self) {
        self.force = Vec2::ZERO;
        self.prev_force = Vec2::ZERO;
    }
}
