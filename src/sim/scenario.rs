//! Initial scenes
//!
//! A scene is a list of [`BodySpec`]s placed relative to the screen centre.
//! Specs are `serde`-friendly so custom scenes can be supplied through
//! settings.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{CelestialBody, Color};

/// Initial state of one body, relative to the screen centre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub offset: Vec2,
    pub velocity: Vec2,
    pub density: f32,
    pub radius: f32,
    pub color: Color,
}

impl BodySpec {
    pub fn build(&self, center: Vec2) -> CelestialBody {
        CelestialBody::new(
            center + self.offset,
            self.velocity,
            self.density,
            self.radius,
            self.color,
        )
    }

    /// Reject specs that would give a non-positive or non-finite mass
    pub fn is_valid(&self) -> bool {
        self.density > 0.0
            && self.radius > 0.0
            && self.density.is_finite()
            && self.radius.is_finite()
            && self.offset.is_finite()
            && self.velocity.is_finite()
    }
}

/// Speed of a circular orbit of radius `r` around mass `central_mass`
pub fn circular_orbit_speed(gravity: f32, central_mass: f32, r: f32) -> f32 {
    (gravity * central_mass / r).sqrt()
}

/// Period of a circular orbit of radius `r` around mass `central_mass`
pub fn orbital_period(gravity: f32, central_mass: f32, r: f32) -> f32 {
    std::f32::consts::TAU * r / circular_orbit_speed(gravity, central_mass, r)
}

/// Large central star with three orbiting planets
pub fn reference_scene() -> Vec<BodySpec> {
    vec![
        BodySpec {
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            density: 100.0,
            radius: 100.0,
            color: Color::ORANGE,
        },
        BodySpec {
            offset: Vec2::new(500.0, 0.0),
            velocity: Vec2::new(0.0, 3.0 * 60.0),
            density: 1.0,
            radius: 30.0,
            color: Color::BLUE,
        },
        BodySpec {
            offset: Vec2::new(-500.0, 0.0),
            velocity: Vec2::new(0.0, -3.0 * 60.0),
            density: 2.0,
            radius: 30.0,
            color: Color::RED,
        },
        BodySpec {
            offset: Vec2::new(0.0, 900.0),
            velocity: Vec2::new(3.0 * 60.0, 0.0),
            density: 10.0,
            radius: 50.0,
            color: Color::GREEN,
        },
    ]
}

/// Heavy body at the centre and a light body on a near-circular orbit 500 units out
pub fn two_body_scene(gravity: f32) -> Vec<BodySpec> {
    let heavy = BodySpec {
        offset: Vec2::ZERO,
        velocity: Vec2::ZERO,
        density: 100.0,
        radius: 100.0,
        color: Color::ORANGE,
    };
    let heavy_mass = heavy.density * heavy.radius * heavy.radius;
    let light = BodySpec {
        offset: Vec2::new(500.0, 0.0),
        velocity: Vec2::new(0.0, circular_orbit_speed(gravity, heavy_mass, 500.0)),
        density: 1.0,
        radius: 10.0,
        color: Color::BLUE,
    };
    vec![heavy, light]
}
