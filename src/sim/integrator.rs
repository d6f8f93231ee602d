//! Fixed-step gravity integration
//!
//! One stepping routine serves both the live registry and the spawn preview.
//! It advances a mutable slice of bodies while an immutable slice of
//! influences pulls on them without being pulled back or moved.
//!
//! Pairs are visited in ascending index order so a step is bit-reproducible.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::CelestialBody;
use crate::consts::{DISTANCE_FLOOR, G};

/// Integration scheme used by [`step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Position update from the previous force, velocity update from the
    /// average of previous and fresh force
    #[default]
    VelocityVerlet,
    /// Kick then drift with the force at the start of the step
    SymplecticEuler,
    /// Drift and kick both from the start-of-step state (drifts badly; baseline)
    ExplicitEuler,
}

/// Tunable physics constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Gravitational constant
    pub gravity: f32,
    /// Lower bound on squared separation
    pub distance_floor: f32,
    pub scheme: Scheme,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: G,
            distance_floor: DISTANCE_FLOOR,
            scheme: Scheme::VelocityVerlet,
        }
    }
}

/// Gravitational pull exerted on `a` by `b`
///
/// F = G * m_a * m_b / max(r², floor), directed from `a` toward `b`.
/// Exactly coincident bodies exert no force on each other.
#[inline]
pub fn gravitational_force(a: &CelestialBody, b: &CelestialBody, params: &PhysicsParams) -> Vec2 {
    let r = b.position - a.position;
    let r2 = r.length_squared().max(params.distance_floor);
    r.normalize_or_zero() * (params.gravity * a.mass() * b.mass() / r2)
}

/// Add gravitational forces into each body's `force` accumulator.
///
/// Mutable bodies attract each other (equal and opposite per pair) and
/// are attracted by every influence.
pub fn accumulate_forces(
    bodies: &mut [CelestialBody],
    influences: &[CelestialBody],
    params: &PhysicsParams,
) {
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let f = gravitational_force(&bodies[i], &bodies[j], params);
            bodies[i].force += f;
            bodies[j].force -= f;
        }
        for other in influences {
            let f = gravitational_force(&bodies[i], other, params);
            bodies[i].force += f;
        }
    }
}

#[inline]
fn integrate_position(body: &mut CelestialBody, dt: f32) {
    // x(t + dt) = x(t) + v(t) * dt + 0.5 * a(t) * dt^2
    body.position += body.velocity * dt + body.prev_force * (0.5 * body.inv_mass * dt * dt);
}

#[inline]
fn integrate_velocity(body: &mut CelestialBody, dt: f32) {
    // v(t + dt) = v(t) + 0.5 * (a(t) + a(t + dt)) * dt
    body.velocity += (body.prev_force + body.force) * (0.5 * body.inv_mass * dt);
}

/// Advance `bodies` by one fixed step of `dt` seconds.
///
/// `influences` are never modified. Pass an empty slice for a closed system.
pub fn step(
    bodies: &mut [CelestialBody],
    influences: &[CelestialBody],
    params: &PhysicsParams,
    dt: f32,
) {
    for body in bodies.iter_mut() {
        body.prev_position = body.position;
        body.prev_force = body.force;
        body.force = Vec2::ZERO;
    }

    match params.scheme {
        Scheme::VelocityVerlet => {
            for body in bodies.iter_mut() {
                integrate_position(body, dt);
            }
            accumulate_forces(bodies, influences, params);
            for body in bodies.iter_mut() {
                integrate_velocity(body, dt);
            }
        }
        Scheme::SymplecticEuler => {
            accumulate_forces(bodies, influences, params);
            for body in bodies.iter_mut() {
                body.velocity += body.force * (body.inv_mass * dt);
                body.position += body.velocity * dt;
            }
        }
        Scheme::ExplicitEuler => {
            accumulate_forces(bodies, influences, params);
            for body in bodies.iter_mut() {
                body.position += body.velocity * dt;
                body.velocity += body.force * (body.inv_mass * dt);
            }
        }
    }
}
