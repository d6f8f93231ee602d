//! Conservation diagnostics
//!
//! Total mechanical energy and linear momentum of a set of bodies. Used by
//! the HUD and by the integrator's drift tests.

use glam::Vec2;

use super::body::CelestialBody;
use super::integrator::PhysicsParams;

/// Kinetic, potential and total energy at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyReport {
    pub kinetic: f32,
    pub potential: f32,
    pub total: f32,
}

impl EnergyReport {
    /// Measure the energy of `bodies` under the given gravity constant.
    ///
    /// Pair separations are floored the same way forces are, so coincident
    /// bodies report a large finite potential instead of -inf.
    pub fn measure(bodies: &[CelestialBody], params: &PhysicsParams) -> Self {
        let kinetic: f32 = bodies
            .iter()
            .map(|b| 0.5 * b.mass() * b.velocity.length_squared())
            .sum();

        let mut potential = 0.0;
        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                let r2 = (b.position - a.position)
                    .length_squared()
                    .max(params.distance_floor);
                potential -= params.gravity * a.mass() * b.mass() / r2.sqrt();
            }
        }

        Self {
            kinetic,
            potential,
            total: kinetic + potential,
        }
    }
}

/// Sum of mass * velocity
pub fn total_momentum(bodies: &[CelestialBody]) -> Vec2 {
    bodies.iter().map(|b| b.velocity * b.mass()).sum()
}
