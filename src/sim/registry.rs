//! Body registry
//!
//! Ordered, append-only storage for every simulated body. Insertion order
//! is the iteration order used by the integrator.

use super::body::CelestialBody;
use super::integrator::{self, PhysicsParams};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Add a body at the end
    pub fn append(&mut self, body: CelestialBody) {
        self.bodies.push(body);
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CelestialBody> {
        self.bodies.iter()
    }

    pub fn as_slice(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Advance every body by one fixed step as a closed system
    pub fn step(&mut self, params: &PhysicsParams, dt: f32) {
        integrator::step(&mut self.bodies, &[], params, dt);
    }
}

impl FromIterator<CelestialBody> for BodyRegistry {
    fn from_iter<I: IntoIterator<Item = CelestialBody>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BodyRegistry {
    type Item = &'a CelestialBody;
    type IntoIter = std::slice::Iter<'a, CelestialBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
