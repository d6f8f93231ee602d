//! Orbit Sandbox - an interactive 2D gravitational N-body simulator
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, Verlet integration, scheduling, spawning)
//! - `renderer`: Draw-call seam and vertex tessellation
//! - `platform`: Window/input/timing abstraction
//! - `settings`: Data-driven tuning loaded from JSON

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{SceneKind, Settings};

/// Simulation configuration constants
pub mod consts {
    /// Gravitational constant (world units, tuned for screen-sized orbits)
    pub const G: f32 = 30.0;
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Number of forecast steps in the spawn preview path
    pub const PATH_POINTS: usize = 10_000;
    /// Squared-distance floor applied before dividing by r²
    pub const DISTANCE_FLOOR: f32 = 1e-6;

    /// Spawn sampling ranges
    pub const SPAWN_DENSITY_MIN: f32 = 1.0;
    pub const SPAWN_DENSITY_MAX: f32 = 20.0;
    pub const SPAWN_RADIUS_MIN: f32 = 20.0;
    pub const SPAWN_RADIUS_MAX: f32 = 60.0;

    /// Preview path line width (pixels)
    pub const PATH_WIDTH: f32 = 4.0;
}
