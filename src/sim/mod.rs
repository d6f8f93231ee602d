//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (ascending body index)
//! - No rendering or platform dependencies

pub mod body;
pub mod energy;
pub mod frame;
pub mod integrator;
pub mod registry;
pub mod scenario;
pub mod scheduler;
pub mod spawn;
pub mod state;

pub use body::{CelestialBody, Color};
pub use energy::{EnergyReport, total_momentum};
pub use frame::{FrameOutcome, advance_frame};
pub use integrator::{PhysicsParams, Scheme, accumulate_forces, gravitational_force, step};
pub use registry::BodyRegistry;
pub use scenario::{BodySpec, reference_scene, two_body_scene};
pub use scheduler::{FixedStepScheduler, FrameSteps};
pub use spawn::{PointerInput, SpawnController, SpawnPhase, SpawnRanges};
pub use state::SimState;
