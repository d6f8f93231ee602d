//! Simulation state
//!
//! Everything the frame loop mutates lives in one explicit struct so the
//! core runs (and is tested) without a window.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::CelestialBody;
use super::energy::EnergyReport;
use super::integrator::PhysicsParams;
use super::registry::BodyRegistry;
use super::scheduler::FixedStepScheduler;
use super::spawn::SpawnController;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed the spawn RNG was created from
    pub seed: u64,
    pub params: PhysicsParams,
    pub registry: BodyRegistry,
    pub scheduler: FixedStepScheduler,
    pub spawner: SpawnController,
    /// Fixed steps run since creation
    pub time_ticks: u64,
    /// Interpolation factor from the most recent frame
    pub alpha: f32,
    pub(crate) rng: Pcg32,
}

impl SimState {
    /// Build the configured scene around `center` (usually the screen centre)
    pub fn new(settings: &Settings, center: Vec2) -> Self {
        let bodies = settings.scene_specs().into_iter().map(|spec| spec.build(center));
        let state = Self::with_bodies(settings, bodies);
        log::info!(
            "Created {} scene with {} bodies (seed {})",
            settings.scene.as_str(),
            state.registry.len(),
            state.seed
        );
        state
    }

    /// Start from an explicit set of bodies
    pub fn with_bodies<I>(settings: &Settings, bodies: I) -> Self
    where
        I: IntoIterator<Item = CelestialBody>,
    {
        Self {
            seed: settings.seed,
            params: settings.physics,
            registry: bodies.into_iter().collect(),
            scheduler: FixedStepScheduler::new(settings.sim_dt, settings.max_frame_time),
            spawner: SpawnController::new(settings.spawn),
            time_ticks: 0,
            alpha: 0.0,
            rng: Pcg32::seed_from_u64(settings.seed),
        }
    }

    /// Total mechanical energy of the registry
    pub fn energy(&self) -> EnergyReport {
        EnergyReport::measure(self.registry.as_slice(), &self.params)
    }

    /// Simulated seconds since creation
    pub fn sim_time(&self) -> f32 {
        self.time_ticks as f32 * self.scheduler.step_size()
    }
}
