//! Per-frame simulation advance
//!
//! One call per rendered frame: run however many fixed steps the measured
//! frame time allows, then process pointer input for spawning.

use super::spawn::PointerInput;
use super::state::SimState;

/// Result of advancing one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameOutcome {
    /// Fixed steps run this frame
    pub steps: u32,
    /// Render blend factor between previous and current positions
    pub alpha: f32,
    /// Registry index of a body committed this frame
    pub committed: Option<usize>,
}

/// Advance the simulation by one variable-length frame
pub fn advance_frame(state: &mut SimState, input: &PointerInput, frame_dt: f32) -> FrameOutcome {
    let registry = &mut state.registry;
    let params = &state.params;
    let frame = state
        .scheduler
        .advance(frame_dt, |dt| registry.step(params, dt));
    state.time_ticks += u64::from(frame.steps);
    state.alpha = frame.alpha;

    if frame.steps > 1 {
        log::trace!("Caught up {} steps in one frame", frame.steps);
    }

    let step = state.scheduler.step_size();
    let committed = state.spawner.update(
        input,
        &mut state.registry,
        &state.params,
        step,
        &mut state.rng,
    );

    FrameOutcome {
        steps: frame.steps,
        alpha: frame.alpha,
        committed,
    }
}
