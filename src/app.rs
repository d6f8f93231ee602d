//! Frame loop
//!
//! Single-threaded: each iteration measures the frame, advances the
//! simulation, handles spawning, draws and presents before the next begins.

use crate::platform::Platform;
use crate::renderer::{MeshCanvas, draw_frame};
use crate::settings::Settings;
use crate::sim::{EnergyReport, PointerInput, SimState, advance_frame};

/// How often (in frames) energy diagnostics are logged
const ENERGY_LOG_INTERVAL: u64 = 120;

/// Totals from one run of the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunSummary {
    pub frames: u64,
    pub steps: u64,
    pub spawned: usize,
    pub initial_energy: EnergyReport,
    pub final_energy: EnergyReport,
}

/// Build the simulation for the platform's screen
pub fn create_state<P: Platform + ?Sized>(platform: &P, settings: &Settings) -> SimState {
    SimState::new(settings, platform.screen_size() * 0.5)
}

/// Run until the platform asks to close
pub fn run<P: Platform + ?Sized>(
    platform: &mut P,
    state: &mut SimState,
    settings: &Settings,
) -> RunSummary {
    let mut canvas = MeshCanvas::new(settings.display.circle_segments);
    let mut summary = RunSummary {
        initial_energy: state.energy(),
        ..Default::default()
    };

    while !platform.should_close() {
        let dt = platform.frame_time();
        let input: PointerInput = platform.pointer();
        let frame = advance_frame(state, &input, dt);

        summary.frames += 1;
        summary.steps += u64::from(frame.steps);
        if frame.committed.is_some() {
            summary.spawned += 1;
        }

        if summary.frames % ENERGY_LOG_INTERVAL == 0 {
            let energy = state.energy();
            log::debug!(
                "t={:.2}s bodies={} total={:.1} kinetic={:.1} potential={:.1}",
                state.sim_time(),
                state.registry.len(),
                energy.total,
                energy.kinetic,
                energy.potential
            );
        }

        draw_frame(&mut canvas, state, &settings.display, platform.fps());
        platform.present(&canvas);
    }

    summary.final_energy = state.energy();
    summary
}
