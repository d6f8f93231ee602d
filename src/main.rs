//! Orbit Sandbox entry point
//!
//! Runs the reference scene on the headless platform with a scripted
//! drag-to-launch, logging energy diagnostics. A windowing backend plugs in
//! through `orbit_sandbox::platform::Platform`.

use std::path::PathBuf;

use glam::Vec2;

use orbit_sandbox::Settings;
use orbit_sandbox::app;
use orbit_sandbox::platform::ScriptedPlatform;

/// Environment variable naming an optional JSON settings file
const SETTINGS_ENV: &str = "ORBIT_SANDBOX_SETTINGS";

const SCREEN: Vec2 = Vec2::new(1920.0, 1080.0);
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Orbit Sandbox starting...");

    let settings = match std::env::var_os(SETTINGS_ENV) {
        Some(path) => Settings::load(&PathBuf::from(path)),
        None => Settings::default(),
    };

    match settings.to_json() {
        Ok(json) => log::debug!("Effective settings:\n{json}"),
        Err(e) => log::warn!("Could not serialize settings: {e}"),
    }

    let center = SCREEN * 0.5;
    let mut platform = ScriptedPlatform::new(SCREEN);
    platform
        .idle(120, FRAME_DT, center)
        .drag(
            center + Vec2::new(0.0, -350.0),
            center + Vec2::new(-200.0, -350.0),
            45,
            FRAME_DT,
        )
        .idle(600, FRAME_DT, center);

    let mut state = app::create_state(&platform, &settings);
    let summary = app::run(&mut platform, &mut state, &settings);

    let start = summary.initial_energy.total;
    let end = summary.final_energy.total;
    log::info!(
        "Ran {} frames ({} steps, {:.1}s simulated), spawned {} bodies",
        summary.frames,
        summary.steps,
        state.sim_time(),
        summary.spawned
    );
    log::info!("Total energy {:.1} -> {:.1}", start, end);
}
