//! Simulation settings and preferences
//!
//! Loaded from an optional JSON file. Every field has a default, so a file
//! only needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{BodySpec, Color, PhysicsParams, SpawnRanges, reference_scene, two_body_scene};

/// Which initial scene to build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Central star with three planets
    #[default]
    Reference,
    /// Heavy body plus one light body on a circular orbit
    TwoBody,
    /// User-provided bodies
    Custom(Vec<BodySpec>),
}

impl SceneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneKind::Reference => "reference",
            SceneKind::TwoBody => "two_body",
            SceneKind::Custom(_) => "custom",
        }
    }
}

/// HUD and drawing preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Show FPS counter
    pub show_fps: bool,
    /// Show kinetic/potential/total energy lines
    pub show_energy: bool,
    /// Preview path line width
    pub path_width: f32,
    /// Triangles per body disc
    pub circle_segments: u32,
    pub background: Color,
    pub text: Color,
    pub path: Color,
    pub text_size: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_fps: true,
            show_energy: true,
            path_width: PATH_WIDTH,
            circle_segments: 48,
            background: Color::RAYWHITE,
            text: Color::BLACK,
            path: Color::BLUE,
            text_size: 30.0,
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for spawn sampling
    pub seed: u64,
    /// Fixed simulation step (seconds)
    pub sim_dt: f32,
    /// Optional clamp for a single frame's duration (time beyond it is dropped)
    pub max_frame_time: Option<f32>,
    pub physics: PhysicsParams,
    pub spawn: SpawnRanges,
    pub scene: SceneKind,
    pub display: DisplaySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed_0f_0b17,
            sim_dt: SIM_DT,
            max_frame_time: None,
            physics: PhysicsParams::default(),
            spawn: SpawnRanges::default(),
            scene: SceneKind::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON and sanitize them
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range values so every quantity is valid by construction
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.sim_dt.is_finite() && self.sim_dt > 0.0) {
            log::warn!("sim_dt {} is not positive; using {}", self.sim_dt, defaults.sim_dt);
            self.sim_dt = defaults.sim_dt;
        }
        self.max_frame_time = self.max_frame_time.filter(|t| t.is_finite() && *t > 0.0);

        let physics = &mut self.physics;
        if !physics.gravity.is_finite() {
            physics.gravity = defaults.physics.gravity;
        }
        // The floor must stay positive: at zero separation the force is 0 * 1/floor
        if !(physics.distance_floor.is_finite() && physics.distance_floor > 0.0) {
            log::warn!(
                "distance_floor {} is not positive; using {}",
                physics.distance_floor,
                defaults.physics.distance_floor
            );
            physics.distance_floor = defaults.physics.distance_floor;
        }

        self.spawn = self.spawn.sanitized();

        if let SceneKind::Custom(specs) = &mut self.scene {
            let before = specs.len();
            specs.retain(BodySpec::is_valid);
            if specs.len() != before {
                log::warn!("Dropped {} invalid bodies from custom scene", before - specs.len());
            }
        }

        self.display.circle_segments = self.display.circle_segments.max(3);
        self
    }

    /// Body specs for the configured scene
    pub fn scene_specs(&self) -> Vec<BodySpec> {
        match &self.scene {
            SceneKind::Reference => reference_scene(),
            SceneKind::TwoBody => two_body_scene(self.physics.gravity),
            SceneKind::Custom(specs) => specs.clone(),
        }
    }
}
