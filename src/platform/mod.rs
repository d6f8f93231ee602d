//! Platform abstraction layer
//!
//! Window lifecycle, frame timing and pointer input come from a [`Platform`].
//! A real windowing backend implements it; [`headless::ScriptedPlatform`]
//! replays a fixed input script for the binary and tests.

pub mod headless;

pub use headless::{ScriptedFrame, ScriptedPlatform};

use glam::Vec2;

use crate::renderer::MeshCanvas;
use crate::sim::PointerInput;

/// Services the frame loop needs from the host
pub trait Platform {
    /// Close requested (window close, end of script)
    fn should_close(&self) -> bool;
    /// Begin the next frame and return the previous frame's duration in seconds
    fn frame_time(&mut self) -> f32;
    /// Frames per second over the recent window
    fn fps(&self) -> u32;
    /// Pointer state for the current frame
    fn pointer(&self) -> PointerInput;
    /// Drawable size in pixels
    fn screen_size(&self) -> Vec2;
    /// Show a finished frame
    fn present(&mut self, canvas: &MeshCanvas);
}

/// Derives edge-triggered press/release from a held-button signal
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    was_down: bool,
}

impl PointerTracker {
    pub fn sample(&mut self, position: Vec2, down: bool) -> PointerInput {
        let input = PointerInput {
            position,
            pressed: down && !self.was_down,
            released: !down && self.was_down,
            down,
        };
        self.was_down = down;
        input
    }
}

/// Number of frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Rolling FPS over the last [`FPS_WINDOW`] frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f32; FPS_WINDOW],
    frame_index: usize,
    filled: usize,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            filled: 0,
        }
    }
}

impl FpsCounter {
    pub fn record(&mut self, dt: f32) {
        self.frame_times[self.frame_index] = dt;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.filled = (self.filled + 1).min(FPS_WINDOW);
    }

    pub fn fps(&self) -> u32 {
        let elapsed: f32 = self.frame_times[..self.filled].iter().sum();
        if elapsed > 0.0 {
            (self.filled as f32 / elapsed).round() as u32
        } else {
            0
        }
    }
}
