//! Scripted, windowless platform

use std::collections::VecDeque;

use glam::Vec2;

use super::{FpsCounter, Platform, PointerTracker};
use crate::renderer::MeshCanvas;
use crate::renderer::vertex::as_bytes;
use crate::sim::PointerInput;

/// One frame of scripted input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedFrame {
    pub dt: f32,
    pub pointer: Vec2,
    pub down: bool,
}

/// Replays frames from a script; requests close when the script runs out
#[derive(Debug, Clone)]
pub struct ScriptedPlatform {
    script: VecDeque<ScriptedFrame>,
    screen: Vec2,
    tracker: PointerTracker,
    current: PointerInput,
    fps: FpsCounter,
    /// Frames presented so far
    pub presented: usize,
    /// Triangle count of the last presented frame
    pub last_triangles: usize,
    /// Vertex buffer size of the last presented frame
    pub last_upload_bytes: usize,
}

impl ScriptedPlatform {
    pub fn new(screen: Vec2) -> Self {
        Self {
            script: VecDeque::new(),
            screen,
            tracker: PointerTracker::default(),
            current: PointerInput::default(),
            fps: FpsCounter::default(),
            presented: 0,
            last_triangles: 0,
            last_upload_bytes: 0,
        }
    }

    pub fn push(&mut self, frame: ScriptedFrame) -> &mut Self {
        self.script.push_back(frame);
        self
    }

    /// Frames with the button up and the pointer resting at `pointer`
    pub fn idle(&mut self, frames: usize, dt: f32, pointer: Vec2) -> &mut Self {
        for _ in 0..frames {
            self.push(ScriptedFrame {
                dt,
                pointer,
                down: false,
            });
        }
        self
    }

    /// Press at `from`, move linearly to `to` over `frames` held frames, release at `to`
    pub fn drag(&mut self, from: Vec2, to: Vec2, frames: usize, dt: f32) -> &mut Self {
        let frames = frames.max(1);
        for i in 0..frames {
            let t = i as f32 / frames as f32;
            self.push(ScriptedFrame {
                dt,
                pointer: from.lerp(to, t),
                down: true,
            });
        }
        self.push(ScriptedFrame {
            dt,
            pointer: to,
            down: false,
        })
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Platform for ScriptedPlatform {
    fn should_close(&self) -> bool {
        self.script.is_empty()
    }

    fn frame_time(&mut self) -> f32 {
        let Some(frame) = self.script.pop_front() else {
            return 0.0;
        };
        self.current = self.tracker.sample(frame.pointer, frame.down);
        self.fps.record(frame.dt);
        frame.dt
    }

    fn fps(&self) -> u32 {
        self.fps.fps()
    }

    fn pointer(&self) -> PointerInput {
        self.current
    }

    fn screen_size(&self) -> Vec2 {
        self.screen
    }

    fn present(&mut self, canvas: &MeshCanvas) {
        self.presented += 1;
        self.last_triangles = canvas.triangle_count();
        self.last_upload_bytes = as_bytes(&canvas.vertices).len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_script_edges() {
        let mut platform = ScriptedPlatform::new(Vec2::new(800.0, 600.0));
        platform.drag(Vec2::new(100.0, 100.0), Vec2::new(150.0, 100.0), 5, 0.01);
        assert_eq!(platform.remaining(), 6);

        let mut inputs = Vec::new();
        while !platform.should_close() {
            assert_eq!(platform.frame_time(), 0.01);
            inputs.push(platform.pointer());
        }
        assert!(inputs[0].pressed);
        assert_eq!(inputs[0].position, Vec2::new(100.0, 100.0));
        assert!(inputs[1..5].iter().all(|i| i.down && !i.pressed && !i.released));
        assert!(inputs[5].released);
        assert_eq!(inputs[5].position, Vec2::new(150.0, 100.0));
    }

    #[test]
    fn test_exhausted_script_reports_zero_time() {
        let mut platform = ScriptedPlatform::new(Vec2::ONE);
        assert!(platform.should_close());
        assert_eq!(platform.frame_time(), 0.0);
    }
}
