//! Fixed-step scheduler
//!
//! Converts variable frame durations into a whole number of fixed simulation
//! steps. Leftover time carries over to the next frame and is exposed as an
//! interpolation factor for rendering.

use crate::consts::SIM_DT;

/// What one frame of scheduling produced
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameSteps {
    /// Fixed steps run this frame
    pub steps: u32,
    /// Blend factor in `[0, 1)` between previous and current positions
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixedStepScheduler {
    step: f32,
    accumulator: f32,
    max_frame_time: Option<f32>,
}

impl Default for FixedStepScheduler {
    fn default() -> Self {
        Self::new(SIM_DT, None)
    }
}

impl FixedStepScheduler {
    /// `step` must be positive. `max_frame_time` optionally clamps a single
    /// long frame (debugger pause, window drag); clamped time is dropped.
    pub fn new(step: f32, max_frame_time: Option<f32>) -> Self {
        debug_assert!(step > 0.0);
        Self {
            step,
            accumulator: 0.0,
            max_frame_time,
        }
    }

    pub fn step_size(&self) -> f32 {
        self.step
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Feed one frame's measured duration, calling `on_step` once per fixed step.
    ///
    /// A frame of exactly zero duration does nothing and reports alpha 0.
    pub fn advance<F: FnMut(f32)>(&mut self, frame_dt: f32, mut on_step: F) -> FrameSteps {
        if frame_dt == 0.0 {
            return FrameSteps::default();
        }

        let frame_dt = match self.max_frame_time {
            Some(max) => frame_dt.min(max),
            None => frame_dt,
        };
        self.accumulator += frame_dt;

        let mut steps = 0;
        while self.accumulator >= self.step {
            on_step(self.step);
            self.accumulator -= self.step;
            steps += 1;
        }

        FrameSteps {
            steps,
            alpha: self.accumulator / self.step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_frame_is_idle() {
        let mut scheduler = FixedStepScheduler::default();
        let mut calls = 0;
        let out = scheduler.advance(0.0, |_| calls += 1);
        assert_eq!(out, FrameSteps { steps: 0, alpha: 0.0 });
        assert_eq!(calls, 0);
        assert_eq!(scheduler.accumulator(), 0.0);
    }

    #[test]
    fn test_short_frames_carry_over() {
        let mut scheduler = FixedStepScheduler::new(0.25, None);
        let out = scheduler.advance(0.125, |_| panic!("no step expected"));
        assert_eq!(out.steps, 0);
        assert_eq!(out.alpha, 0.5);

        let out = scheduler.advance(0.125, |dt| assert_eq!(dt, 0.25));
        assert_eq!(out.steps, 1);
        assert_eq!(out.alpha, 0.0);
    }

    #[test]
    fn test_long_frame_catches_up() {
        let mut scheduler = FixedStepScheduler::new(0.25, None);
        let mut calls = 0;
        let out = scheduler.advance(1.125, |_| calls += 1);
        assert_eq!(out.steps, 4);
        assert_eq!(calls, 4);
        assert_eq!(out.alpha, 0.5);
    }

    #[test]
    fn test_max_frame_time_clamps() {
        let mut scheduler = FixedStepScheduler::new(0.25, Some(0.5));
        let out = scheduler.advance(10.0, |_| {});
        assert_eq!(out.steps, 2);
        assert_eq!(out.alpha, 0.0);
    }

    #[test]
    fn test_default_keeps_long_frames() {
        let mut scheduler = FixedStepScheduler::default();
        let out = scheduler.advance(0.5, |_| {});
        let accounted = out.steps as f32 * scheduler.step_size() + scheduler.accumulator();
        assert!((accounted - 0.5).abs() < 1e-4, "accounted for {accounted}s of 0.5s");
        assert!(out.steps >= 59);
    }

    #[test]
    fn test_long_frame_matches_split_frames() {
        let step = 1.0 / 128.0;
        let mut whole = FixedStepScheduler::new(step, None);
        let mut split = FixedStepScheduler::new(step, None);

        let one = whole.advance(0.5, |_| {});
        let two = split.advance(0.25, |_| {}).steps + split.advance(0.25, |_| {}).steps;
        assert_eq!(one.steps, 64);
        assert_eq!(one.steps, two);
        assert_eq!(whole.accumulator(), split.accumulator());
    }

    #[test]
    fn test_alpha_stays_below_one() {
        let mut scheduler = FixedStepScheduler::default();
        for i in 0..500 {
            let frame = 0.001 + (i % 7) as f32 * 0.003;
            let out = scheduler.advance(frame, |_| {});
            assert!((0.0..1.0).contains(&out.alpha), "alpha {}", out.alpha);
        }
    }
}
