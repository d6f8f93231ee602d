//! Drag-to-launch spawning
//!
//! Pressing the pointer creates a candidate body at the press point. While
//! the pointer is held, the drag offset from that anchor sets the candidate's
//! launch velocity and a forward forecast of its path is recomputed. Releasing
//! commits the candidate to the registry.

use glam::Vec2;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{CelestialBody, Color};
use super::integrator::{self, PhysicsParams};
use super::registry::BodyRegistry;
use crate::consts::*;

/// Pointer state for a single button, sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    pub position: Vec2,
    /// Button went down this frame
    pub pressed: bool,
    /// Button went up this frame
    pub released: bool,
    /// Button is currently held
    pub down: bool,
}

impl PointerInput {
    pub fn idle(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Sampling ranges and launch tuning for spawned bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnRanges {
    pub density_min: f32,
    pub density_max: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Launch velocity per unit of drag distance
    pub launch_scale: f32,
    /// Forecast length in fixed steps
    pub preview_points: usize,
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            density_min: SPAWN_DENSITY_MIN,
            density_max: SPAWN_DENSITY_MAX,
            radius_min: SPAWN_RADIUS_MIN,
            radius_max: SPAWN_RADIUS_MAX,
            launch_scale: 1.0,
            preview_points: PATH_POINTS,
        }
    }
}

impl SpawnRanges {
    /// Keep both ranges positive, finite and ordered
    pub fn sanitized(mut self) -> Self {
        sanitize_range(
            &mut self.density_min,
            &mut self.density_max,
            SPAWN_DENSITY_MIN,
            SPAWN_DENSITY_MAX,
        );
        sanitize_range(
            &mut self.radius_min,
            &mut self.radius_max,
            SPAWN_RADIUS_MIN,
            SPAWN_RADIUS_MAX,
        );
        if !self.launch_scale.is_finite() {
            self.launch_scale = 1.0;
        }
        self
    }
}

fn sanitize_range(min: &mut f32, max: &mut f32, default_min: f32, default_max: f32) {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if !valid(*min) || !valid(*max) {
        *min = default_min;
        *max = default_max;
    } else if *min > *max {
        std::mem::swap(min, max);
    }
}

/// Spawn interaction phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnPhase {
    /// Waiting for a press
    Idle,
    /// Pointer held; candidate sits at `anchor`
    Dragging {
        anchor: Vec2,
        candidate: CelestialBody,
    },
}

#[derive(Debug, Clone)]
pub struct SpawnController {
    phase: SpawnPhase,
    ranges: SpawnRanges,
    /// Forecast positions, one per fixed step (valid while dragging)
    path: Vec<Vec2>,
}

impl SpawnController {
    pub fn new(ranges: SpawnRanges) -> Self {
        let ranges = ranges.sanitized();
        Self {
            phase: SpawnPhase::Idle,
            ranges,
            path: Vec::with_capacity(ranges.preview_points),
        }
    }

    pub fn phase(&self) -> &SpawnPhase {
        &self.phase
    }

    pub fn ranges(&self) -> &SpawnRanges {
        &self.ranges
    }

    /// Whether the forecast path should be shown
    pub fn preview_active(&self) -> bool {
        matches!(self.phase, SpawnPhase::Dragging { .. })
    }

    /// The body being aimed, if any
    pub fn candidate(&self) -> Option<&CelestialBody> {
        match &self.phase {
            SpawnPhase::Dragging { candidate, .. } => Some(candidate),
            SpawnPhase::Idle => None,
        }
    }

    /// Forecast path, only while the preview is active
    pub fn preview_path(&self) -> Option<&[Vec2]> {
        self.preview_active().then_some(self.path.as_slice())
    }

    fn launch_velocity(&self, anchor: Vec2, pointer: Vec2) -> Vec2 {
        (pointer - anchor) * self.ranges.launch_scale
    }

    /// Start aiming a freshly sampled body at `position`
    pub fn press<R: Rng + ?Sized>(&mut self, position: Vec2, rng: &mut R) {
        let color = Color::rgb(rng.random(), rng.random(), rng.random());
        let density = rng.random_range(self.ranges.density_min..=self.ranges.density_max);
        let radius = rng.random_range(self.ranges.radius_min..=self.ranges.radius_max);
        let candidate = CelestialBody::new(position, Vec2::ZERO, density, radius, color);

        self.path.clear();
        self.phase = SpawnPhase::Dragging {
            anchor: position,
            candidate,
        };
    }

    /// Update the launch velocity from the pointer and recompute the forecast.
    ///
    /// The candidate is attracted by every registry body; registry bodies
    /// stay fixed for the whole forecast.
    pub fn drag(
        &mut self,
        pointer: Vec2,
        registry: &BodyRegistry,
        params: &PhysicsParams,
        dt: f32,
    ) {
        let SpawnPhase::Dragging { anchor, candidate } = self.phase else {
            return;
        };
        let velocity = self.launch_velocity(anchor, pointer);
        if let SpawnPhase::Dragging { candidate, .. } = &mut self.phase {
            candidate.velocity = velocity;
        }

        let mut probe = candidate;
        probe.velocity = velocity;
        self.path.clear();
        for _ in 0..self.ranges.preview_points {
            integrator::step(std::slice::from_mut(&mut probe), registry.as_slice(), params, dt);
            self.path.push(probe.position);
        }
    }

    /// Finish aiming. Returns the committed body with zeroed forces.
    pub fn release(&mut self, pointer: Vec2) -> Option<CelestialBody> {
        let SpawnPhase::Dragging { anchor, mut candidate } = self.phase else {
            return None;
        };
        self.phase = SpawnPhase::Idle;
        candidate.velocity = self.launch_velocity(anchor, pointer);
        candidate.clear_forces();
        Some(candidate)
    }

    /// Drive the controller from one frame of pointer input.
    ///
    /// Returns the registry index of a body committed this frame.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        input: &PointerInput,
        registry: &mut BodyRegistry,
        params: &PhysicsParams,
        dt: f32,
        rng: &mut R,
    ) -> Option<usize> {
        if input.pressed {
            self.press(input.position, rng);
        }

        let mut committed = None;
        if input.released {
            if let Some(body) = self.release(input.position) {
                registry.append(body);
                let index = registry.len() - 1;
                info!(
                    "Spawned body {} at ({:.1}, {:.1}) with velocity ({:.1}, {:.1})",
                    index, body.position.x, body.position.y, body.velocity.x, body.velocity.y
                );
                committed = Some(index);
            }
        }

        if input.down {
            self.drag(input.position, registry, params, dt);
        }

        committed
    }
}

impl Default for SpawnController {
    fn default() -> Self {
        Self::new(SpawnRanges::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn short_ranges() -> SpawnRanges {
        SpawnRanges {
            preview_points: 240,
            ..Default::default()
        }
    }

    fn press_at(x: f32, y: f32) -> PointerInput {
        PointerInput {
            position: Vec2::new(x, y),
            pressed: true,
            released: false,
            down: true,
        }
    }

    fn hold_at(x: f32, y: f32) -> PointerInput {
        PointerInput {
            position: Vec2::new(x, y),
            pressed: false,
            released: false,
            down: true,
        }
    }

    fn release_at(x: f32, y: f32) -> PointerInput {
        PointerInput {
            position: Vec2::new(x, y),
            pressed: false,
            released: true,
            down: false,
        }
    }

    #[test]
    fn test_drag_and_release_commits_body() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut spawner = SpawnController::new(short_ranges());
        let mut registry = BodyRegistry::new();
        let params = PhysicsParams::default();

        spawner.update(&press_at(100.0, 100.0), &mut registry, &params, SIM_DT, &mut rng);
        assert!(spawner.preview_active());
        spawner.update(&hold_at(150.0, 100.0), &mut registry, &params, SIM_DT, &mut rng);
        assert!(spawner.preview_active());
        assert!(registry.is_empty());

        let committed =
            spawner.update(&release_at(150.0, 100.0), &mut registry, &params, SIM_DT, &mut rng);
        assert_eq!(committed, Some(0));
        assert_eq!(registry.len(), 1);
        assert!(!spawner.preview_active());
        assert!(spawner.preview_path().is_none());

        let body = registry.get(0).unwrap();
        assert_eq!(body.position, Vec2::new(100.0, 100.0));
        assert_eq!(body.velocity, Vec2::new(50.0, 0.0));
        assert_eq!(body.force, Vec2::ZERO);
        assert_eq!(body.prev_force, Vec2::ZERO);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = SpawnController::new(short_ranges());
        let mut registry = BodyRegistry::new();
        let committed = spawner.update(
            &release_at(10.0, 10.0),
            &mut registry,
            &PhysicsParams::default(),
            SIM_DT,
            &mut rng,
        );
        assert_eq!(committed, None);
        assert!(registry.is_empty());
        assert_eq!(*spawner.phase(), SpawnPhase::Idle);
    }

    #[test]
    fn test_candidate_stays_at_anchor_while_dragging() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut spawner = SpawnController::new(short_ranges());
        let mut registry = BodyRegistry::new();
        let params = PhysicsParams::default();

        spawner.update(&press_at(0.0, 0.0), &mut registry, &params, SIM_DT, &mut rng);
        for x in [10.0, 40.0, -25.0] {
            spawner.update(&hold_at(x, 5.0), &mut registry, &params, SIM_DT, &mut rng);
            let candidate = spawner.candidate().unwrap();
            assert_eq!(candidate.position, Vec2::ZERO);
            assert_eq!(candidate.velocity, Vec2::new(x, 5.0));
        }
    }

    #[test]
    fn test_sampled_body_within_ranges() {
        let ranges = short_ranges();
        let mut rng = Pcg32::seed_from_u64(99);
        let mut spawner = SpawnController::new(ranges);
        for i in 0..200 {
            spawner.press(Vec2::new(i as f32, 0.0), &mut rng);
            let body = spawner.candidate().unwrap();
            assert!(body.radius >= ranges.radius_min && body.radius <= ranges.radius_max);
            let density = body.inv_mass.recip() / (body.radius * body.radius);
            assert!(density >= ranges.density_min * 0.999);
            assert!(density <= ranges.density_max * 1.001);
            assert_eq!(body.color.a, 255);
            assert_eq!(body.velocity, Vec2::ZERO);
        }
    }

    #[test]
    fn test_bad_ranges_do_not_panic() {
        let ranges = SpawnRanges {
            density_min: 20.0,
            density_max: 2.0,
            radius_min: f32::NAN,
            launch_scale: f32::INFINITY,
            ..short_ranges()
        };
        let mut spawner = SpawnController::new(ranges);
        assert_eq!(spawner.ranges().density_min, 2.0);
        assert_eq!(spawner.ranges().density_max, 20.0);
        assert_eq!(spawner.ranges().radius_min, SPAWN_RADIUS_MIN);
        assert_eq!(spawner.ranges().radius_max, SPAWN_RADIUS_MAX);
        assert_eq!(spawner.ranges().launch_scale, 1.0);

        let mut rng = Pcg32::seed_from_u64(4);
        spawner.press(Vec2::ZERO, &mut rng);
        let body = spawner.candidate().unwrap();
        assert!(body.radius >= SPAWN_RADIUS_MIN && body.radius <= SPAWN_RADIUS_MAX);
    }

    #[test]
    fn test_preview_in_empty_space_is_straight_line() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut spawner = SpawnController::new(short_ranges());
        let registry = BodyRegistry::new();
        let params = PhysicsParams::default();

        spawner.press(Vec2::new(100.0, 100.0), &mut rng);
        spawner.drag(Vec2::new(160.0, 70.0), &registry, &params, SIM_DT);

        let path = spawner.preview_path().unwrap();
        assert_eq!(path.len(), 240);
        let velocity = Vec2::new(60.0, -30.0);
        for (i, point) in path.iter().enumerate() {
            let expected = Vec2::new(100.0, 100.0) + velocity * (SIM_DT * (i + 1) as f32);
            assert!((*point - expected).length() < 1e-2);
        }
    }

    #[test]
    fn test_preview_runs_full_length_and_leaves_registry_alone() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut spawner = SpawnController::default();
        let registry: BodyRegistry = [CelestialBody::new(
            Vec2::new(500.0, 500.0),
            Vec2::new(3.0, 0.0),
            100.0,
            100.0,
            Color::ORANGE,
        )]
        .into_iter()
        .collect();
        let before = registry.clone();
        let params = PhysicsParams::default();

        spawner.press(Vec2::new(900.0, 500.0), &mut rng);
        spawner.drag(Vec2::new(900.0, 700.0), &registry, &params, SIM_DT);

        assert_eq!(spawner.preview_path().unwrap().len(), PATH_POINTS);
        assert_eq!(registry, before);
    }

    #[test]
    fn test_preview_matches_shared_step() {
        let mut rng = Pcg32::seed_from_u64(21);
        let mut spawner = SpawnController::new(short_ranges());
        let registry: BodyRegistry = [CelestialBody::new(
            Vec2::ZERO,
            Vec2::ZERO,
            100.0,
            100.0,
            Color::ORANGE,
        )]
        .into_iter()
        .collect();
        let params = PhysicsParams::default();

        spawner.press(Vec2::new(400.0, 0.0), &mut rng);
        spawner.drag(Vec2::new(400.0, 150.0), &registry, &params, SIM_DT);
        let path = spawner.preview_path().unwrap().to_vec();

        let mut probe = *spawner.candidate().unwrap();
        for point in &path {
            integrator::step(std::slice::from_mut(&mut probe), registry.as_slice(), &params, SIM_DT);
            assert_eq!(probe.position, *point);
        }

        // Forecast bends toward the fixed mass
        assert!(path.last().unwrap().x < 400.0);
    }

    #[test]
    fn test_preview_is_deterministic() {
        let registry: BodyRegistry = [CelestialBody::new(
            Vec2::ZERO,
            Vec2::ZERO,
            50.0,
            80.0,
            Color::ORANGE,
        )]
        .into_iter()
        .collect();
        let params = PhysicsParams::default();

        let run = || {
            let mut rng = Pcg32::seed_from_u64(8);
            let mut spawner = SpawnController::new(short_ranges());
            spawner.press(Vec2::new(-300.0, 0.0), &mut rng);
            spawner.drag(Vec2::new(-300.0, -120.0), &registry, &params, SIM_DT);
            spawner.preview_path().unwrap().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_click_commits_at_rest() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut spawner = SpawnController::new(short_ranges());
        let mut registry = BodyRegistry::new();
        let click = PointerInput {
            position: Vec2::new(5.0, 5.0),
            pressed: true,
            released: true,
            down: false,
        };
        let committed =
            spawner.update(&click, &mut registry, &PhysicsParams::default(), SIM_DT, &mut rng);
        assert_eq!(committed, Some(0));
        assert_eq!(registry.get(0).unwrap().velocity, Vec2::ZERO);
        assert!(!spawner.preview_active());
    }
}
