//! Rendering seam
//!
//! The simulation never talks to a graphics API. Each frame is described
//! through the [`Canvas`] trait; [`MeshCanvas`] turns those calls into
//! vertex buffers for whatever backend presents them.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::{MeshCanvas, TextItem};
pub use vertex::Vertex;

use glam::Vec2;

use crate::settings::DisplaySettings;
use crate::sim::{Color, SimState};

/// Drawing primitives a frame is built from
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color);
    fn text(&mut self, text: &str, position: Vec2, size: f32, color: Color);
}

/// Draw one frame of the simulation.
///
/// Bodies are drawn at positions blended by the state's interpolation factor.
pub fn draw_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    state: &SimState,
    display: &DisplaySettings,
    fps: u32,
) {
    canvas.clear(display.background);
    let size = display.text_size;

    if display.show_fps {
        canvas.text(&format!("FPS: {fps}"), Vec2::ZERO, size, display.text);
    }

    for body in &state.registry {
        canvas.fill_circle(body.interpolated_position(state.alpha), body.radius, body.color);
    }

    if let Some(path) = state.spawner.preview_path() {
        for segment in path.windows(2) {
            canvas.line(segment[0], segment[1], display.path_width, display.path);
        }
    }

    if display.show_energy {
        let energy = state.energy();
        let lines = [
            format!("Total Energy: {:.6}", energy.total),
            format!("Kinetic Energy: {:.6}", energy.kinetic),
            format!("Potential Energy: {:.6}", energy.potential),
        ];
        for (i, line) in lines.iter().enumerate() {
            let y = size * (i + 1) as f32;
            canvas.text(line, Vec2::new(0.0, y), size, display.text);
        }
    }
}
