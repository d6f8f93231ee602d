//! Canvas that tessellates draw calls into a vertex list

use glam::Vec2;

use super::Canvas;
use super::shapes;
use super::vertex::Vertex;
use crate::sim::Color;

/// Text to be drawn by the presenting backend
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub position: Vec2,
    pub size: f32,
    pub color: Color,
}

/// Collects one frame of geometry
#[derive(Debug, Clone)]
pub struct MeshCanvas {
    pub background: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextItem>,
    circle_segments: u32,
}

impl MeshCanvas {
    pub fn new(circle_segments: u32) -> Self {
        Self {
            background: Color::RAYWHITE.to_array(),
            vertices: Vec::new(),
            texts: Vec::new(),
            circle_segments: circle_segments.max(3),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Canvas for MeshCanvas {
    fn clear(&mut self, color: Color) {
        self.background = color.to_array();
        self.vertices.clear();
        self.texts.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color.to_array(), self.circle_segments));
    }

    fn line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color) {
        self.vertices
            .extend(shapes::line(start, end, width, color.to_array()));
    }

    fn text(&mut self, text: &str, position: Vec2, size: f32, color: Color) {
        self.texts.push(TextItem {
            text: text.to_string(),
            position,
            size,
            color,
        });
    }
}
