//! Shape tessellation for the software renderer.

use lyon::geom::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, LineCap, StrokeOptions,
    StrokeTessellator, StrokeVertex, VertexBuffers,
};
use stepline_core::types::Color;

use crate::primitives::{CirclePrimitive, LinePrimitive};

/// A vertex for rendering.
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Tessellated mesh ready for rasterization.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn append(&mut self, buffers: VertexBuffers<Vertex, u32>) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(buffers.vertices);
        self.indices.extend(buffers.indices.iter().map(|i| i + base));
    }
}

/// Tessellator for converting primitives to meshes.
pub struct Tessellator {
    fill_tessellator: FillTessellator,
    stroke_tessellator: StrokeTessellator,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new()
    }
}

impl Tessellator {
    pub fn new() -> Self {
        Self {
            fill_tessellator: FillTessellator::new(),
            stroke_tessellator: StrokeTessellator::new(),
        }
    }

    /// Tessellate a stroked line segment.
    pub fn tessellate_line(&mut self, line: &LinePrimitive, mesh: &mut Mesh) {
        if line.stroke.width <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.begin(point(line.from.x, line.from.y));
        builder.line_to(point(line.to.x, line.to.y));
        builder.end(false);
        let path = builder.build();

        let color = to_rgba(line.stroke.color);
        let options = StrokeOptions::default()
            .with_line_width(line.stroke.width)
            .with_line_cap(LineCap::Butt);

        let mut buffers: VertexBuffers<Vertex, u32> = VertexBuffers::new();
        let result = self.stroke_tessellator.tessellate_path(
            &path,
            &options,
            &mut BuffersBuilder::new(&mut buffers, |vertex: StrokeVertex| {
                Vertex::new(vertex.position().x, vertex.position().y, color)
            }),
        );

        if result.is_ok() {
            mesh.append(buffers);
        }
    }

    /// Tessellate a filled circle.
    pub fn tessellate_circle(&mut self, circle: &CirclePrimitive, mesh: &mut Mesh) {
        if circle.radius <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(
            point(circle.center.x, circle.center.y),
            circle.radius,
            lyon::path::Winding::Positive,
        );
        let path = builder.build();

        let color = to_rgba(circle.fill);
        let mut buffers: VertexBuffers<Vertex, u32> = VertexBuffers::new();
        let result = self.fill_tessellator.tessellate_path(
            &path,
            &FillOptions::default(),
            &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                Vertex::new(vertex.position().x, vertex.position().y, color)
            }),
        );

        if result.is_ok() {
            mesh.append(buffers);
        }
    }
}

fn to_rgba(color: Color) -> [f32; 4] {
    [color.r, color.g, color.b, color.a]
}
