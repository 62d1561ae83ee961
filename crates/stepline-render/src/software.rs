//! Software rasterizer for headless rendering.

use glam::Vec2;
use tracing::trace;

use crate::primitives::{CirclePrimitive, ImagePrimitive, LinePrimitive, Surface};
use crate::shapes::{Mesh, Tessellator};

/// RGBA8 frame buffer that implements [`Surface`].
pub struct SoftwareRenderer {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
    tessellator: Tessellator,
    mesh: Mesh,
}

impl SoftwareRenderer {
    /// Create a new software renderer with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; width as usize * height as usize * 4], // transparent
            tessellator: Tessellator::new(),
            mesh: Mesh::new(),
        }
    }

    /// Clear the buffer to a solid color.
    pub fn clear(&mut self, r: u8, g: u8, b: u8, a: u8) {
        for chunk in self.buffer.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[r, g, b, a]);
        }
    }

    /// Get the buffer width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the buffer height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a reference to the raw pixel buffer.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// RGBA value at `(x, y)`, `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.buffer[idx..idx + 4]);
        Some(out)
    }

    /// Rasterize the current mesh and reset it.
    ///
    /// Every mesh holds a single shape, so the first vertex's color fills it.
    fn flush_mesh(&mut self) {
        let mesh = std::mem::take(&mut self.mesh);
        if let Some(first) = mesh.vertices.first() {
            let color = first.color;
            let corner = |index: u32| Vec2::from(mesh.vertices[index as usize].position);
            for triangle in mesh.indices.chunks_exact(3) {
                let corners = [corner(triangle[0]), corner(triangle[1]), corner(triangle[2])];
                self.fill_triangle(corners, color);
            }
        }
        self.mesh = mesh;
        self.mesh.clear();
    }

    /// Fill the pixels whose centers fall inside the triangle.
    fn fill_triangle(&mut self, [a, b, c]: [Vec2; 3], color: [f32; 4]) {
        if self.width == 0 || self.height == 0 || edge(a, b, c).abs() < f32::EPSILON {
            return;
        }
        let frame_max = Vec2::new(self.width as f32 - 1.0, self.height as f32 - 1.0);
        let lo = a.min(b).min(c).floor().max(Vec2::ZERO);
        let hi = a.max(b).max(c).ceil().min(frame_max);
        if lo.x > hi.x || lo.y > hi.y {
            return;
        }

        for y in lo.y as u32..=hi.y as u32 {
            for x in lo.x as u32..=hi.x as u32 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let sides = [edge(b, c, p), edge(c, a, p), edge(a, b, p)];
                // Either winding
                if sides.iter().all(|&w| w >= 0.0) || sides.iter().all(|&w| w <= 0.0) {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Source-over blend of a straight-alpha color into the buffer.
    fn blend(&mut self, x: u32, y: u32, [r, g, b, a]: [f32; 4]) {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let Some(dst) = self.buffer.get_mut(idx..idx + 4) else {
            return;
        };
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = a + dst_a * (1.0 - a);
        if out_a <= 0.0 {
            return;
        }
        for (channel, src) in [r, g, b].into_iter().enumerate() {
            let dst_c = dst[channel] as f32 / 255.0;
            let out = (src * a + dst_c * dst_a * (1.0 - a)) / out_a;
            dst[channel] = (out * 255.0).round() as u8;
        }
        dst[3] = (out_a * 255.0).round() as u8;
    }
}

impl Surface for SoftwareRenderer {
    fn draw_line(&mut self, line: &LinePrimitive) {
        self.tessellator.tessellate_line(line, &mut self.mesh);
        self.flush_mesh();
    }

    fn fill_circle(&mut self, circle: &CirclePrimitive) {
        self.tessellator.tessellate_circle(circle, &mut self.mesh);
        self.flush_mesh();
    }

    /// Blit the image pixels at their intrinsic size. Images without pixel
    /// data leave the buffer untouched.
    fn draw_image(&mut self, image: &ImagePrimitive) {
        let Some(pixels) = image.image.pixels() else {
            trace!(source = %image.image.source, "image has no pixel data, skipped");
            return;
        };
        let origin_x = image.origin.x.round() as i64;
        let origin_y = image.origin.y.round() as i64;
        let (src_w, src_h) = (image.image.width as i64, image.image.height as i64);

        for sy in 0..src_h {
            for sx in 0..src_w {
                let (x, y) = (origin_x + sx, origin_y + sy);
                if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
                    continue;
                }
                let idx = ((sy * src_w + sx) * 4) as usize;
                let texel = &pixels[idx..idx + 4];
                let color = [
                    texel[0] as f32 / 255.0,
                    texel[1] as f32 / 255.0,
                    texel[2] as f32 / 255.0,
                    texel[3] as f32 / 255.0,
                ];
                self.blend(x as u32, y as u32, color);
            }
        }
    }
}

/// Twice the signed area of `(a, b, p)`; the sign tells which side of `a -> b` `p` is on.
#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}
