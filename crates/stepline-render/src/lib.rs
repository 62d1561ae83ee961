//! Rendering for the stepline step indicator.
//!
//! [`render`] draws the connecting line and one marker per step onto any
//! [`Surface`]. Three surfaces ship with the crate:
//! - [`Scene`] records commands for later replay or inspection
//! - [`SvgSurface`] writes an SVG document
//! - [`SoftwareRenderer`] rasterizes into an RGBA buffer via lyon tessellation

pub mod primitives;
pub mod scene;
mod shapes;
mod software;
mod svg;

pub use primitives::*;
pub use scene::{build_scene, render, RenderInput};
pub use shapes::{Mesh, Tessellator, Vertex};
pub use software::SoftwareRenderer;
pub use svg::SvgSurface;

/// Render `input` as a standalone SVG document.
pub fn render_svg(input: &RenderInput<'_>) -> String {
    let (width, height) = input.frame_size();
    let mut surface = SvgSurface::new(width, height);
    render(input, &mut surface);
    surface.finish()
}

/// Render `input` into a fresh RGBA buffer sized to the frame.
pub fn render_rgba(input: &RenderInput<'_>) -> SoftwareRenderer {
    let (width, height) = input.frame_size();
    let mut renderer = SoftwareRenderer::new(width.ceil().max(0.0) as u32, height.ceil().max(0.0) as u32);
    render(input, &mut renderer);
    renderer
}
