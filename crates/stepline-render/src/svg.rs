//! SVG output.

use std::fmt::Write as _;

use stepline_core::types::Color;

use crate::primitives::{CirclePrimitive, ImagePrimitive, LinePrimitive, Surface};

/// Surface that writes SVG elements; [`SvgSurface::finish`] returns the document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f32,
    height: f32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            body: String::new(),
        }
    }

    /// Wrap the drawn elements in an SVG root.
    pub fn finish(self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl Surface for SvgSurface {
    fn draw_line(&mut self, line: &LinePrimitive) {
        let _ = writeln!(
            self.body,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"{} stroke-width="{}"/>"#,
            line.from.x,
            line.from.y,
            line.to.x,
            line.to.y,
            color_to_svg(&line.stroke.color),
            opacity_attr("stroke-opacity", &line.stroke.color),
            line.stroke.width,
        );
    }

    fn fill_circle(&mut self, circle: &CirclePrimitive) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"{}/>"#,
            circle.center.x,
            circle.center.y,
            circle.radius,
            color_to_svg(&circle.fill),
            opacity_attr("fill-opacity", &circle.fill),
        );
    }

    fn draw_image(&mut self, image: &ImagePrimitive) {
        let _ = writeln!(
            self.body,
            r#"  <image x="{}" y="{}" width="{}" height="{}" href="{}"/>"#,
            image.origin.x,
            image.origin.y,
            image.size.x,
            image.size.y,
            escape_attr(&image.image.source),
        );
    }
}

fn color_to_svg(color: &Color) -> String {
    let (r, g, b, _) = color.to_rgba8();
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

fn opacity_attr(name: &str, color: &Color) -> String {
    if color.a < 1.0 {
        format!(r#" {}="{}""#, name, color.a)
    } else {
        String::new()
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
