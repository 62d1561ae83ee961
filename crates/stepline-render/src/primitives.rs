//! Render primitives for the step indicator.
//!
//! A frame is a connecting line followed by one marker per step. Surfaces
//! consume these primitives directly; a [`Scene`] records them for replay.

use glam::Vec2;
use stepline_core::config::ImageResource;
use stepline_core::types::{Color, StepState};

/// Something a [`Surface`] can draw.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw the connecting line
    Line(LinePrimitive),
    /// Draw a filled circle
    Circle(CirclePrimitive),
    /// Draw a marker image
    Image(ImagePrimitive),
}

/// Stroke style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// A straight stroked segment with butt caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

impl LinePrimitive {
    pub fn new(from: Vec2, to: Vec2, stroke: Stroke) -> Self {
        Self { from, to, stroke }
    }
}

/// A filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Color,
}

impl CirclePrimitive {
    pub fn new(center: Vec2, radius: f32, fill: Color) -> Self {
        Self { center, radius, fill }
    }
}

/// A marker image placed at its intrinsic size.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePrimitive {
    /// Top-left corner
    pub origin: Vec2,
    pub size: Vec2,
    pub image: ImageResource,
    pub state: StepState,
}

impl ImagePrimitive {
    /// Place `image` so that its center lands on `center`.
    pub fn centered(center: Vec2, image: &ImageResource, state: StepState) -> Self {
        let size = Vec2::new(image.width as f32, image.height as f32);
        Self {
            origin: center - size / 2.0,
            size,
            image: image.clone(),
            state,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }
}

/// Drawing target for the renderer.
pub trait Surface {
    fn draw_line(&mut self, line: &LinePrimitive);
    fn fill_circle(&mut self, circle: &CirclePrimitive);
    fn draw_image(&mut self, image: &ImagePrimitive);
}

/// A recorded frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<RenderCommand>,
    pub width: f32,
    pub height: f32,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            commands: Vec::new(),
            width,
            height,
        }
    }

    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Draw every recorded command onto `surface`, in order.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                RenderCommand::Line(line) => surface.draw_line(line),
                RenderCommand::Circle(circle) => surface.fill_circle(circle),
                RenderCommand::Image(image) => surface.draw_image(image),
            }
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImagePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Image(image) => Some(image),
            _ => None,
        })
    }
}

impl Surface for Scene {
    fn draw_line(&mut self, line: &LinePrimitive) {
        self.push(RenderCommand::Line(*line));
    }

    fn fill_circle(&mut self, circle: &CirclePrimitive) {
        self.push(RenderCommand::Circle(*circle));
    }

    fn draw_image(&mut self, image: &ImagePrimitive) {
        self.push(RenderCommand::Image(image.clone()));
    }
}
