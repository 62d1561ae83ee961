//! Axis-aligned geometry reported by the host.

/// Axis-aligned bounding box in the container's coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    /// Position relative to the container
    pub x: f32,
    pub y: f32,
    /// Size of the element
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds from its four edges.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Padding on all sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Create uniform padding.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}
