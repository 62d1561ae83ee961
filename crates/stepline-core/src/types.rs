//! Value types shared by the layout engine and the renderer.

/// A color value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create from hex string (e.g., "#D0021B" or "D0021B80").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => {
                let mut color = Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?);
                color.a = channel(6..8)? as f32 / 255.0;
                Some(color)
            }
            _ => None,
        }
    }

    /// Convert to 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        )
    }

    /// Convert to hex string (e.g., "#D0021B").
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Direction in which the markers are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Markers run left to right; the main axis is x.
    #[default]
    Horizontal,
    /// Markers run top to bottom; the main axis is y.
    Vertical,
}

impl Orientation {
    /// Pick the main-axis component of a `(width, height)` pair.
    pub fn main<T>(self, width: T, height: T) -> T {
        match self {
            Orientation::Horizontal => width,
            Orientation::Vertical => height,
        }
    }

    /// Pick the cross-axis component of a `(width, height)` pair.
    pub fn cross<T>(self, width: T, height: T) -> T {
        match self {
            Orientation::Horizontal => height,
            Orientation::Vertical => width,
        }
    }

    /// Convert a `(main, cross)` coordinate pair into `(x, y)`.
    pub fn to_xy(self, main: f32, cross: f32) -> (f32, f32) {
        match self {
            Orientation::Horizontal => (main, cross),
            Orientation::Vertical => (cross, main),
        }
    }
}

/// How marker positions along the main axis are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpacingMode {
    /// Evenly distributed across the widget's own extent.
    Average,
    /// Taken from bound external elements (or set explicitly).
    #[default]
    Derived,
}

/// Visual state of a single step marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StepState {
    Done,
    Doing,
    Undone,
}

impl StepState {
    /// Classify the 1-based `step` against the current step.
    ///
    /// With no current step every marker is `Undone`.
    pub fn classify(step: usize, current: Option<usize>) -> Self {
        match current {
            Some(current) if step < current => StepState::Done,
            Some(current) if step == current => StepState::Doing,
            _ => StepState::Undone,
        }
    }

    /// Whether the default circle style punches a hole in this marker.
    pub fn is_hollow(self) -> bool {
        !matches!(self, StepState::Done)
    }
}
