//! Error types for the stepline crates.

use smallvec::SmallVec;
use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors raised while building or mutating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Radius must not be negative, got {value}")]
    NegativeRadius { value: f32 },

    #[error("Line width must not be negative, got {value}")]
    NegativeLineWidth { value: f32 },

    #[error("Marker images must be supplied all together; missing: {}", .missing.join(", "))]
    IncompleteMarkerImages {
        missing: SmallVec<[&'static str; 3]>,
    },

    #[error("Invalid color format: {value}")]
    InvalidColor { value: String },

    #[error("Density scale must be finite and positive, got {scale}")]
    InvalidDensity { scale: f32 },

    #[error("Image '{source_name}' is {width}x{height} but carries {found} bytes of pixel data")]
    ImagePixelsMismatch {
        source_name: String,
        width: u32,
        height: u32,
        found: usize,
    },

    #[error("Expected {expected} marker positions, found {found}")]
    PositionCountMismatch { expected: usize, found: usize },

    #[error("Marker positions must be non-decreasing; position {index} goes backwards")]
    UnorderedPositions { index: usize },

    #[cfg(feature = "serde")]
    #[error("Invalid style sheet: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while computing marker positions.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Bound element {index} no longer reports geometry")]
    ElementUnavailable { index: usize },
}
