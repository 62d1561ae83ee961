//! Core types, configuration, and errors for the stepline step indicator.
//!
//! This crate provides the foundational types used across the other stepline crates:
//! - Value types (colors, orientation, spacing mode, step state)
//! - The pixel-based [`StepConfig`] and marker image resources
//! - Density-independent unit conversion
//! - Error types
//! - A JSON style sheet adapter (behind the `serde` feature)

pub mod config;
pub mod errors;
#[cfg(feature = "serde")]
pub mod style;
pub mod types;
pub mod units;

pub use config::*;
pub use errors::*;
#[cfg(feature = "serde")]
pub use style::*;
pub use types::*;
pub use units::*;
