//! Layout engine for the stepline step indicator.
//!
//! This crate resolves the indicator's own size and the main-axis centers of
//! its markers.
//!
//! # Architecture
//!
//! 1. **Measure**: the cross axis is fixed by marker content; the main axis
//!    follows an exact constraint or is deferred to the parent's extent
//! 2. **Average placement**: markers evenly spaced across the main axis
//! 3. **Derived placement**: markers centered on bound external elements
//!
//! # Example
//!
//! ```
//! use stepline_core::{SpacingMode, StepConfig};
//! use stepline_layout::{LayoutEngine, SizeConstraint};
//!
//! let config = StepConfig::default()
//!     .with_spacing(SpacingMode::Average)
//!     .with_marker_count(3)
//!     .with_radius(5.0);
//! let mut engine = LayoutEngine::new();
//! engine.measure(&config, SizeConstraint::Exact(100.0), SizeConstraint::Unbounded);
//! assert_eq!(engine.positions(), &[5.0, 50.0, 95.0]);
//! ```

mod bounds;
mod element;
mod engine;
mod measure;
mod positions;

pub use bounds::{Bounds, Padding};
pub use element::{ElementGeometry, ElementHandle};
pub use engine::{LayoutEngine, DEFAULT_LINE_START};
pub use measure::{measure, MarkerExtent, Measurement, SizeConstraint};
pub use positions::{average_positions, derived_positions, validate_positions};
