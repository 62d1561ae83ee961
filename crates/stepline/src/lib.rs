//! Step/progress indicator.
//!
//! A [`StepIndicator`] draws N markers (circles or images) joined by a line,
//! horizontally or vertically, and shows each step as done, in progress, or
//! not done. Markers are either spread evenly across the indicator or
//! centered on external elements placed by some other layout system.
//!
//! ## Example
//!
//! ```
//! use stepline::{ElementGeometry, Orientation, StepConfig, StepIndicator, StepState};
//!
//! let mut indicator = StepIndicator::new(
//!     StepConfig::default().with_orientation(Orientation::Vertical),
//! )?;
//!
//! // Align with two labels laid out elsewhere
//! indicator.bind_elements([
//!     ElementGeometry::vertical_span(20.0, 40.0, 0.0),
//!     ElementGeometry::vertical_span(60.0, 80.0, 0.0),
//! ]);
//! indicator.on_attached()?;
//! indicator.set_progress(2);
//!
//! assert_eq!(indicator.positions(), &[30.0, 70.0]);
//! assert_eq!(indicator.step_states(), vec![StepState::Done, StepState::Doing]);
//!
//! let svg = indicator.to_svg();
//! assert!(svg.contains("<circle"));
//! # Ok::<(), stepline::StepError>(())
//! ```

mod invalidation;
mod widget;

pub use invalidation::Invalidation;
pub use widget::StepIndicator;

pub use stepline_core::{
    Color, ConfigError, Density, ImageResource, LayoutError, MarkerImages, Orientation,
    SpacingMode, StepConfig, StepError, StepState, StepStyle,
};
pub use stepline_layout::{
    Bounds, ElementGeometry, ElementHandle, LayoutEngine, Measurement, Padding, SizeConstraint,
};
pub use stepline_render::{
    CirclePrimitive, ImagePrimitive, LinePrimitive, RenderCommand, Scene, SoftwareRenderer,
    Stroke, Surface, SvgSurface,
};
