//! Size negotiation with the host.
//!
//! The cross axis is fixed by the marker content. The main axis either
//! adopts an exact size or, for bounded/unbounded requests, reports zero and
//! waits for the host to hand over the parent's resolved extent.

use stepline_core::config::StepConfig;
use stepline_core::types::Orientation;

/// Sizing constraint for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeConstraint {
    /// The host dictates this exact size.
    Exact(f32),
    /// Any size up to the given maximum.
    Bounded(f32),
    /// No limit.
    Unbounded,
}

/// Result of a measure pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub width: f32,
    pub height: f32,
    /// The main axis is provisional until the parent extent is resolved.
    pub deferred: bool,
}

/// Size of the largest marker along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerExtent {
    pub main: f32,
    pub cross: f32,
}

impl MarkerExtent {
    /// Circles span their diameter; images span the largest of the three.
    pub fn of(config: &StepConfig) -> Self {
        match &config.marker_images {
            Some(images) => {
                let (width, height) = (images.max_width(), images.max_height());
                Self {
                    main: config.orientation.main(width, height),
                    cross: config.orientation.cross(width, height),
                }
            }
            None => Self {
                main: 2.0 * config.radius,
                cross: 2.0 * config.radius,
            },
        }
    }

    /// Distance from either end of the main axis to the outermost marker center.
    pub fn edge_offset(&self) -> f32 {
        self.main / 2.0
    }
}

/// Resolve the indicator's size for the given per-axis constraints.
pub fn measure(
    config: &StepConfig,
    width: SizeConstraint,
    height: SizeConstraint,
) -> Measurement {
    let cross = MarkerExtent::of(config).cross;
    let (main, deferred) = match config.orientation.main(width, height) {
        SizeConstraint::Exact(value) => (value, false),
        SizeConstraint::Bounded(_) | SizeConstraint::Unbounded => (0.0, true),
    };
    let (width, height) = match config.orientation {
        Orientation::Horizontal => (main, cross),
        Orientation::Vertical => (cross, main),
    };
    Measurement {
        width,
        height,
        deferred,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepline_core::config::{ImageResource, MarkerImages};

    fn images() -> MarkerImages {
        MarkerImages::new(
            ImageResource::new("done", 20, 10),
            ImageResource::new("doing", 24, 30),
            ImageResource::new("undone", 16, 12),
        )
    }

    #[test]
    fn test_exact_horizontal() {
        let config = StepConfig::default().with_radius(5.0);
        let m = measure(&config, SizeConstraint::Exact(100.0), SizeConstraint::Unbounded);
        assert_eq!(m, Measurement { width: 100.0, height: 10.0, deferred: false });
    }

    #[test]
    fn test_cross_axis_ignores_constraint() {
        let config = StepConfig::default().with_radius(5.0);
        let m = measure(&config, SizeConstraint::Exact(100.0), SizeConstraint::Exact(300.0));
        assert_eq!(m.height, 10.0);
    }

    #[test]
    fn test_bounded_defers() {
        let config = StepConfig::default().with_orientation(Orientation::Vertical);
        let m = measure(&config, SizeConstraint::Exact(50.0), SizeConstraint::Bounded(400.0));
        assert!(m.deferred);
        assert_eq!(m.height, 0.0);
        assert_eq!(m.width, 10.0);

        let m = measure(&config, SizeConstraint::Unbounded, SizeConstraint::Unbounded);
        assert!(m.deferred);
    }

    #[test]
    fn test_image_extent_by_orientation() {
        let config = StepConfig::default().with_marker_images(images());
        let extent = MarkerExtent::of(&config);
        assert_eq!(extent, MarkerExtent { main: 24.0, cross: 30.0 });

        let vertical = config.with_orientation(Orientation::Vertical);
        let extent = MarkerExtent::of(&vertical);
        assert_eq!(extent, MarkerExtent { main: 30.0, cross: 24.0 });
        assert_eq!(extent.edge_offset(), 15.0);

        let m = measure(&vertical, SizeConstraint::Unbounded, SizeConstraint::Exact(200.0));
        assert_eq!(m, Measurement { width: 24.0, height: 200.0, deferred: false });
    }
}
