//! Bound external elements.
//!
//! The indicator never owns the elements it aligns with. It holds opaque
//! handles and asks each one for its geometry once the host reports that
//! layout has settled.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use stepline_core::types::Orientation;

use crate::bounds::{Bounds, Padding};

/// Settled geometry of one bound element.
///
/// Edges are kept as reported so the marker center is computed from them
/// without a width/height round trip.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementGeometry {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    /// Padding of the container the element lives in
    pub container_padding: Padding,
}

impl ElementGeometry {
    pub fn from_bounds(bounds: Bounds, container_padding: Padding) -> Self {
        Self {
            left: bounds.x,
            top: bounds.y,
            right: bounds.right(),
            bottom: bounds.bottom(),
            container_padding,
        }
    }

    /// Geometry of an element spanning `top..bottom` vertically.
    pub fn vertical_span(top: f32, bottom: f32, container_padding_top: f32) -> Self {
        Self {
            top,
            bottom,
            container_padding: Padding {
                top: container_padding_top,
                ..Padding::default()
            },
            ..Self::default()
        }
    }

    /// Geometry of an element spanning `left..right` horizontally.
    pub fn horizontal_span(left: f32, right: f32, container_padding_left: f32) -> Self {
        Self {
            left,
            right,
            container_padding: Padding {
                left: container_padding_left,
                ..Padding::default()
            },
            ..Self::default()
        }
    }

    /// Marker center along the main axis, in the indicator's own coordinates.
    ///
    /// Vertical: `(top + bottom) / 2 - padding.top`.
    /// Horizontal: `(left + right) / 2 - padding.left`.
    pub fn main_axis_center(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => (self.top + self.bottom) / 2.0 - self.container_padding.top,
            Orientation::Horizontal => {
                (self.left + self.right) / 2.0 - self.container_padding.left
            }
        }
    }
}

/// Read-only geometry query on an external element.
///
/// Returns `None` once the element is gone.
pub trait ElementHandle {
    fn geometry(&self) -> Option<ElementGeometry>;
}

impl ElementHandle for ElementGeometry {
    fn geometry(&self) -> Option<ElementGeometry> {
        Some(*self)
    }
}

impl<T: ElementHandle + ?Sized> ElementHandle for RefCell<T> {
    fn geometry(&self) -> Option<ElementGeometry> {
        self.try_borrow().ok()?.geometry()
    }
}

impl<T: ElementHandle + ?Sized> ElementHandle for Rc<T> {
    fn geometry(&self) -> Option<ElementGeometry> {
        (**self).geometry()
    }
}

impl<T: ElementHandle + ?Sized> ElementHandle for Weak<T> {
    fn geometry(&self) -> Option<ElementGeometry> {
        self.upgrade()?.geometry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label {
        top: f32,
        bottom: f32,
    }

    impl ElementHandle for Label {
        fn geometry(&self) -> Option<ElementGeometry> {
            Some(ElementGeometry::vertical_span(self.top, self.bottom, 0.0))
        }
    }

    #[test]
    fn test_vertical_center() {
        let geometry = ElementGeometry::vertical_span(20.0, 40.0, 0.0);
        assert_eq!(geometry.main_axis_center(Orientation::Vertical), 30.0);

        let padded = ElementGeometry::vertical_span(20.0, 40.0, 8.0);
        assert_eq!(padded.main_axis_center(Orientation::Vertical), 22.0);
    }

    #[test]
    fn test_from_bounds() {
        let geometry = ElementGeometry::from_bounds(
            Bounds::new(10.0, 20.0, 30.0, 20.0),
            Padding::uniform(2.0),
        );
        assert_eq!(geometry.right, 40.0);
        assert_eq!(geometry.bottom, 40.0);
        assert_eq!(geometry.main_axis_center(Orientation::Vertical), 28.0);
    }

    #[test]
    fn test_horizontal_center() {
        let geometry = ElementGeometry::horizontal_span(10.0, 50.0, 4.0);
        assert_eq!(geometry.main_axis_center(Orientation::Horizontal), 26.0);
    }

    #[test]
    fn test_weak_handle_expires() {
        let label = Rc::new(RefCell::new(Label { top: 0.0, bottom: 10.0 }));
        let handle = Rc::downgrade(&label);
        assert!(handle.geometry().is_some());

        label.borrow_mut().top = 4.0;
        assert_eq!(handle.geometry().unwrap().top, 4.0);

        drop(label);
        assert!(handle.geometry().is_none());
    }
}
