//! End-to-end host flows.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use stepline::{
    ElementGeometry, ElementHandle, ImageResource, Invalidation, LayoutError, MarkerImages,
    Orientation, Scene, SizeConstraint, SpacingMode, StepConfig, StepIndicator, StepState,
};

fn average_indicator(count: usize) -> StepIndicator {
    StepIndicator::new(
        StepConfig::default()
            .with_spacing(SpacingMode::Average)
            .with_marker_count(count)
            .with_radius(5.0),
    )
    .unwrap()
}

/// A label whose geometry is owned by some other layout system.
struct Label {
    top: f32,
    bottom: f32,
    padding_top: f32,
}

impl ElementHandle for Label {
    fn geometry(&self) -> Option<ElementGeometry> {
        Some(ElementGeometry::vertical_span(self.top, self.bottom, self.padding_top))
    }
}

#[test]
fn average_three_markers_on_100px() {
    let mut indicator = average_indicator(3);
    let measured = indicator.measure(SizeConstraint::Exact(100.0), SizeConstraint::Unbounded);

    assert_eq!((measured.width, measured.height), (100.0, 10.0));
    insta::assert_json_snapshot!(indicator.positions(), @r###"
    [
      5.0,
      50.0,
      95.0
    ]
    "###);
}

#[test]
fn progress_two_of_three() {
    let mut indicator = average_indicator(3);
    assert!(indicator.set_progress(2));
    assert_eq!(
        indicator.step_states(),
        vec![StepState::Done, StepState::Doing, StepState::Undone]
    );
}

#[test]
fn bound_labels_drive_positions() {
    let mut indicator = StepIndicator::new(
        StepConfig::default().with_orientation(Orientation::Vertical),
    )
    .unwrap();
    let first = Rc::new(RefCell::new(Label { top: 0.0, bottom: 10.0, padding_top: 0.0 }));
    let second = Rc::new(RefCell::new(Label { top: 60.0, bottom: 80.0, padding_top: 0.0 }));

    indicator.bind_elements([Rc::downgrade(&first), Rc::downgrade(&second)]);
    assert_eq!(indicator.marker_count(), 2);

    // Labels move before the host reports that layout settled
    {
        let mut label = first.borrow_mut();
        label.top = 20.0;
        label.bottom = 40.0;
    }
    indicator.on_attached().unwrap();

    assert_eq!(indicator.positions(), &[30.0, 70.0]);
    assert_eq!(indicator.line_start(), 30.0);
    assert!(indicator.take_invalidation().redraw);
}

#[test]
fn dropped_label_keeps_binding_pending() {
    let mut indicator = StepIndicator::new(
        StepConfig::default().with_orientation(Orientation::Vertical),
    )
    .unwrap();
    let kept = Rc::new(Label { top: 0.0, bottom: 10.0, padding_top: 0.0 });
    let dropped = Rc::new(Label { top: 20.0, bottom: 30.0, padding_top: 0.0 });
    indicator.bind_elements([Rc::downgrade(&kept), Rc::downgrade(&dropped)]);
    drop(dropped);

    assert!(matches!(
        indicator.on_attached(),
        Err(LayoutError::ElementUnavailable { index: 1 })
    ));
    assert!(indicator.positions().is_empty());
}

#[test]
fn zero_progress_is_ignored() {
    let mut indicator = average_indicator(3);
    indicator.measure(SizeConstraint::Exact(100.0), SizeConstraint::Unbounded);

    assert!(!indicator.set_progress(0));
    assert_eq!(indicator.progress(), None);
    assert!(indicator.step_states().iter().all(|s| *s == StepState::Undone));

    // Every marker is hollow: outer + inner circle each
    assert_eq!(indicator.scene().circles().count(), 6);
}

#[test]
fn deferred_resize_flow() {
    let mut indicator = StepIndicator::new(
        StepConfig::default()
            .with_orientation(Orientation::Vertical)
            .with_spacing(SpacingMode::Average)
            .with_marker_count(2)
            .with_radius(5.0),
    )
    .unwrap();

    let provisional = indicator.measure(SizeConstraint::Bounded(300.0), SizeConstraint::Unbounded);
    assert!(provisional.deferred);
    assert_eq!((provisional.width, provisional.height), (10.0, 0.0));
    assert_eq!(indicator.take_invalidation(), Invalidation::NONE);

    assert!(indicator.on_parent_extent_resolved(200.0));
    assert_eq!(
        indicator.take_invalidation(),
        Invalidation { layout: true, redraw: true }
    );
    assert_eq!(indicator.main_axis_extent(), 200.0);
    assert_eq!(indicator.positions(), &[5.0, 195.0]);

    // The layout pass the indicator asked for
    let settled = indicator.measure(SizeConstraint::Bounded(300.0), SizeConstraint::Unbounded);
    assert!(!settled.deferred);
    assert_eq!((settled.width, settled.height), (10.0, 200.0));
    assert_eq!(indicator.positions(), &[5.0, 195.0]);
    assert_eq!(
        indicator.take_invalidation(),
        Invalidation { layout: false, redraw: true }
    );

    // Nothing pending any more
    assert!(!indicator.on_parent_extent_resolved(400.0));
    assert!(!indicator.take_invalidation().layout);
    assert_eq!(indicator.main_axis_extent(), 200.0);
}

#[test]
fn rebinding_in_average_mode_keeps_markers() {
    let mut indicator = StepIndicator::new(
        StepConfig::default()
            .with_orientation(Orientation::Vertical)
            .with_spacing(SpacingMode::Average)
            .with_marker_count(3)
            .with_radius(5.0),
    )
    .unwrap();
    indicator.measure(SizeConstraint::Unbounded, SizeConstraint::Exact(100.0));

    indicator.bind_elements([
        ElementGeometry::vertical_span(20.0, 40.0, 0.0),
        ElementGeometry::vertical_span(60.0, 80.0, 0.0),
    ]);
    indicator.on_attached().unwrap();

    assert_eq!(indicator.positions(), &[5.0, 95.0]);
    let scene = indicator.scene();
    assert_eq!(scene.lines().count(), 1);
    assert_eq!(scene.circles().count(), 4);
}

#[test]
fn render_does_not_touch_layout() {
    let mut indicator = average_indicator(4);
    indicator.measure(SizeConstraint::Exact(160.0), SizeConstraint::Unbounded);
    indicator.set_progress(3);
    indicator.take_invalidation();
    let before = indicator.layout().clone();

    let mut scene = Scene::new(160.0, 10.0);
    indicator.render(&mut scene);

    assert_eq!(indicator.layout(), &before);
    assert!(indicator.take_invalidation().is_empty());
    assert_eq!(scene, indicator.scene());
}

#[test]
fn image_markers_follow_state() {
    let images = MarkerImages::new(
        ImageResource::new("done.png", 16, 16),
        ImageResource::new("doing.png", 24, 24),
        ImageResource::new("undone.png", 16, 16),
    );
    let mut indicator = StepIndicator::new(
        StepConfig::default()
            .with_spacing(SpacingMode::Average)
            .with_marker_count(3)
            .with_marker_images(images),
    )
    .unwrap();
    indicator.measure(SizeConstraint::Exact(124.0), SizeConstraint::Unbounded);
    indicator.set_progress(2);

    assert_eq!(indicator.cross_axis_extent(), 24.0);
    assert_eq!(indicator.positions(), &[12.0, 62.0, 112.0]);
    let sources: Vec<_> = indicator
        .scene()
        .images()
        .map(|image| image.image.source.clone())
        .collect();
    assert_eq!(sources, vec!["done.png", "doing.png", "undone.png"]);
}

#[test]
fn svg_output_has_one_line_and_all_markers() {
    let mut indicator = average_indicator(3);
    indicator.measure(SizeConstraint::Exact(100.0), SizeConstraint::Unbounded);
    indicator.set_progress(1);

    let svg = indicator.to_svg();
    assert_eq!(svg.matches("<line").count(), 1);
    // Doing + Undone + Undone, each hollow
    assert_eq!(svg.matches("<circle").count(), 6);
}

proptest! {
    #[test]
    fn out_of_range_progress_changes_nothing(count in 1usize..20, offset in 1usize..20, start in 0usize..20) {
        let mut indicator = average_indicator(count);
        if start >= 1 && start <= count {
            indicator.set_progress(start);
        }
        let before = indicator.progress();

        prop_assert!(!indicator.set_progress(0));
        prop_assert!(!indicator.set_progress(count + offset));
        prop_assert_eq!(indicator.progress(), before);
    }

    #[test]
    fn negative_progress_changes_nothing(count in 1usize..20, step in i64::MIN..0) {
        let mut indicator = average_indicator(count);
        indicator.set_progress(1);

        prop_assert!(!indicator.set_progress(step));
        prop_assert_eq!(indicator.progress(), Some(1));
    }

    #[test]
    fn positions_match_marker_count(count in 0usize..12, next in 0usize..12, derived_first in any::<bool>()) {
        let mut indicator = average_indicator(count);
        indicator.measure(SizeConstraint::Exact(400.0), SizeConstraint::Unbounded);
        if derived_first {
            indicator.set_spacing_mode(SpacingMode::Derived);
            let explicit: Vec<f32> = (0..count).map(|i| i as f32 * 10.0).collect();
            indicator.set_explicit_positions(explicit).unwrap();
        }
        indicator.set_marker_count(next);

        let len = indicator.positions().len();
        prop_assert!(len == 0 || len == indicator.marker_count());
    }

    #[test]
    fn states_partition_around_current(count in 1usize..30, current in 1usize..30) {
        prop_assume!(current <= count);
        let mut indicator = average_indicator(count);
        indicator.set_progress(current);
        for (i, state) in indicator.step_states().into_iter().enumerate() {
            let step = i + 1;
            let expected = if step < current {
                StepState::Done
            } else if step == current {
                StepState::Doing
            } else {
                StepState::Undone
            };
            prop_assert_eq!(state, expected);
        }
    }
}
