//! Turning layout and progress into draw calls.

use glam::Vec2;
use stepline_core::config::StepConfig;
use stepline_core::types::StepState;
use stepline_layout::LayoutEngine;
use tracing::trace;

use crate::primitives::{CirclePrimitive, ImagePrimitive, LinePrimitive, Scene, Stroke, Surface};

/// Everything a frame is drawn from. Rendering only reads it.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub config: &'a StepConfig,
    pub layout: &'a LayoutEngine,
    /// 1-based current step, `None` before any progress is set
    pub progress: Option<usize>,
}

impl<'a> RenderInput<'a> {
    pub fn new(config: &'a StepConfig, layout: &'a LayoutEngine, progress: Option<usize>) -> Self {
        Self {
            config,
            layout,
            progress,
        }
    }

    /// State of every marker that has a position, in order.
    pub fn step_states(&self) -> Vec<StepState> {
        (1..=self.marker_slots())
            .map(|step| StepState::classify(step, self.progress))
            .collect()
    }

    fn marker_slots(&self) -> usize {
        self.layout.positions().len().min(self.config.marker_count)
    }

    /// Frame size as `(width, height)`.
    pub fn frame_size(&self) -> (f32, f32) {
        self.config
            .orientation
            .to_xy(self.layout.main_extent(), self.layout.cross_extent())
    }

    fn point(&self, main: f32) -> Vec2 {
        let (x, y) = self
            .config
            .orientation
            .to_xy(main, self.layout.cross_extent() / 2.0);
        Vec2::new(x, y)
    }
}

/// Draw the connecting line and every marker onto `surface`.
///
/// Does nothing when the layout has no line to draw (fewer than two markers
/// in average mode, none in derived mode).
pub fn render<S: Surface + ?Sized>(input: &RenderInput<'_>, surface: &mut S) {
    let config = input.config;
    let Some((start, end)) = input.layout.line_span(config) else {
        return;
    };

    surface.draw_line(&LinePrimitive::new(
        input.point(start),
        input.point(end),
        Stroke::new(config.line_color, config.line_width),
    ));

    let states = input.step_states();
    for (&main, &state) in input.layout.positions().iter().zip(&states) {
        let center = input.point(main);
        match &config.marker_images {
            Some(images) => {
                surface.draw_image(&ImagePrimitive::centered(center, images.for_state(state), state));
            }
            None => {
                surface.fill_circle(&CirclePrimitive::new(center, config.radius, config.circle_color));
                if state.is_hollow() {
                    surface.fill_circle(&CirclePrimitive::new(
                        center,
                        config.radius / 2.0,
                        config.inner_color,
                    ));
                }
            }
        }
    }

    trace!(
        markers = states.len(),
        progress = ?input.progress,
        "rendered step indicator"
    );
}

/// Record a frame into a [`Scene`].
pub fn build_scene(input: &RenderInput<'_>) -> Scene {
    let (width, height) = input.frame_size();
    let mut scene = Scene::new(width, height);
    render(input, &mut scene);
    scene
}
