//! The step indicator widget.

use std::fmt;

use stepline_core::config::{validate_line_width, validate_radius, MarkerImages, StepConfig};
use stepline_core::errors::{ConfigError, LayoutError, StepError};
use stepline_core::style::StepStyle;
use stepline_core::types::{Color, Orientation, SpacingMode, StepState};
use stepline_core::units::Density;
use stepline_layout::{ElementHandle, LayoutEngine, Measurement, SizeConstraint};
use stepline_render::{build_scene, render, render_svg, RenderInput, Scene, Surface};
use tracing::{debug, warn};

use crate::invalidation::Invalidation;

/// A row or column of step markers joined by a line.
///
/// The host drives it: [`measure`](Self::measure) during size negotiation,
/// [`on_parent_extent_resolved`](Self::on_parent_extent_resolved) after a
/// provisional measure, [`on_attached`](Self::on_attached) once bound
/// elements have settled, and [`render`](Self::render) whenever
/// [`take_invalidation`](Self::take_invalidation) reports a redraw.
pub struct StepIndicator {
    config: StepConfig,
    layout: LayoutEngine,
    progress: Option<usize>,
    bound: Vec<Box<dyn ElementHandle>>,
    settle_pending: bool,
    invalidation: Invalidation,
}

impl fmt::Debug for StepIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepIndicator")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .field("progress", &self.progress)
            .field("bound", &self.bound.len())
            .field("settle_pending", &self.settle_pending)
            .field("invalidation", &self.invalidation)
            .finish()
    }
}

impl Default for StepIndicator {
    fn default() -> Self {
        Self::from_valid(StepConfig::default())
    }
}

impl StepIndicator {
    /// Create an indicator, rejecting invalid lengths up front.
    pub fn new(config: StepConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Create an indicator from a JSON style sheet.
    pub fn from_style_json(json: &str, density: Density) -> Result<Self, StepError> {
        let config = StepStyle::from_json(json)?.resolve(density)?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: StepConfig) -> Self {
        Self {
            layout: LayoutEngine::for_config(&config),
            config,
            progress: None,
            bound: Vec::new(),
            settle_pending: false,
            invalidation: Invalidation::NONE,
        }
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    /// Current 1-based step, `None` until progress is set.
    pub fn progress(&self) -> Option<usize> {
        self.progress
    }

    pub fn marker_count(&self) -> usize {
        self.config.marker_count
    }

    pub fn positions(&self) -> &[f32] {
        self.layout.positions()
    }

    pub fn line_start(&self) -> f32 {
        self.layout.line_start()
    }

    pub fn main_axis_extent(&self) -> f32 {
        self.layout.main_extent()
    }

    pub fn cross_axis_extent(&self) -> f32 {
        self.layout.cross_extent()
    }

    /// State of every step, first to last.
    pub fn step_states(&self) -> Vec<StepState> {
        (1..=self.config.marker_count)
            .map(|step| StepState::classify(step, self.progress))
            .collect()
    }

    /// Return and clear the passes requested since the last call.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.invalidation)
    }

    // ---------------------------------------------------------------
    // Environment callbacks
    // ---------------------------------------------------------------

    /// Size negotiation.
    pub fn measure(&mut self, width: SizeConstraint, height: SizeConstraint) -> Measurement {
        let measurement = self.layout.measure(&self.config, width, height);
        if !measurement.deferred {
            self.invalidation.request_redraw();
        }
        measurement
    }

    /// The parent's extent along the main axis is known.
    ///
    /// Only acts after a provisional measure; returns whether it did.
    pub fn on_parent_extent_resolved(&mut self, parent_extent: f32) -> bool {
        let applied = self.layout.apply_deferred_resize(&self.config, parent_extent);
        if applied {
            self.invalidation.request_layout();
        }
        applied
    }

    /// Bound elements have their final geometry.
    ///
    /// Reads every bound element once per binding. When an element can no
    /// longer be queried the previous positions stay in place and the binding
    /// remains pending.
    pub fn on_attached(&mut self) -> Result<(), LayoutError> {
        if !self.settle_pending {
            return Ok(());
        }
        if let Err(err) = self.layout.settle_bound_elements(&self.config, &self.bound) {
            warn!(error = %err, "bound elements not ready");
            return Err(err);
        }
        self.settle_pending = false;
        self.invalidation.request_redraw();
        Ok(())
    }

    // ---------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------

    /// Set the current 1-based step.
    ///
    /// Accepts any integer type; steps outside `1..=marker_count`, negative
    /// ones included, are ignored. Returns whether the step was applied.
    pub fn set_progress<T>(&mut self, step: T) -> bool
    where
        T: TryInto<usize> + Copy + fmt::Debug,
    {
        let in_range = step
            .try_into()
            .ok()
            .filter(|step| (1..=self.config.marker_count).contains(step));
        let Some(step) = in_range else {
            debug!(?step, count = self.config.marker_count, "ignored out-of-range progress");
            return false;
        };
        self.progress = Some(step);
        self.invalidation.request_redraw();
        true
    }

    /// Change the number of steps. A current step beyond the new count is cleared.
    ///
    /// In derived mode a new count invalidates the existing positions; new
    /// ones come from [`set_explicit_positions`](Self::set_explicit_positions)
    /// or [`bind_elements`](Self::bind_elements).
    pub fn set_marker_count(&mut self, count: usize) {
        let changed = count != self.config.marker_count;
        self.config.marker_count = count;
        self.clamp_progress();
        if changed && self.config.spacing == SpacingMode::Derived {
            self.layout.reset_positions();
        }
        self.layout.compute_average_positions(&self.config);
        self.invalidation.request_layout();
    }

    pub fn set_radius(&mut self, radius: f32) -> Result<(), ConfigError> {
        validate_radius(radius)?;
        self.config.radius = radius;
        self.marker_size_changed();
        Ok(())
    }

    pub fn set_line_width(&mut self, width: f32) -> Result<(), ConfigError> {
        validate_line_width(width)?;
        self.config.line_width = width;
        self.invalidation.request_redraw();
        Ok(())
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.config.line_color = color;
        self.invalidation.request_redraw();
    }

    pub fn set_circle_color(&mut self, color: Color) {
        self.config.circle_color = color;
        self.invalidation.request_redraw();
    }

    pub fn set_inner_color(&mut self, color: Color) {
        self.config.inner_color = color;
        self.invalidation.request_redraw();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
        self.marker_size_changed();
    }

    /// Switch spacing mode.
    ///
    /// Entering derived mode drops the evenly spaced positions; bound elements,
    /// if any, are read again on the next [`on_attached`](Self::on_attached).
    pub fn set_spacing_mode(&mut self, spacing: SpacingMode) {
        let entering_derived =
            spacing == SpacingMode::Derived && self.config.spacing != SpacingMode::Derived;
        self.config.spacing = spacing;
        if entering_derived {
            self.layout.reset_positions();
            self.settle_pending = !self.bound.is_empty();
        }
        self.layout.compute_average_positions(&self.config);
        self.invalidation.request_layout();
    }

    /// Switch between image markers (`Some`) and circles (`None`).
    pub fn set_marker_images(&mut self, images: Option<MarkerImages>) {
        self.config.marker_images = images;
        self.marker_size_changed();
    }

    /// Align the markers with external elements, one marker per element.
    ///
    /// Resets the marker count and discards current positions; new positions
    /// are read on the next [`on_attached`](Self::on_attached).
    pub fn bind_elements<I, H>(&mut self, elements: I)
    where
        I: IntoIterator<Item = H>,
        H: ElementHandle + 'static,
    {
        self.bound = elements
            .into_iter()
            .map(|handle| Box::new(handle) as Box<dyn ElementHandle>)
            .collect();
        self.config.marker_count = self.bound.len();
        self.clamp_progress();
        self.layout.reset_positions();
        // Average mode spaces the new count right away
        self.layout.compute_average_positions(&self.config);
        self.settle_pending = !self.bound.is_empty();
        debug!(count = self.bound.len(), "bound elements");
        self.invalidation.request_redraw();
    }

    /// Use host-computed marker centers; one per step, non-decreasing.
    pub fn set_explicit_positions(&mut self, positions: Vec<f32>) -> Result<(), ConfigError> {
        self.layout.set_positions(positions, self.config.marker_count)?;
        self.invalidation.request_redraw();
        Ok(())
    }

    /// Start of the connecting line in derived mode.
    pub fn set_line_start(&mut self, start: f32) {
        self.layout.set_line_start(start);
        self.invalidation.request_redraw();
    }

    /// Override the resolved main-axis extent.
    pub fn set_main_axis_extent(&mut self, extent: f32) {
        self.layout.set_main_extent(&self.config, extent);
        self.invalidation.request_redraw();
    }

    fn marker_size_changed(&mut self) {
        self.layout.refresh_cross_extent(&self.config);
        self.layout.compute_average_positions(&self.config);
        self.invalidation.request_layout();
    }

    fn clamp_progress(&mut self) {
        if self.progress.is_some_and(|step| step > self.config.marker_count) {
            self.progress = None;
        }
    }

    // ---------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------

    pub fn render_input(&self) -> RenderInput<'_> {
        RenderInput::new(&self.config, &self.layout, self.progress)
    }

    /// Draw onto `surface`. Never changes layout state.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render(&self.render_input(), surface);
    }

    pub fn scene(&self) -> Scene {
        build_scene(&self.render_input())
    }

    pub fn to_svg(&self) -> String {
        render_svg(&self.render_input())
    }
}
