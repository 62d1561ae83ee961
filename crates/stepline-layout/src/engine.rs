//! Layout state of one step indicator.

use stepline_core::config::StepConfig;
use stepline_core::errors::{ConfigError, LayoutError};
use stepline_core::types::SpacingMode;
use tracing::debug;

use crate::element::{ElementGeometry, ElementHandle};
use crate::measure::{measure, MarkerExtent, Measurement, SizeConstraint};
use crate::positions::{average_positions, derived_positions, validate_positions};

/// Start of the connecting line before any derived computation.
pub const DEFAULT_LINE_START: f32 = 0.0;

/// Computed geometry: resolved extents, marker centers, line start.
///
/// Everything here is derived from the configuration plus host input and
/// can be recomputed at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    main_extent: f32,
    cross_extent: f32,
    positions: Vec<f32>,
    line_start: f32,
    /// Main-axis constraint of a provisional measure still waiting for the parent
    pending: Option<SizeConstraint>,
    resolved: Option<ResolvedExtent>,
}

/// Parent extent adopted for a non-exact main-axis constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ResolvedExtent {
    constraint: SizeConstraint,
    extent: f32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            main_extent: 0.0,
            cross_extent: 0.0,
            positions: Vec::new(),
            line_start: DEFAULT_LINE_START,
            pending: None,
            resolved: None,
        }
    }

    /// Engine with the cross extent already resolved from `config`.
    pub fn for_config(config: &StepConfig) -> Self {
        let mut engine = Self::new();
        engine.refresh_cross_extent(config);
        engine
    }

    pub fn main_extent(&self) -> f32 {
        self.main_extent
    }

    pub fn cross_extent(&self) -> f32 {
        self.cross_extent
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn line_start(&self) -> f32 {
        self.line_start
    }

    /// Whether a measure pass left the main axis waiting for the parent extent.
    pub fn is_deferred(&self) -> bool {
        self.pending.is_some()
    }

    /// Measure pass. Exact main-axis sizes are adopted immediately.
    ///
    /// A non-exact main axis is provisional until
    /// [`apply_deferred_resize`](Self::apply_deferred_resize) supplies the
    /// parent extent. Later passes with the same constraint reuse that extent;
    /// any other constraint discards it.
    pub fn measure(
        &mut self,
        config: &StepConfig,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> Measurement {
        let constraint = config.orientation.main(width, height);
        let mut measurement = measure(config, width, height);
        let reused = self
            .resolved
            .filter(|resolved| measurement.deferred && resolved.constraint == constraint);
        match reused {
            Some(resolved) => {
                let cross = config.orientation.cross(measurement.width, measurement.height);
                let (width, height) = config.orientation.to_xy(resolved.extent, cross);
                measurement = Measurement {
                    width,
                    height,
                    deferred: false,
                };
            }
            None => self.resolved = None,
        }

        self.cross_extent = config.orientation.cross(measurement.width, measurement.height);
        self.pending = measurement.deferred.then_some(constraint);
        if !measurement.deferred {
            self.main_extent = config.orientation.main(measurement.width, measurement.height);
            self.compute_average_positions(config);
        }
        debug!(
            width = measurement.width,
            height = measurement.height,
            deferred = measurement.deferred,
            reused = reused.is_some(),
            "measured step indicator"
        );
        measurement
    }

    /// Adopt the parent's resolved main-axis extent after a provisional pass.
    ///
    /// Returns `true` when the extent was applied and a new layout pass is due;
    /// `false` when no provisional pass was pending.
    pub fn apply_deferred_resize(&mut self, config: &StepConfig, parent_extent: f32) -> bool {
        let Some(constraint) = self.pending.take() else {
            return false;
        };
        self.resolved = Some(ResolvedExtent {
            constraint,
            extent: parent_extent,
        });
        self.main_extent = parent_extent;
        debug!(extent = parent_extent, "applied deferred resize");
        self.compute_average_positions(config);
        true
    }

    /// Override the main-axis extent directly.
    pub fn set_main_extent(&mut self, config: &StepConfig, extent: f32) {
        self.main_extent = extent;
        self.compute_average_positions(config);
    }

    /// Recompute the cross extent after marker size changes.
    pub fn refresh_cross_extent(&mut self, config: &StepConfig) {
        self.cross_extent = MarkerExtent::of(config).cross;
    }

    /// Evenly space the markers. No-op outside `Average` mode.
    pub fn compute_average_positions(&mut self, config: &StepConfig) {
        if config.spacing != SpacingMode::Average {
            return;
        }
        let edge_offset = MarkerExtent::of(config).edge_offset();
        self.positions = average_positions(config.marker_count, self.main_extent, edge_offset);
        debug!(
            count = config.marker_count,
            extent = self.main_extent,
            edge_offset,
            "computed average positions"
        );
    }

    /// Take marker positions from bound element geometry.
    ///
    /// No-op outside `Derived` mode or with nothing bound. The first position
    /// also becomes the start of the connecting line.
    pub fn compute_derived_positions(&mut self, config: &StepConfig, elements: &[ElementGeometry]) {
        if config.spacing != SpacingMode::Derived || elements.is_empty() {
            return;
        }
        self.positions = derived_positions(config.orientation, elements);
        self.line_start = self.positions[0];
        debug!(positions = ?self.positions, "computed derived positions");
    }

    /// Query every handle, then compute derived positions.
    ///
    /// Nothing changes if any handle fails to report geometry.
    pub fn settle_bound_elements(
        &mut self,
        config: &StepConfig,
        handles: &[Box<dyn ElementHandle>],
    ) -> Result<(), LayoutError> {
        let elements = handles
            .iter()
            .enumerate()
            .map(|(index, handle)| {
                handle
                    .geometry()
                    .ok_or(LayoutError::ElementUnavailable { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.compute_derived_positions(config, &elements);
        Ok(())
    }

    /// Replace positions with host-supplied ones.
    pub fn set_positions(&mut self, positions: Vec<f32>, expected: usize) -> Result<(), ConfigError> {
        validate_positions(&positions, expected)?;
        self.positions = positions;
        Ok(())
    }

    /// Drop all positions and the derived line start, e.g. when a new set of
    /// elements is bound.
    pub fn reset_positions(&mut self) {
        self.positions.clear();
        self.line_start = DEFAULT_LINE_START;
    }

    pub fn set_line_start(&mut self, start: f32) {
        self.line_start = start;
    }

    /// Main-axis span of the connecting line, or `None` when nothing is drawn.
    ///
    /// `Average` spans edge to edge; `Derived` runs from the line start to the
    /// far edge.
    pub fn line_span(&self, config: &StepConfig) -> Option<(f32, f32)> {
        match config.spacing {
            SpacingMode::Average if config.marker_count >= 2 => Some((0.0, self.main_extent)),
            SpacingMode::Derived if config.marker_count > 0 => {
                Some((self.line_start, self.main_extent))
            }
            _ => None,
        }
    }
}
