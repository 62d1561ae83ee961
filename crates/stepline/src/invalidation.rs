//! Passes the indicator asks its host to schedule.

/// Pending host work accumulated by mutations and environment callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invalidation {
    /// A new measure/layout pass is needed.
    pub layout: bool,
    /// The indicator must be drawn again.
    pub redraw: bool,
}

impl Invalidation {
    pub const NONE: Self = Self {
        layout: false,
        redraw: false,
    };

    pub fn is_empty(&self) -> bool {
        !self.layout && !self.redraw
    }

    pub(crate) fn request_layout(&mut self) {
        self.layout = true;
        self.redraw = true;
    }

    pub(crate) fn request_redraw(&mut self) {
        self.redraw = true;
    }
}
