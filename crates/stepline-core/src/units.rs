//! Density-independent unit conversion.

use crate::errors::ConfigError;

/// Display density: how many physical pixels one density-independent unit spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    scale: f32,
}

impl Density {
    /// Create a density from a scale factor (1.0 = baseline).
    pub fn new(scale: f32) -> Result<Self, ConfigError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::InvalidDensity { scale });
        }
        Ok(Self { scale })
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Convert density-independent units to whole pixels, rounding half up.
    pub fn pixels_for(&self, dp: f32) -> f32 {
        (dp * self.scale + 0.5).trunc()
    }
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
