//! Step indicator configuration.
//!
//! All lengths here are in pixels. Density-independent values are converted
//! through [`Density`] before they reach a [`StepConfig`].

use std::sync::Arc;

use smallvec::SmallVec;

use crate::errors::ConfigError;
use crate::types::{Color, Orientation, SpacingMode, StepState};
use crate::units::Density;

/// Default number of steps.
pub const DEFAULT_MARKER_COUNT: usize = 2;
/// Default marker radius in density-independent units.
pub const DEFAULT_RADIUS_DP: f32 = 5.0;
/// Default connecting line width in density-independent units.
pub const DEFAULT_LINE_WIDTH_DP: f32 = 2.0;
/// Default connecting line color (#FF0000).
pub const DEFAULT_LINE_COLOR: Color = Color::rgb(1.0, 0.0, 0.0);
/// Default marker color (#D0021B).
pub const DEFAULT_CIRCLE_COLOR: Color = Color::rgb(208.0 / 255.0, 2.0 / 255.0, 27.0 / 255.0);

/// An image used as a marker, with its intrinsic pixel size.
///
/// The `source` is an opaque key for the host (a path, an asset id, a URL).
/// Optional RGBA8 pixel data lets the software renderer blit the image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageResource {
    pub source: String,
    pub width: u32,
    pub height: u32,
    pixels: Option<Arc<[u8]>>,
}

impl ImageResource {
    pub fn new(source: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            source: source.into(),
            width,
            height,
            pixels: None,
        }
    }

    /// Attach RGBA8 pixel data; its length must be `width * height * 4`.
    pub fn with_pixels(mut self, pixels: Vec<u8>) -> Result<Self, ConfigError> {
        let expected = self.width as usize * self.height as usize * 4;
        if pixels.len() != expected {
            return Err(ConfigError::ImagePixelsMismatch {
                source_name: self.source,
                width: self.width,
                height: self.height,
                found: pixels.len(),
            });
        }
        self.pixels = Some(pixels.into());
        Ok(self)
    }

    pub fn pixels(&self) -> Option<&[u8]> {
        self.pixels.as_deref()
    }
}

/// The three marker images, one per step state.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerImages {
    pub done: ImageResource,
    pub doing: ImageResource,
    pub undone: ImageResource,
}

impl MarkerImages {
    pub fn new(done: ImageResource, doing: ImageResource, undone: ImageResource) -> Self {
        Self { done, doing, undone }
    }

    /// Assemble from optional parts: all three or none.
    pub fn from_parts(
        done: Option<ImageResource>,
        doing: Option<ImageResource>,
        undone: Option<ImageResource>,
    ) -> Result<Option<Self>, ConfigError> {
        match (done, doing, undone) {
            (Some(done), Some(doing), Some(undone)) => Ok(Some(Self::new(done, doing, undone))),
            (None, None, None) => Ok(None),
            (done, doing, undone) => {
                let mut missing = SmallVec::new();
                if done.is_none() {
                    missing.push("done");
                }
                if doing.is_none() {
                    missing.push("doing");
                }
                if undone.is_none() {
                    missing.push("undone");
                }
                Err(ConfigError::IncompleteMarkerImages { missing })
            }
        }
    }

    /// The image drawn for a marker in `state`.
    pub fn for_state(&self, state: StepState) -> &ImageResource {
        match state {
            StepState::Done => &self.done,
            StepState::Doing => &self.doing,
            StepState::Undone => &self.undone,
        }
    }

    fn iter(&self) -> impl Iterator<Item = &ImageResource> {
        [&self.done, &self.doing, &self.undone].into_iter()
    }

    /// Widest intrinsic width of the three images.
    pub fn max_width(&self) -> f32 {
        self.iter().map(|image| image.width).max().unwrap_or(0) as f32
    }

    /// Tallest intrinsic height of the three images.
    pub fn max_height(&self) -> f32 {
        self.iter().map(|image| image.height).max().unwrap_or(0) as f32
    }
}

/// Full step indicator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StepConfig {
    pub orientation: Orientation,
    /// Number of steps
    pub marker_count: usize,
    pub spacing: SpacingMode,
    /// Circle radius; ignored when marker images are set
    pub radius: f32,
    pub line_width: f32,
    pub line_color: Color,
    pub circle_color: Color,
    /// Fill of the inner circle punched into hollow markers
    pub inner_color: Color,
    /// When set, images replace the default circles for every marker
    pub marker_images: Option<MarkerImages>,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self::for_density(Density::default())
    }
}

impl StepConfig {
    /// Defaults with the dp-based lengths converted for `density`.
    pub fn for_density(density: Density) -> Self {
        Self {
            orientation: Orientation::default(),
            marker_count: DEFAULT_MARKER_COUNT,
            spacing: SpacingMode::default(),
            radius: density.pixels_for(DEFAULT_RADIUS_DP),
            line_width: density.pixels_for(DEFAULT_LINE_WIDTH_DP),
            line_color: DEFAULT_LINE_COLOR,
            circle_color: DEFAULT_CIRCLE_COLOR,
            inner_color: Color::WHITE,
            marker_images: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_marker_count(mut self, count: usize) -> Self {
        self.marker_count = count;
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingMode) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_circle_color(mut self, color: Color) -> Self {
        self.circle_color = color;
        self
    }

    pub fn with_inner_color(mut self, color: Color) -> Self {
        self.inner_color = color;
        self
    }

    pub fn with_marker_images(mut self, images: MarkerImages) -> Self {
        self.marker_images = Some(images);
        self
    }

    /// Reject lengths that have no drawable meaning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_radius(self.radius)?;
        validate_line_width(self.line_width)?;
        Ok(())
    }
}

pub fn validate_radius(radius: f32) -> Result<(), ConfigError> {
    if radius.is_nan() || radius < 0.0 {
        return Err(ConfigError::NegativeRadius { value: radius });
    }
    Ok(())
}

pub fn validate_line_width(width: f32) -> Result<(), ConfigError> {
    if width.is_nan() || width < 0.0 {
        return Err(ConfigError::NegativeLineWidth { value: width });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str, width: u32, height: u32) -> ImageResource {
        ImageResource::new(name, width, height)
    }

    #[test]
    fn test_defaults() {
        let config = StepConfig::default();
        assert_eq!(config.marker_count, 2);
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.spacing, SpacingMode::Derived);
        assert_eq!(config.radius, 5.0);
        assert_eq!(config.line_width, 2.0);
        assert_eq!(config.circle_color.to_hex(), "#D0021B");
        assert_eq!(config.line_color.to_hex(), "#FF0000");
        assert!(config.marker_images.is_none());
    }

    #[test]
    fn test_defaults_scale_with_density() {
        let config = StepConfig::for_density(Density::new(2.0).unwrap());
        assert_eq!(config.radius, 10.0);
        assert_eq!(config.line_width, 4.0);
    }

    #[test]
    fn test_validate_rejects_negative_lengths() {
        let config = StepConfig::default().with_radius(-1.0);
        assert!(matches!(config.validate(), Err(ConfigError::NegativeRadius { .. })));

        let config = StepConfig::default().with_line_width(-0.5);
        assert!(matches!(config.validate(), Err(ConfigError::NegativeLineWidth { .. })));

        assert!(StepConfig::default().with_radius(0.0).validate().is_ok());
    }

    #[test]
    fn test_images_all_or_nothing() {
        assert!(MarkerImages::from_parts(None, None, None).unwrap().is_none());

        let images = MarkerImages::from_parts(
            Some(image("done", 10, 12)),
            Some(image("doing", 16, 14)),
            Some(image("undone", 8, 20)),
        )
        .unwrap()
        .unwrap();
        assert_eq!(images.max_width(), 16.0);
        assert_eq!(images.max_height(), 20.0);
        assert_eq!(images.for_state(StepState::Doing).source, "doing");

        let err = MarkerImages::from_parts(Some(image("done", 1, 1)), None, None).unwrap_err();
        match err {
            ConfigError::IncompleteMarkerImages { missing } => {
                assert_eq!(missing.as_slice(), &["doing", "undone"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_image_pixels_length_checked() {
        assert!(image("dot", 2, 2).with_pixels(vec![0; 16]).is_ok());
        assert!(matches!(
            image("dot", 2, 2).with_pixels(vec![0; 15]),
            Err(ConfigError::ImagePixelsMismatch { found: 15, .. })
        ));
    }
}
