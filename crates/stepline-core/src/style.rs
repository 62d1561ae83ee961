//! JSON style sheets in density-independent units.
//!
//! ```json
//! {
//!   "orientation": "vertical",
//!   "marker_count": 3,
//!   "spacing": "average",
//!   "radius_dp": 6,
//!   "line_color": "#FF0000",
//!   "done_image": { "source": "done.png", "width": 24, "height": 24 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{
    validate_line_width, validate_radius, ImageResource, MarkerImages, StepConfig,
    DEFAULT_LINE_WIDTH_DP, DEFAULT_RADIUS_DP,
};
use crate::errors::ConfigError;
use crate::types::{Color, Orientation, SpacingMode};
use crate::units::Density;

/// Marker image reference as it appears in a style sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub source: String,
    pub width: u32,
    pub height: u32,
}

impl From<ImageRef> for ImageResource {
    fn from(image: ImageRef) -> Self {
        ImageResource::new(image.source, image.width, image.height)
    }
}

/// Serializable style sheet. Missing fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StepStyle {
    pub orientation: Option<Orientation>,
    pub marker_count: Option<usize>,
    pub spacing: Option<SpacingMode>,
    pub radius_dp: Option<f32>,
    pub line_width_dp: Option<f32>,
    pub line_color: Option<String>,
    pub circle_color: Option<String>,
    pub inner_color: Option<String>,
    pub done_image: Option<ImageRef>,
    pub doing_image: Option<ImageRef>,
    pub undone_image: Option<ImageRef>,
}

impl StepStyle {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into a pixel-based configuration for `density`.
    pub fn resolve(&self, density: Density) -> Result<StepConfig, ConfigError> {
        let mut config = StepConfig::for_density(density);

        if let Some(orientation) = self.orientation {
            config.orientation = orientation;
        }
        if let Some(count) = self.marker_count {
            config.marker_count = count;
        }
        if let Some(spacing) = self.spacing {
            config.spacing = spacing;
        }

        let radius_dp = self.radius_dp.unwrap_or(DEFAULT_RADIUS_DP);
        validate_radius(radius_dp)?;
        config.radius = density.pixels_for(radius_dp);

        let line_width_dp = self.line_width_dp.unwrap_or(DEFAULT_LINE_WIDTH_DP);
        validate_line_width(line_width_dp)?;
        config.line_width = density.pixels_for(line_width_dp);

        if let Some(color) = parse_color(self.line_color.as_deref())? {
            config.line_color = color;
        }
        if let Some(color) = parse_color(self.circle_color.as_deref())? {
            config.circle_color = color;
        }
        if let Some(color) = parse_color(self.inner_color.as_deref())? {
            config.inner_color = color;
        }

        config.marker_images = MarkerImages::from_parts(
            self.done_image.clone().map(Into::into),
            self.doing_image.clone().map(Into::into),
            self.undone_image.clone().map(Into::into),
        )?;

        config.validate()?;
        Ok(config)
    }
}

fn parse_color(value: Option<&str>) -> Result<Option<Color>, ConfigError> {
    value
        .map(|hex| {
            Color::from_hex(hex).ok_or_else(|| ConfigError::InvalidColor {
                value: hex.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_style_gives_defaults() {
        let style = StepStyle::from_json("{}").unwrap();
        let config = style.resolve(Density::default()).unwrap();
        assert_eq!(config, StepConfig::default());
    }

    #[test]
    fn test_full_style() {
        let json = r##"{
            "orientation": "vertical",
            "marker_count": 4,
            "spacing": "average",
            "radius_dp": 6,
            "line_width_dp": 1,
            "circle_color": "#00FF00",
            "done_image": { "source": "done.png", "width": 24, "height": 20 },
            "doing_image": { "source": "doing.png", "width": 28, "height": 28 },
            "undone_image": { "source": "undone.png", "width": 24, "height": 24 }
        }"##;
        let config = StepStyle::from_json(json)
            .unwrap()
            .resolve(Density::new(2.0).unwrap())
            .unwrap();

        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.marker_count, 4);
        assert_eq!(config.spacing, SpacingMode::Average);
        assert_eq!(config.radius, 12.0);
        assert_eq!(config.line_width, 2.0);
        assert_eq!(config.circle_color.to_hex(), "#00FF00");
        let images = config.marker_images.unwrap();
        assert_eq!(images.max_width(), 28.0);
        assert_eq!(images.done.source, "done.png");
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let style = StepStyle {
            line_color: Some("red".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            style.resolve(Density::default()),
            Err(ConfigError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_negative_radius_is_rejected() {
        let style = StepStyle::from_json(r#"{ "radius_dp": -3 }"#).unwrap();
        assert!(matches!(
            style.resolve(Density::default()),
            Err(ConfigError::NegativeRadius { .. })
        ));
    }

    #[test]
    fn test_partial_images_are_rejected() {
        let json = r#"{ "done_image": { "source": "d.png", "width": 8, "height": 8 } }"#;
        let style = StepStyle::from_json(json).unwrap();
        assert!(matches!(
            style.resolve(Density::default()),
            Err(ConfigError::IncompleteMarkerImages { .. })
        ));
    }

    #[test]
    fn test_unknown_field_is_a_json_error() {
        assert!(matches!(
            StepStyle::from_json(r#"{ "radius": 3 }"#),
            Err(ConfigError::Json(_))
        ));
    }
}
