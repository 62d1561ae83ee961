//! Marker position computation.
//!
//! Both functions are pure: equal inputs always give bit-identical output.

use stepline_core::errors::ConfigError;
use stepline_core::types::Orientation;

use crate::element::ElementGeometry;

/// Evenly distribute `count` marker centers over `extent`.
///
/// The first center sits `edge_offset` from the start, the last one
/// `edge_offset` from the end. Fewer than two markers produce no positions.
pub fn average_positions(count: usize, extent: f32, edge_offset: f32) -> Vec<f32> {
    if count < 2 {
        return Vec::new();
    }
    let spacing = (extent - 2.0 * edge_offset) / (count - 1) as f32;
    (0..count)
        .map(|i| edge_offset + i as f32 * spacing)
        .collect()
}

/// Marker centers taken from the settled geometry of bound elements.
pub fn derived_positions(orientation: Orientation, elements: &[ElementGeometry]) -> Vec<f32> {
    elements
        .iter()
        .map(|element| element.main_axis_center(orientation))
        .collect()
}

/// Check host-supplied positions before they replace computed ones.
pub fn validate_positions(positions: &[f32], expected: usize) -> Result<(), ConfigError> {
    if positions.len() != expected {
        return Err(ConfigError::PositionCountMismatch {
            expected,
            found: positions.len(),
        });
    }
    // NaN fails the comparison as well
    if let Some(index) = positions
        .windows(2)
        .position(|pair| !(pair[0] <= pair[1]))
    {
        return Err(ConfigError::UnorderedPositions { index: index + 1 });
    }
    Ok(())
}
