//! Color scheme, palette, and scale data structures.
//!
//! These are the shapes the palette generator produces and the theme
//! settings persist: 4-stop schemes derived from a seed color, palettes
//! grouping three schemes under a semantic label, and Tailwind-style
//! multi-stop scales used for CSS variable projection.

use serde::{Deserialize, Serialize};

/// The eleven Tailwind-style stop levels, lightest to darkest.
pub const SCALE_LEVELS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// A four-stop color scheme derived from one seed color.
///
/// `base` is the seed; `light` and `dark` are derived toward white and
/// black; `contrast` is the readable text color over `base` and is always
/// pure black or pure white.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    /// The seed color, normalized to six-digit hex.
    pub base: String,
    /// Lightened variant (seed interpolated toward white).
    pub light: String,
    /// Darkened variant (seed interpolated toward black).
    pub dark: String,
    /// Text color readable over `base`: `#000000` or `#FFFFFF`.
    pub contrast: String,
}

/// Three color schemes grouped under one semantic label.
///
/// A theme carries one palette each for brand, neutral, and semantic-status
/// colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    /// The dominant scheme of the palette.
    pub primary: ColorScheme,
    /// Supporting scheme.
    pub secondary: ColorScheme,
    /// Highlight scheme.
    pub accent: ColorScheme,
}

/// A single stop of a multi-stop scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleStop {
    /// Stop level (50, 100, ..., 900, 950).
    pub level: u16,
    /// Six-digit hex color at this stop.
    pub hex: String,
}

/// Tailwind-style eleven-stop scale plus a DEFAULT entry.
///
/// Stops are ordered lightest (50) to darkest (950); perceptual luminance
/// is non-increasing along that order. `default_hex` equals the seed color
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScale {
    /// Ordered stops, lightest to darkest.
    pub stops: Vec<ScaleStop>,
    /// The DEFAULT entry: the seed color, verbatim (normalized).
    pub default_hex: String,
}

impl ColorScale {
    /// Looks up the hex value at a stop level.
    #[must_use]
    pub fn stop(&self, level: u16) -> Option<&str> {
        self.stops
            .iter()
            .find(|s| s.level == level)
            .map(|s| s.hex.as_str())
    }

    /// Number of stops, not counting DEFAULT.
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}

/// Five-stop brightness scale around a seed color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrightnessScale {
    /// Seed brightened by 40%.
    pub lighter: String,
    /// Seed brightened by 20%.
    pub light: String,
    /// The seed color itself.
    pub base: String,
    /// Seed darkened by 20%.
    pub dark: String,
    /// Seed darkened by 40%.
    pub darker: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scale() -> ColorScale {
        ColorScale {
            stops: SCALE_LEVELS
                .iter()
                .map(|&level| ScaleStop {
                    level,
                    hex: format!("#0000{:02X}", level / 4),
                })
                .collect(),
            default_hex: "#000080".to_string(),
        }
    }

    #[test]
    fn test_stop_lookup() {
        let scale = sample_scale();
        assert_eq!(scale.stop(50), Some("#00000C"));
        assert_eq!(scale.stop(950), Some("#0000ED"));
        assert_eq!(scale.stop(475), None);
    }

    #[test]
    fn test_stop_count() {
        assert_eq!(sample_scale().stop_count(), 11);
    }

    #[test]
    fn test_scheme_wire_shape() {
        let scheme = ColorScheme {
            base: "#0066CC".to_string(),
            light: "#4D94DB".to_string(),
            dark: "#00478F".to_string(),
            contrast: "#FFFFFF".to_string(),
        };
        let json = serde_json::to_value(&scheme).unwrap();
        assert_eq!(json["base"], "#0066CC");
        assert_eq!(json["contrast"], "#FFFFFF");
    }
}
