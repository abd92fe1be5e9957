//! Palette generation: derives complete color systems from seed colors.
//!
//! One user-picked brand color expands into a 5-stop brightness scale, an
//! 11-stop Tailwind-style scale, or a 4-stop scheme with a readable text
//! color. Theme defaults and CSS variable projection are both built on
//! these functions.

use crate::models::color::{adjust_brightness, interpolate, normalize_hex, BLACK, WHITE};
use crate::models::palette::{BrightnessScale, ColorPalette, ColorScale, ColorScheme, ScaleStop};
use crate::services::contrast::contrast_color;

/// Interpolation weights toward white for the stops below 500.
const LIGHT_MIX: [(u16, f64); 5] = [
    (50, 0.90),
    (100, 0.80),
    (200, 0.60),
    (300, 0.40),
    (400, 0.20),
];

/// Interpolation weights toward black for the stops above 500.
const DARK_MIX: [(u16, f64); 5] = [
    (600, 0.16),
    (700, 0.32),
    (800, 0.48),
    (900, 0.64),
    (950, 0.80),
];

/// Derives a five-stop brightness scale around a seed color.
///
/// `base` is the seed verbatim; the other stops brighten or darken by
/// fixed percentages. For any seed not already at a luminance extreme,
/// luminance decreases from `lighter` through `darker`.
#[must_use]
pub fn generate_scale5(seed: &str) -> BrightnessScale {
    BrightnessScale {
        lighter: adjust_brightness(seed, 40.0),
        light: adjust_brightness(seed, 20.0),
        base: seed.to_string(),
        dark: adjust_brightness(seed, -20.0),
        darker: adjust_brightness(seed, -40.0),
    }
}

/// Derives an eleven-stop Tailwind-style scale plus DEFAULT from a seed.
///
/// DEFAULT is the seed exactly; stop 500 is the seed normalized; lighter
/// stops interpolate toward white and darker stops toward black with fixed
/// weights. Interpolation (rather than multiplicative brightening, which
/// is a no-op on black) keeps luminance non-increasing across the whole
/// 50..950 order for every seed.
#[must_use]
pub fn generate_scale11(seed: &str) -> ColorScale {
    let mut stops = Vec::with_capacity(11);

    for (level, weight) in LIGHT_MIX {
        stops.push(ScaleStop {
            level,
            hex: interpolate(seed, WHITE, weight),
        });
    }
    stops.push(ScaleStop {
        level: 500,
        hex: interpolate(seed, WHITE, 0.0),
    });
    for (level, weight) in DARK_MIX {
        stops.push(ScaleStop {
            level,
            hex: interpolate(seed, BLACK, weight),
        });
    }

    ColorScale {
        stops,
        default_hex: seed.to_string(),
    }
}

/// Derives a four-stop scheme from a seed color.
///
/// # Examples
///
/// ```
/// use brandkit::services::palette::generate_scheme;
///
/// let scheme = generate_scheme("#0066CC");
/// assert_eq!(scheme.base, "#0066CC");
/// assert_eq!(scheme.contrast, "#FFFFFF");
/// ```
#[must_use]
pub fn generate_scheme(seed: &str) -> ColorScheme {
    ColorScheme {
        base: normalize_hex(seed),
        light: interpolate(seed, WHITE, 0.3),
        dark: interpolate(seed, BLACK, 0.3),
        contrast: contrast_color(seed),
    }
}

/// Builds a full palette from three seed colors.
#[must_use]
pub fn generate_palette(primary: &str, secondary: &str, accent: &str) -> ColorPalette {
    ColorPalette {
        primary: generate_scheme(primary),
        secondary: generate_scheme(secondary),
        accent: generate_scheme(accent),
    }
}
