//! WCAG contrast evaluation.
//!
//! Relative luminance and contrast ratios per the WCAG 2.1 definition,
//! plus compliance-level checks used by the theme editor to badge color
//! pairs and by the CLI `contrast` command as a scriptable gate.

use serde::Serialize;
use tracing::warn;

use crate::models::color::{Rgb, BLACK, WHITE};

/// Minimum contrast ratio for AA compliance, normal text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum contrast ratio for AAA compliance, normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum contrast ratio for AA compliance, large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum contrast ratio for AAA compliance, large text.
pub const AAA_LARGE: f64 = 4.5;

/// WCAG compliance report for a foreground/background color pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WcagReport {
    /// Contrast ratio rounded to two decimal places for display.
    pub ratio: f64,
    /// Ratio >= 4.5 (normal text, level AA).
    pub meets_aa: bool,
    /// Ratio >= 7.0 (normal text, level AAA).
    pub meets_aaa: bool,
    /// Ratio >= 3.0 (large text, level AA).
    pub meets_aa_large: bool,
    /// Ratio >= 4.5 (large text, level AAA).
    pub meets_aaa_large: bool,
}

/// Computes the WCAG relative luminance of a hex color, in [0, 1].
///
/// Each channel becomes an sRGB fraction, runs through the piecewise gamma
/// correction, and the three are combined with the 0.2126 / 0.7152 /
/// 0.0722 weights. Black is 0.0 and white is 1.0 within floating
/// tolerance.
///
/// Unparseable input degrades to black (luminance 0.0) with a warning;
/// malformed colors are never an error in this crate.
#[must_use]
pub fn relative_luminance(hex: &str) -> f64 {
    let rgb = Rgb::from_hex(hex).unwrap_or_else(|| {
        warn!(color = hex, "unparseable color, treating as black for luminance");
        Rgb::new(0, 0, 0)
    });

    let linear = |c: u8| -> f64 {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linear(rgb.r) + 0.7152 * linear(rgb.g) + 0.0722 * linear(rgb.b)
}

/// Computes the contrast ratio between two colors, in [1, 21].
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`; symmetric in its arguments,
/// and exactly 1 for identical colors.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);

    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);

    (lighter + 0.05) / (darker + 0.05)
}

/// Checks a foreground/background pair against the four WCAG thresholds.
///
/// The reported `ratio` is rounded to two decimals for display; the
/// compliance flags are computed from the unrounded value, so a pair at
/// 4.496 reads as "4.5" but does not pass AA.
#[must_use]
pub fn check_wcag(foreground: &str, background: &str) -> WcagReport {
    let ratio = contrast_ratio(foreground, background);

    WcagReport {
        ratio: (ratio * 100.0).round() / 100.0,
        meets_aa: ratio >= AA_NORMAL,
        meets_aaa: ratio >= AAA_NORMAL,
        meets_aa_large: ratio >= AA_LARGE,
        meets_aaa_large: ratio >= AAA_LARGE,
    }
}

/// Picks black or white text for a background color.
///
/// Black when the background's relative luminance exceeds 0.5, white
/// otherwise. This is a fixed heuristic threshold, not a search for a
/// guaranteed 4.5:1 pairing; midtone backgrounds can fall short of AA
/// with either choice.
#[must_use]
pub fn contrast_color(background: &str) -> String {
    if relative_luminance(background) > 0.5 {
        BLACK.to_string()
    } else {
        WHITE.to_string()
    }
}
