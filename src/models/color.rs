//! RGB color handling with hex parsing, normalization, and channel math.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical black (`#000000`).
pub const BLACK: &str = "#000000";
/// Canonical white (`#FFFFFF`).
pub const WHITE: &str = "#FFFFFF";

/// Matches `#RGB` or `#RRGGBB` (leading `#` required).
static HEX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex pattern is valid")
});

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Creates a new `Rgb` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `Rgb` from a hex string.
    ///
    /// Accepts "#RRGGBB" or "RRGGBB", upper or lower case. Exactly six hex
    /// digits; three-digit shorthand is only understood by [`normalize_hex`].
    /// Returns `None` on any malformed input rather than erroring, since
    /// color strings arrive from user input and degraded handling is the
    /// contract throughout this crate.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandkit::models::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#FF0000"), Some(Rgb::new(255, 0, 0)));
    /// assert_eq!(Rgb::from_hex("00ff00"), Some(Rgb::new(0, 255, 0)));
    /// assert_eq!(Rgb::from_hex("#abc"), None);
    /// ```
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use brandkit::models::Rgb;
    ///
    /// assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#FF0000");
    /// assert_eq!(Rgb::new(0, 128, 255).to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Rgb {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

/// Returns true iff the string is `#` followed by exactly 3 or 6 hex digits.
///
/// Unlike [`Rgb::from_hex`], the leading `#` is required and the three-digit
/// shorthand counts as valid.
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    HEX_PATTERN.is_match(s)
}

/// Normalizes a hex color to the canonical six-digit uppercase form.
///
/// Three-digit shorthand expands by doubling each digit ("#abc" becomes
/// "#AABBCC"); six-digit input is case-normalized. Invalid input passes
/// through unchanged — callers that care should run [`is_valid_hex`] first.
///
/// Idempotent: normalizing an already-normalized value is the identity.
#[must_use]
pub fn normalize_hex(s: &str) -> String {
    if !is_valid_hex(s) {
        return s.to_string();
    }

    let digits = &s[1..];
    if digits.len() == 3 {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        format!("#{}", expanded.to_ascii_uppercase())
    } else {
        format!("#{}", digits.to_ascii_uppercase())
    }
}

/// Adjusts the brightness of a hex color by a percentage.
///
/// Each channel is multiplied by `1 + percent / 100`, clamped to [0, 255]
/// and rounded to the nearest integer. Negative percentages darken,
/// positive lighten, zero is the identity. Unparseable input passes
/// through unchanged.
///
/// # Examples
///
/// ```
/// use brandkit::models::adjust_brightness;
///
/// assert_eq!(adjust_brightness("#808080", 0.0), "#808080");
/// assert_eq!(adjust_brightness("#808080", -50.0), "#404040");
/// ```
#[must_use]
pub fn adjust_brightness(hex: &str, percent: f64) -> String {
    let Some(rgb) = Rgb::from_hex(hex) else {
        return hex.to_string();
    };

    let factor = 1.0 + percent / 100.0;
    let scale = |c: u8| -> u8 { (f64::from(c) * factor).clamp(0.0, 255.0).round() as u8 };

    Rgb::new(scale(rgb.r), scale(rgb.g), scale(rgb.b)).to_hex()
}

/// Linearly interpolates between two hex colors.
///
/// `factor` is clamped to [0, 1]; 0 returns `a` exactly, 1 returns `b`
/// exactly, 0.5 is the per-channel midpoint rounded to nearest. If either
/// input fails to parse, `a` is returned unchanged (graceful degradation,
/// not an error).
#[must_use]
pub fn interpolate(a: &str, b: &str, factor: f64) -> String {
    let (Some(from), Some(to)) = (Rgb::from_hex(a), Rgb::from_hex(b)) else {
        return a.to_string();
    };

    let t = factor.clamp(0.0, 1.0);
    let mix = |from: u8, to: u8| -> u8 {
        (f64::from(from) + (f64::from(to) - f64::from(from)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Rgb::new(
        mix(from.r, to.r),
        mix(from.g, to.g),
        mix(from.b, to.b),
    )
    .to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        assert_eq!(Rgb::from_hex("#FF0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_hex("00FF00"), Some(Rgb::new(0, 255, 0)));
        assert_eq!(Rgb::from_hex("#0000ff"), Some(Rgb::new(0, 0, 255)));
        assert_eq!(Rgb::from_hex("  #FFFFFF  "), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert_eq!(Rgb::from_hex("#FFF"), None);
        assert_eq!(Rgb::from_hex("#FFFFFFF"), None);
        assert_eq!(Rgb::from_hex("GGGGGG"), None);
        assert_eq!(Rgb::from_hex(""), None);
        assert_eq!(Rgb::from_hex("#"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(Rgb::new(0, 128, 255).to_hex(), "#0080FF");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_roundtrip() {
        // Sample the channel space rather than all 16M combinations
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(85) {
                    let original = Rgb::new(r as u8, g as u8, b as u8);
                    assert_eq!(Rgb::from_hex(&original.to_hex()), Some(original));
                }
            }
        }
    }

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("#abc"));
        assert!(is_valid_hex("#AABBCC"));
        assert!(is_valid_hex("#123456"));
        assert!(!is_valid_hex("abc"));
        assert!(!is_valid_hex("#ab"));
        assert!(!is_valid_hex("#abcd"));
        assert!(!is_valid_hex("#gghhii"));
        assert!(!is_valid_hex(""));
    }

    #[test]
    fn test_normalize_hex_shorthand() {
        assert_eq!(normalize_hex("#abc"), "#AABBCC");
        assert_eq!(normalize_hex("#f0f"), "#FF00FF");
    }

    #[test]
    fn test_normalize_hex_full() {
        assert_eq!(normalize_hex("#aabbcc"), "#AABBCC");
        assert_eq!(normalize_hex("#AABBCC"), "#AABBCC");
    }

    #[test]
    fn test_normalize_hex_invalid_passthrough() {
        assert_eq!(normalize_hex("not-a-color"), "not-a-color");
        assert_eq!(normalize_hex("aabbcc"), "aabbcc");
    }

    #[test]
    fn test_normalize_hex_idempotent() {
        for input in ["#abc", "#aabbcc", "#0066CC", "garbage"] {
            let once = normalize_hex(input);
            assert_eq!(normalize_hex(&once), once);
        }
    }

    #[test]
    fn test_adjust_brightness_identity() {
        assert_eq!(adjust_brightness("#3A7BD5", 0.0), "#3A7BD5");
    }

    #[test]
    fn test_adjust_brightness_darken_lighten() {
        assert_eq!(adjust_brightness("#808080", -50.0), "#404040");
        // 0x80 = 128; 128 * 1.5 = 192 = 0xC0
        assert_eq!(adjust_brightness("#808080", 50.0), "#C0C0C0");
    }

    #[test]
    fn test_adjust_brightness_clamps() {
        assert_eq!(adjust_brightness("#FFFFFF", 40.0), "#FFFFFF");
        assert_eq!(adjust_brightness("#808080", -200.0), "#000000");
    }

    #[test]
    fn test_adjust_brightness_invalid_passthrough() {
        assert_eq!(adjust_brightness("oops", 20.0), "oops");
    }

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate("#123456", "#ABCDEF", 0.0), "#123456");
        assert_eq!(interpolate("#123456", "#ABCDEF", 1.0), "#ABCDEF");
    }

    #[test]
    fn test_interpolate_midpoint() {
        // Midpoint of 0x00 and 0xFF rounds to 0x80
        assert_eq!(interpolate("#000000", "#FFFFFF", 0.5), "#808080");
    }

    #[test]
    fn test_interpolate_invalid_returns_first() {
        assert_eq!(interpolate("#123456", "nope", 0.5), "#123456");
        assert_eq!(interpolate("nope", "#123456", 0.5), "nope");
    }

    #[test]
    fn test_interpolate_factor_clamped() {
        assert_eq!(interpolate("#123456", "#ABCDEF", -1.0), "#123456");
        assert_eq!(interpolate("#123456", "#ABCDEF", 2.0), "#ABCDEF");
    }
}
