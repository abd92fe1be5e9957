//! Theme settings: the three persisted color palettes plus audit fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::palette::ColorPalette;
use crate::services::palette::generate_palette;

/// Default brand seeds (primary, secondary, accent).
pub const DEFAULT_BRAND_SEEDS: (&str, &str, &str) = ("#0066CC", "#4D94DB", "#FF6B35");
/// Default neutral seeds (primary, secondary, accent).
pub const DEFAULT_NEUTRAL_SEEDS: (&str, &str, &str) = ("#6B7280", "#9CA3AF", "#374151");
/// Default semantic-status seeds (success, warning, danger).
pub const DEFAULT_SEMANTIC_SEEDS: (&str, &str, &str) = ("#16A34A", "#F59E0B", "#DC2626");

/// The theme settings domain: three palettes plus audit fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    /// Brand identity colors.
    pub brand_palette: ColorPalette,
    /// Grays and surfaces.
    pub neutral_palette: ColorPalette,
    /// Status colors (success / warning / danger).
    pub semantic_palette: ColorPalette,
    /// When the settings were last persisted, set by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
    /// CMS user who last persisted the settings, set by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<Uuid>,
}

impl Default for ThemeSettings {
    /// A complete presentable theme derived from the seed constants.
    ///
    /// Going through the generator (instead of hand-maintained tables)
    /// means the defaults always satisfy the scheme invariants.
    fn default() -> Self {
        let (bp, bs, ba) = DEFAULT_BRAND_SEEDS;
        let (np, ns, na) = DEFAULT_NEUTRAL_SEEDS;
        let (sp, ss, sa) = DEFAULT_SEMANTIC_SEEDS;
        Self {
            brand_palette: generate_palette(bp, bs, ba),
            neutral_palette: generate_palette(np, ns, na),
            semantic_palette: generate_palette(sp, ss, sa),
            last_modified_at: None,
            last_modified_by: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_schemes() {
        let theme = ThemeSettings::default();
        assert_eq!(theme.brand_palette.primary.base, "#0066CC");
        assert_eq!(theme.brand_palette.primary.contrast, "#FFFFFF");
        assert_eq!(theme.semantic_palette.accent.base, "#DC2626");
        assert!(theme.last_modified_at.is_none());
        assert!(theme.last_modified_by.is_none());
    }

    #[test]
    fn test_default_contrast_invariant() {
        let theme = ThemeSettings::default();
        for palette in [
            &theme.brand_palette,
            &theme.neutral_palette,
            &theme.semantic_palette,
        ] {
            for scheme in [&palette.primary, &palette.secondary, &palette.accent] {
                assert!(
                    scheme.contrast == "#000000" || scheme.contrast == "#FFFFFF",
                    "contrast must be pure black or white, got {}",
                    scheme.contrast
                );
            }
        }
    }

    #[test]
    fn test_wire_field_names() {
        let theme = ThemeSettings::default();
        let json = serde_json::to_value(&theme).unwrap();
        assert!(json["brandPalette"].is_object());
        assert!(json["neutralPalette"].is_object());
        assert!(json["semanticPalette"].is_object());
        // Unset audit fields stay off the wire
        assert!(json.get("lastModifiedAt").is_none());
    }

    #[test]
    fn test_audit_fields_round_trip() {
        let mut theme = ThemeSettings::default();
        theme.last_modified_at = Some("2026-03-01T12:00:00Z".parse().unwrap());
        theme.last_modified_by = Some(Uuid::nil());

        let json = serde_json::to_string(&theme).unwrap();
        let restored: ThemeSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(theme, restored);
    }
}
