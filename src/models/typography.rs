//! Typography settings: font selections and per-role text styles.
//!
//! Text roles are a closed set keyed by a canonical wire name
//! ("Heading1", "BodyLarge", ...). The name table below is the single
//! source of truth for both serialization directions; unknown keys
//! arriving from the backend are dropped with a warning rather than
//! failing the whole settings load.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// A text role the renderer knows how to style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextRole {
    /// Top-level page heading.
    Heading1,
    /// Section heading.
    Heading2,
    /// Sub-section heading.
    Heading3,
    /// Minor heading.
    Heading4,
    /// Small heading.
    Heading5,
    /// Smallest heading.
    Heading6,
    /// Lead paragraph text.
    BodyLarge,
    /// Standard paragraph text.
    Body,
    /// De-emphasized paragraph text.
    BodySmall,
    /// Image captions and footnotes.
    Caption,
    /// Small label above a heading or card.
    Overline,
    /// Button labels.
    Button,
    /// Inline links.
    Link,
}

/// Bidirectional role <-> canonical wire name table.
///
/// Built once; both serialization directions go through it so the wire
/// names cannot drift from the enum.
const ROLE_NAMES: [(TextRole, &str); 13] = [
    (TextRole::Heading1, "Heading1"),
    (TextRole::Heading2, "Heading2"),
    (TextRole::Heading3, "Heading3"),
    (TextRole::Heading4, "Heading4"),
    (TextRole::Heading5, "Heading5"),
    (TextRole::Heading6, "Heading6"),
    (TextRole::BodyLarge, "BodyLarge"),
    (TextRole::Body, "Body"),
    (TextRole::BodySmall, "BodySmall"),
    (TextRole::Caption, "Caption"),
    (TextRole::Overline, "Overline"),
    (TextRole::Button, "Button"),
    (TextRole::Link, "Link"),
];

impl TextRole {
    /// All roles, in display order.
    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        ROLE_NAMES.iter().map(|(role, _)| *role)
    }

    /// The canonical wire name of this role (e.g. "Heading1").
    #[must_use]
    pub fn canonical_name(self) -> &'static str {
        ROLE_NAMES
            .iter()
            .find(|(role, _)| *role == self)
            .map(|(_, name)| *name)
            .expect("every role is in the name table")
    }

    /// Looks a role up by wire name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ROLE_NAMES
            .iter()
            .find(|(_, candidate)| candidate.eq_ignore_ascii_case(name))
            .map(|(role, _)| *role)
    }
}

impl Serialize for TextRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical_name())
    }
}

impl<'de> Deserialize<'de> for TextRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown text role '{name}'")))
    }
}

/// CSS text-transform applied to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    /// No transform.
    #[default]
    None,
    /// ALL CAPS.
    Uppercase,
    /// all lower case.
    Lowercase,
    /// First Letter Of Each Word.
    Capitalize,
}

/// The complete style of one text role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font family name.
    pub family: String,
    /// Font size as a CSS length (e.g. "1rem").
    pub size: String,
    /// Font weight (100-900).
    pub weight: u16,
    /// Unitless line height.
    pub line_height: f32,
    /// Optional letter spacing as a CSS length (e.g. "0.02em").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    /// Case transform.
    #[serde(default)]
    pub text_transform: TextTransform,
}

impl TextStyle {
    fn plain(family: &str, size: &str, weight: u16, line_height: f32) -> Self {
        Self {
            family: family.to_string(),
            size: size.to_string(),
            weight,
            line_height,
            letter_spacing: None,
            text_transform: TextTransform::None,
        }
    }
}

/// Font selections plus the per-role style map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySettings {
    /// Main UI and heading font family.
    pub primary_font: String,
    /// Long-form reading font family.
    pub secondary_font: String,
    /// Monospace font family for code.
    pub mono_font: String,
    /// Style per text role, keyed by canonical role name on the wire.
    #[serde(default, deserialize_with = "deserialize_text_styles")]
    pub text_styles: BTreeMap<TextRole, TextStyle>,
}

/// Deserializes the role-keyed style map, dropping unknown keys.
///
/// A strict map deserialization would fail the entire settings load the
/// moment the backend grows a new role; instead unrecognized keys are
/// logged and skipped.
fn deserialize_text_styles<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<TextRole, TextStyle>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, TextStyle>::deserialize(deserializer)?;
    let mut styles = BTreeMap::new();
    for (name, style) in raw {
        match TextRole::from_name(&name) {
            Some(role) => {
                styles.insert(role, style);
            }
            None => warn!(key = %name, "dropping unknown text role from settings"),
        }
    }
    Ok(styles)
}

impl Default for TypographySettings {
    fn default() -> Self {
        let mut text_styles = BTreeMap::new();
        text_styles.insert(TextRole::Heading1, TextStyle::plain("Inter", "2.5rem", 700, 1.2));
        text_styles.insert(TextRole::Heading2, TextStyle::plain("Inter", "2rem", 700, 1.25));
        text_styles.insert(TextRole::Heading3, TextStyle::plain("Inter", "1.75rem", 600, 1.3));
        text_styles.insert(TextRole::Heading4, TextStyle::plain("Inter", "1.5rem", 600, 1.35));
        text_styles.insert(TextRole::Heading5, TextStyle::plain("Inter", "1.25rem", 600, 1.4));
        text_styles.insert(TextRole::Heading6, TextStyle::plain("Inter", "1rem", 600, 1.4));
        text_styles.insert(TextRole::BodyLarge, TextStyle::plain("Inter", "1.125rem", 400, 1.6));
        text_styles.insert(TextRole::Body, TextStyle::plain("Inter", "1rem", 400, 1.6));
        text_styles.insert(TextRole::BodySmall, TextStyle::plain("Inter", "0.875rem", 400, 1.5));
        text_styles.insert(
            TextRole::Caption,
            TextStyle {
                letter_spacing: Some("0.02em".to_string()),
                ..TextStyle::plain("Inter", "0.75rem", 400, 1.4)
            },
        );
        text_styles.insert(
            TextRole::Overline,
            TextStyle {
                letter_spacing: Some("0.08em".to_string()),
                text_transform: TextTransform::Uppercase,
                ..TextStyle::plain("Inter", "0.75rem", 600, 1.4)
            },
        );
        text_styles.insert(
            TextRole::Button,
            TextStyle {
                letter_spacing: Some("0.02em".to_string()),
                ..TextStyle::plain("Inter", "0.875rem", 600, 1.0)
            },
        );
        text_styles.insert(TextRole::Link, TextStyle::plain("Inter", "1rem", 400, 1.6));

        Self {
            primary_font: "Inter".to_string(),
            secondary_font: "Georgia".to_string(),
            mono_font: "JetBrains Mono".to_string(),
            text_styles,
        }
    }
}
