//! Layout settings: template choices, structural flags, and spacing.

use serde::{Deserialize, Serialize};

/// Header template choice for the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderTemplate {
    /// Logo left, navigation right.
    #[default]
    Classic,
    /// Logo and navigation centered.
    Centered,
    /// Logo only, navigation behind a menu button.
    Minimal,
    /// Navigation split around a centered logo.
    Split,
}

/// Footer template choice for the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FooterTemplate {
    /// Multi-column link footer.
    #[default]
    Columns,
    /// Single centered block.
    Centered,
    /// Copyright line only.
    Minimal,
}

/// The layout settings domain.
///
/// Spacing fields carry their CSS unit by convention: `container_width`
/// projects in `px`, the other two in `rem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutSettings {
    /// Header template choice.
    pub header_template: HeaderTemplate,
    /// Footer template choice.
    pub footer_template: FooterTemplate,
    /// Keep the header pinned while scrolling.
    pub sticky_header: bool,
    /// Show social media links in the footer.
    pub show_social_links: bool,
    /// Show the newsletter signup block in the footer.
    pub show_newsletter: bool,
    /// Maximum content width in px.
    pub container_width: u32,
    /// Vertical padding between page sections, in rem.
    pub section_padding: f32,
    /// Gap between sibling components, in rem.
    pub component_gap: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            header_template: HeaderTemplate::default(),
            footer_template: FooterTemplate::default(),
            sticky_header: true,
            show_social_links: true,
            show_newsletter: false,
            container_width: 1280,
            section_padding: 4.0,
            component_gap: 1.5,
        }
    }
}
