//! Derivation of style variables from settings.
//!
//! Each settings domain projects a fixed set of named CSS custom
//! properties. The derivations are pure functions returning ordered
//! `(name, value)` lists; applying them through a projector is a
//! separate, idempotent step — replaying the same settings writes the
//! same values.

use crate::models::layout::LayoutSettings;
use crate::models::theme::ThemeSettings;
use crate::models::typography::TypographySettings;
use crate::services::palette::generate_scale11;
use crate::store::projector::EnvironmentProjector;

/// Variables derived from theme settings.
///
/// Each palette's primary base color expands through the eleven-stop
/// scale; the stops land under a per-palette prefix (`--brand-50` ..
/// `--brand-950`) and the DEFAULT entry under the bare prefix
/// (`--brand`).
#[must_use]
pub fn theme_variables(settings: &ThemeSettings) -> Vec<(String, String)> {
    let palettes = [
        ("brand", &settings.brand_palette),
        ("neutral", &settings.neutral_palette),
        ("semantic", &settings.semantic_palette),
    ];

    let mut vars = Vec::with_capacity(palettes.len() * 12);
    for (prefix, palette) in palettes {
        let scale = generate_scale11(&palette.primary.base);
        for stop in &scale.stops {
            vars.push((format!("--{prefix}-{}", stop.level), stop.hex.clone()));
        }
        vars.push((format!("--{prefix}"), scale.default_hex.clone()));
    }
    vars
}

/// Variables derived from typography settings: the three font families,
/// verbatim.
#[must_use]
pub fn typography_variables(settings: &TypographySettings) -> Vec<(String, String)> {
    vec![
        ("--font-primary".to_string(), settings.primary_font.clone()),
        ("--font-secondary".to_string(), settings.secondary_font.clone()),
        ("--font-mono".to_string(), settings.mono_font.clone()),
    ]
}

/// Variables derived from layout settings, with unit suffixes.
#[must_use]
pub fn layout_variables(settings: &LayoutSettings) -> Vec<(String, String)> {
    vec![
        (
            "--layout-container-width".to_string(),
            format!("{}px", settings.container_width),
        ),
        (
            "--layout-section-padding".to_string(),
            format!("{}rem", settings.section_padding),
        ),
        (
            "--layout-component-gap".to_string(),
            format!("{}rem", settings.component_gap),
        ),
    ]
}

/// Writes a derived variable list through a projector.
pub fn apply(projector: &dyn EnvironmentProjector, vars: &[(String, String)]) {
    for (name, value) in vars {
        projector.set_variable(name, value);
    }
}
