//! Vars command: preview the CSS custom properties a theme projects.

use clap::Args;

use crate::cli::common::{require_hex, CliResult, ExitCode};
use crate::models::theme::{
    ThemeSettings, DEFAULT_BRAND_SEEDS, DEFAULT_NEUTRAL_SEEDS, DEFAULT_SEMANTIC_SEEDS,
};
use crate::services::palette::generate_palette;
use crate::store::projection::theme_variables;

/// Print the style variables a theme built from three seeds would project
#[derive(Debug, Clone, Args)]
pub struct VarsArgs {
    /// Brand seed color
    #[arg(long, default_value = DEFAULT_BRAND_SEEDS.0)]
    pub brand: String,

    /// Neutral seed color
    #[arg(long, default_value = DEFAULT_NEUTRAL_SEEDS.0)]
    pub neutral: String,

    /// Semantic seed color
    #[arg(long, default_value = DEFAULT_SEMANTIC_SEEDS.0)]
    pub semantic: String,
}

impl VarsArgs {
    /// Execute the vars command
    pub fn execute(&self) -> CliResult<ExitCode> {
        require_hex(&self.brand, "brand")?;
        require_hex(&self.neutral, "neutral")?;
        require_hex(&self.semantic, "semantic")?;

        // Only each palette's primary base feeds projection, so the
        // secondary/accent slots can reuse the same seed here.
        let theme = ThemeSettings {
            brand_palette: generate_palette(&self.brand, &self.brand, &self.brand),
            neutral_palette: generate_palette(&self.neutral, &self.neutral, &self.neutral),
            semantic_palette: generate_palette(&self.semantic, &self.semantic, &self.semantic),
            last_modified_at: None,
            last_modified_by: None,
        };

        for (name, value) in theme_variables(&theme) {
            println!("{name}: {value};");
        }

        Ok(ExitCode::Success)
    }
}
