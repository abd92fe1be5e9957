//! Scheme command: derive a four-stop color scheme from a seed.

use clap::Args;

use crate::cli::common::{require_hex, CliError, CliResult, ExitCode};
use crate::services::palette::generate_scheme;

/// Derive a base/light/dark/contrast scheme from a seed color
#[derive(Debug, Clone, Args)]
pub struct SchemeArgs {
    /// Seed color (#RGB or #RRGGBB)
    #[arg(value_name = "SEED")]
    pub seed: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SchemeArgs {
    /// Execute the scheme command
    pub fn execute(&self) -> CliResult<ExitCode> {
        require_hex(&self.seed, "seed")?;

        let scheme = generate_scheme(&self.seed);

        if self.json {
            let json = serde_json::to_string_pretty(&scheme)
                .map_err(|e| CliError::failed(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("base:     {}", scheme.base);
            println!("light:    {}", scheme.light);
            println!("dark:     {}", scheme.dark);
            println!("contrast: {}", scheme.contrast);
        }

        Ok(ExitCode::Success)
    }
}
