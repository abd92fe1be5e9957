//! Scale command: expand a seed color into a multi-stop scale.

use clap::Args;

use crate::cli::common::{require_hex, CliError, CliResult, ExitCode};
use crate::services::palette::{generate_scale11, generate_scale5};

/// Expand a seed color into a 5- or 11-stop scale
#[derive(Debug, Clone, Args)]
pub struct ScaleArgs {
    /// Seed color (#RGB or #RRGGBB)
    #[arg(value_name = "SEED")]
    pub seed: String,

    /// Number of stops (5 or 11)
    #[arg(long, default_value_t = 11)]
    pub stops: u8,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScaleArgs {
    /// Execute the scale command
    pub fn execute(&self) -> CliResult<ExitCode> {
        require_hex(&self.seed, "seed")?;

        match self.stops {
            5 => {
                let scale = generate_scale5(&self.seed);
                if self.json {
                    let json = serde_json::to_string_pretty(&scale)
                        .map_err(|e| CliError::failed(format!("Failed to serialize JSON: {e}")))?;
                    println!("{json}");
                } else {
                    println!("lighter: {}", scale.lighter);
                    println!("light:   {}", scale.light);
                    println!("base:    {}", scale.base);
                    println!("dark:    {}", scale.dark);
                    println!("darker:  {}", scale.darker);
                }
            }
            11 => {
                let scale = generate_scale11(&self.seed);
                if self.json {
                    let json = serde_json::to_string_pretty(&scale)
                        .map_err(|e| CliError::failed(format!("Failed to serialize JSON: {e}")))?;
                    println!("{json}");
                } else {
                    for stop in &scale.stops {
                        println!("{:>7}: {}", stop.level, stop.hex);
                    }
                    println!("DEFAULT: {}", scale.default_hex);
                }
            }
            other => {
                return Err(CliError::usage(format!(
                    "unsupported stop count {other}: expected 5 or 11"
                )))
            }
        }

        Ok(ExitCode::Success)
    }
}
