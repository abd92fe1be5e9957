//! Contrast command: WCAG compliance report for a color pair.
//!
//! Exits non-zero when the pair misses AA for normal text, so CI
//! pipelines can gate brand color changes on readability.

use clap::Args;

use crate::cli::common::{require_hex, CliError, CliResult, ExitCode};
use crate::services::contrast::check_wcag;

/// Check a foreground/background pair against WCAG thresholds
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Foreground (text) color
    #[arg(value_name = "FOREGROUND")]
    pub foreground: String,

    /// Background color
    #[arg(value_name = "BACKGROUND")]
    pub background: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<ExitCode> {
        require_hex(&self.foreground, "foreground")?;
        require_hex(&self.background, "background")?;

        let report = check_wcag(&self.foreground, &self.background);

        if self.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::failed(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            let badge = |passed: bool| if passed { "pass" } else { "fail" };
            println!("ratio:      {:.2}", report.ratio);
            println!("AA normal:  {}", badge(report.meets_aa));
            println!("AAA normal: {}", badge(report.meets_aaa));
            println!("AA large:   {}", badge(report.meets_aa_large));
            println!("AAA large:  {}", badge(report.meets_aaa_large));
        }

        if report.meets_aa {
            Ok(ExitCode::Success)
        } else {
            Ok(ExitCode::CheckFailed)
        }
    }
}
