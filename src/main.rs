//! brandkit - headless CLI for the CMS visual-customization engine
//!
//! Derives color schemes, brightness scales, WCAG reports, and projected
//! style variables from seed colors, for scripting and CI use. The full
//! settings lifecycle (load/preview/save) lives in the library and runs
//! inside the CMS itself.

use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

use brandkit::cli::{ContrastArgs, ScaleArgs, SchemeArgs, VarsArgs};

/// brandkit - color system and customization tooling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive a base/light/dark/contrast scheme from a seed color
    Scheme(SchemeArgs),
    /// Expand a seed color into a 5- or 11-stop scale
    Scale(ScaleArgs),
    /// Check a color pair against WCAG contrast thresholds
    Contrast(ContrastArgs),
    /// Print the style variables a theme would project
    Vars(VarsArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Scheme(args) => args.execute(),
        Command::Scale(args) => args.execute(),
        Command::Contrast(args) => args.execute(),
        Command::Vars(args) => args.execute(),
    };

    match result {
        Ok(code) => process::exit(code.code()),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(err.exit_code().code());
        }
    }
}
