//! CLI command handlers for brandkit.
//!
//! This module provides headless, scriptable access to the color engine
//! for automation, testing, and CI/CD integration.

pub mod common;
pub mod contrast;
pub mod scale;
pub mod scheme;
pub mod vars;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use contrast::ContrastArgs;
pub use scale::ScaleArgs;
pub use scheme::SchemeArgs;
pub use vars::VarsArgs;
