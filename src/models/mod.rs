//! Data models for colors, palettes, and the three settings domains.
//!
//! This module contains all the core data structures used throughout the
//! customization engine. Models are designed to be independent of UI and
//! transport concerns.

pub mod color;
pub mod layout;
pub mod palette;
pub mod theme;
pub mod typography;

// Re-export all model types
pub use color::{adjust_brightness, interpolate, is_valid_hex, normalize_hex, Rgb, BLACK, WHITE};
pub use layout::{FooterTemplate, HeaderTemplate, LayoutSettings};
pub use palette::{BrightnessScale, ColorPalette, ColorScale, ColorScheme, ScaleStop, SCALE_LEVELS};
pub use theme::ThemeSettings;
pub use typography::{TextRole, TextStyle, TextTransform, TypographySettings};
