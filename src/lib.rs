//! Visual customization engine for CMS theming.
//!
//! This library turns a handful of user-picked brand colors into
//! complete, accessibility-checked color systems, and manages the
//! edit/preview/persist lifecycle for three settings domains: theme,
//! typography, and layout. Persistence and the rendering surface are
//! reached through ports ([`store::gateway::SettingsGateway`] and
//! [`store::projector::EnvironmentProjector`]), so the engine runs
//! headless in tests and tools.

// Module declarations
pub mod cli;
pub mod models;
pub mod services;
pub mod store;

pub use store::{CustomizationStore, Domain, DomainState, SettingsError, StoreStatus};
