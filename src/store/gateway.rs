//! Persistence port for the three settings domains.
//!
//! The store talks to the CMS backend exclusively through
//! [`SettingsGateway`]; HTTP, retries, auth, and error-code mapping all
//! live behind it. The envelope structs here pin down the exact PUT body
//! shapes so transport implementations cannot drift from the wire
//! contract.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::models::layout::LayoutSettings;
use crate::models::theme::ThemeSettings;
use crate::models::typography::TypographySettings;

/// Transport-agnostic persistence port, REST-shaped.
///
/// Fetch operations return `Ok(None)` when the backend holds no settings
/// yet (a fresh site); the store falls back to cached or default values.
/// Update operations return the authoritative stored object — backends may
/// stamp audit fields or normalize values, so the result is not simply an
/// echo of the input.
#[async_trait]
pub trait SettingsGateway: Send + Sync {
    /// GET theme settings.
    async fn fetch_theme(&self) -> Result<Option<ThemeSettings>>;
    /// PUT theme settings, returning the stored object.
    async fn update_theme(&self, settings: &ThemeSettings) -> Result<ThemeSettings>;

    /// GET typography settings.
    async fn fetch_typography(&self) -> Result<Option<TypographySettings>>;
    /// PUT typography settings, returning the stored object.
    async fn update_typography(&self, settings: &TypographySettings)
        -> Result<TypographySettings>;

    /// GET layout settings.
    async fn fetch_layout(&self) -> Result<Option<LayoutSettings>>;
    /// PUT layout settings, returning the stored object.
    async fn update_layout(&self, settings: &LayoutSettings) -> Result<LayoutSettings>;
}

/// PUT body for theme updates: `{ "themeSettings": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettingsEnvelope {
    /// The settings payload.
    pub theme_settings: ThemeSettings,
}

/// PUT body for typography updates: `{ "typographySettings": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySettingsEnvelope {
    /// The settings payload.
    pub typography_settings: TypographySettings,
}

/// PUT body for layout updates: `{ "layoutSettings": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettingsEnvelope {
    /// The settings payload.
    pub layout_settings: LayoutSettings,
}

#[derive(Debug, Default)]
struct MemoryState {
    theme: Option<ThemeSettings>,
    typography: Option<TypographySettings>,
    layout: Option<LayoutSettings>,
}

/// In-memory gateway for tests, demos, and offline use.
///
/// Behaves like a minimal backend: starts empty, stores whatever is PUT,
/// and stamps the theme audit timestamp on update so callers can observe
/// that the returned object is authoritative rather than an echo.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    state: Mutex<MemoryState>,
}

impl MemoryGateway {
    /// Creates an empty gateway (all fetches return `None`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stored theme, if any.
    #[must_use]
    pub fn stored_theme(&self) -> Option<ThemeSettings> {
        self.state.lock().expect("gateway state poisoned").theme.clone()
    }

    /// Current stored typography, if any.
    #[must_use]
    pub fn stored_typography(&self) -> Option<TypographySettings> {
        self.state
            .lock()
            .expect("gateway state poisoned")
            .typography
            .clone()
    }

    /// Current stored layout, if any.
    #[must_use]
    pub fn stored_layout(&self) -> Option<LayoutSettings> {
        self.state.lock().expect("gateway state poisoned").layout.clone()
    }
}

#[async_trait]
impl SettingsGateway for MemoryGateway {
    async fn fetch_theme(&self) -> Result<Option<ThemeSettings>> {
        Ok(self.stored_theme())
    }

    async fn update_theme(&self, settings: &ThemeSettings) -> Result<ThemeSettings> {
        let mut stored = settings.clone();
        stored.last_modified_at = Some(Utc::now());
        self.state.lock().expect("gateway state poisoned").theme = Some(stored.clone());
        Ok(stored)
    }

    async fn fetch_typography(&self) -> Result<Option<TypographySettings>> {
        Ok(self.stored_typography())
    }

    async fn update_typography(
        &self,
        settings: &TypographySettings,
    ) -> Result<TypographySettings> {
        let stored = settings.clone();
        self.state.lock().expect("gateway state poisoned").typography = Some(stored.clone());
        Ok(stored)
    }

    async fn fetch_layout(&self) -> Result<Option<LayoutSettings>> {
        Ok(self.stored_layout())
    }

    async fn update_layout(&self, settings: &LayoutSettings) -> Result<LayoutSettings> {
        let stored = settings.clone();
        self.state.lock().expect("gateway state poisoned").layout = Some(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_wire_shape() {
        let envelope = ThemeSettingsEnvelope {
            theme_settings: ThemeSettings::default(),
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json["themeSettings"].is_object());
        assert!(json["themeSettings"]["brandPalette"].is_object());
    }

    #[tokio::test]
    async fn test_memory_gateway_starts_empty() {
        let gateway = MemoryGateway::new();
        assert!(gateway.fetch_theme().await.unwrap().is_none());
        assert!(gateway.fetch_typography().await.unwrap().is_none());
        assert!(gateway.fetch_layout().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_gateway_update_is_authoritative() {
        let gateway = MemoryGateway::new();
        let sent = ThemeSettings::default();
        assert!(sent.last_modified_at.is_none());

        let stored = gateway.update_theme(&sent).await.unwrap();
        assert!(stored.last_modified_at.is_some(), "backend stamps the audit field");
        assert_eq!(gateway.fetch_theme().await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_memory_gateway_round_trip() {
        let gateway = MemoryGateway::new();
        let layout = LayoutSettings {
            container_width: 960,
            ..LayoutSettings::default()
        };
        gateway.update_layout(&layout).await.unwrap();
        assert_eq!(gateway.fetch_layout().await.unwrap(), Some(layout));
    }
}
