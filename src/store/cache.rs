//! Best-effort local cache of the last-known settings.
//!
//! Settings are mirrored to JSON files under fixed names in the platform
//! cache directory, giving cold starts and offline sessions something
//! better than hard-coded defaults. The cache is never authoritative: a
//! successful server fetch always wins, write failures are swallowed with
//! a warning, and malformed entries read as absent.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::models::layout::LayoutSettings;
use crate::models::theme::ThemeSettings;
use crate::models::typography::TypographySettings;

const THEME_FILE: &str = "theme.json";
const TYPOGRAPHY_FILE: &str = "typography.json";
const LAYOUT_FILE: &str = "layout.json";

/// File-backed settings cache.
#[derive(Debug, Clone)]
pub struct SettingsCache {
    dir: PathBuf,
}

impl SettingsCache {
    /// Opens the cache in the platform cache directory
    /// (e.g. `~/.cache/brandkit` on Linux).
    ///
    /// Returns `None` when the platform reports no cache directory;
    /// callers then simply run uncached.
    #[must_use]
    pub fn open_default() -> Option<Self> {
        dirs::cache_dir().map(|dir| Self::at(dir.join("brandkit")))
    }

    /// Opens the cache rooted at an explicit directory (used by tests).
    #[must_use]
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory the cache reads and writes.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Last cached theme settings, if present and well-formed.
    #[must_use]
    pub fn load_theme(&self) -> Option<ThemeSettings> {
        self.read(THEME_FILE)
    }

    /// Caches theme settings, best-effort.
    pub fn store_theme(&self, settings: &ThemeSettings) {
        self.write(THEME_FILE, settings);
    }

    /// Last cached typography settings, if present and well-formed.
    #[must_use]
    pub fn load_typography(&self) -> Option<TypographySettings> {
        self.read(TYPOGRAPHY_FILE)
    }

    /// Caches typography settings, best-effort.
    pub fn store_typography(&self, settings: &TypographySettings) {
        self.write(TYPOGRAPHY_FILE, settings);
    }

    /// Last cached layout settings, if present and well-formed.
    #[must_use]
    pub fn load_layout(&self) -> Option<LayoutSettings> {
        self.read(LAYOUT_FILE)
    }

    /// Caches layout settings, best-effort.
    pub fn store_layout(&self, settings: &LayoutSettings) {
        self.write(LAYOUT_FILE, settings);
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.dir.join(name);
        if !path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read settings cache");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "malformed settings cache entry, ignoring");
                None
            }
        }
    }

    fn write<T: Serialize>(&self, name: &str, value: &T) {
        if let Err(err) = self.try_write(name, value) {
            warn!(error = %err, "failed to update settings cache");
        }
    }

    fn try_write<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).context(format!(
            "failed to create cache directory {}",
            self.dir.display()
        ))?;

        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json).context(format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache() -> (tempfile::TempDir, SettingsCache) {
        let dir = tempfile::TempDir::new().expect("failed to create temp dir");
        let cache = SettingsCache::at(dir.path());
        (dir, cache)
    }

    #[test]
    fn test_empty_cache_loads_nothing() {
        let (_dir, cache) = temp_cache();
        assert!(cache.load_theme().is_none());
        assert!(cache.load_typography().is_none());
        assert!(cache.load_layout().is_none());
    }

    #[test]
    fn test_round_trip() {
        let (_dir, cache) = temp_cache();

        let layout = LayoutSettings {
            container_width: 960,
            ..LayoutSettings::default()
        };
        cache.store_layout(&layout);
        assert_eq!(cache.load_layout(), Some(layout));

        let theme = ThemeSettings::default();
        cache.store_theme(&theme);
        assert_eq!(cache.load_theme(), Some(theme));
    }

    #[test]
    fn test_malformed_entry_reads_as_absent() {
        let (dir, cache) = temp_cache();
        fs::write(dir.path().join("theme.json"), "{ not json").unwrap();
        assert!(cache.load_theme().is_none());
    }

    #[test]
    fn test_overwrite_keeps_latest() {
        let (_dir, cache) = temp_cache();

        let mut layout = LayoutSettings::default();
        cache.store_layout(&layout);
        layout.container_width = 640;
        cache.store_layout(&layout);

        assert_eq!(cache.load_layout().map(|l| l.container_width), Some(640));
    }
}
