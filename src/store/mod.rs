//! Customization state: server truth, local preview, dirty tracking.
//!
//! Each settings domain (theme, typography, layout) lives in a
//! [`DomainState`]: a live value plus a snapshot of what the backend last
//! confirmed. Local edits move the live value only; saves and loads move
//! both; reset copies the snapshot back. [`CustomizationStore`] owns the
//! three domains and coordinates the persistence gateway, the fallback
//! cache, and environment projection.

pub mod cache;
pub mod gateway;
pub mod projection;
pub mod projector;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error};

use crate::models::layout::LayoutSettings;
use crate::models::theme::ThemeSettings;
use crate::models::typography::TypographySettings;
use cache::SettingsCache;
use gateway::SettingsGateway;
use projector::EnvironmentProjector;

/// One of the three settings domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Color palettes.
    Theme,
    /// Fonts and text styles.
    Typography,
    /// Templates, flags, and spacing.
    Layout,
}

impl Domain {
    const fn index(self) -> usize {
        match self {
            Self::Theme => 0,
            Self::Typography => 1,
            Self::Layout => 2,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Theme => "theme",
            Self::Typography => "typography",
            Self::Layout => "layout",
        };
        write!(f, "{name}")
    }
}

/// Errors surfaced by the customization store.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// One or more of the three load fetches failed. The store commits
    /// nothing in that case; the specific causes are logged, and the
    /// caller needs no recovery action beyond retrying the load.
    #[error("failed to load customization settings")]
    FetchFailed,

    /// A domain-specific save rejected. The live value is left unchanged
    /// so the editor can stay open with the user's pending edits.
    #[error("failed to save {domain} settings")]
    SaveFailed {
        /// The domain whose save failed.
        domain: Domain,
        /// The underlying gateway error.
        #[source]
        source: anyhow::Error,
    },
}

/// Operation status: in-flight load count plus error flags.
///
/// The load tracker is a counter rather than a shared boolean so
/// overlapping load calls cannot clear each other's loading state early.
#[derive(Debug, Clone, Default)]
pub struct StoreStatus {
    loads_in_flight: usize,
    load_failed: bool,
    save_failed: [bool; 3],
}

impl StoreStatus {
    /// True while at least one load operation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loads_in_flight > 0
    }

    /// True when the most recent load attempt failed.
    #[must_use]
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// True when the most recent save of `domain` failed.
    #[must_use]
    pub fn save_failed(&self, domain: Domain) -> bool {
        self.save_failed[domain.index()]
    }

    fn begin_load(&mut self) {
        self.loads_in_flight += 1;
        self.load_failed = false;
    }

    fn finish_load(&mut self) {
        self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
    }
}

/// Live value plus last-persisted snapshot for one settings domain.
///
/// The snapshot is a deep copy taken immediately after a successful load
/// or save, used only for dirty comparison and reset.
#[derive(Debug, Clone)]
pub struct DomainState<T> {
    live: Option<T>,
    snapshot: Option<T>,
}

impl<T> Default for DomainState<T> {
    fn default() -> Self {
        Self {
            live: None,
            snapshot: None,
        }
    }
}

impl<T: Clone + PartialEq> DomainState<T> {
    /// The live value, if the domain has been loaded or locally set.
    #[must_use]
    pub fn live(&self) -> Option<&T> {
        self.live.as_ref()
    }

    /// The last-persisted snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&T> {
        self.snapshot.as_ref()
    }

    /// True when the live value differs structurally from the snapshot.
    ///
    /// A locally-set value with no snapshot yet also counts as dirty.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        match (&self.live, &self.snapshot) {
            (Some(live), Some(snapshot)) => live != snapshot,
            (None, None) => false,
            _ => true,
        }
    }

    /// Installs a server-confirmed value: live and snapshot both become
    /// `value`.
    pub fn commit(&mut self, value: T) {
        self.snapshot = Some(value.clone());
        self.live = Some(value);
    }

    /// Replaces the live value only (local preview); the snapshot is
    /// untouched.
    pub fn set_local(&mut self, value: T) {
        self.live = Some(value);
    }

    /// Copies the snapshot back over the live value. No-op when the
    /// domain was never persisted.
    pub fn reset(&mut self) {
        if let Some(snapshot) = &self.snapshot {
            self.live = Some(snapshot.clone());
        }
    }
}

/// The customization session: three settings domains, their gateway, the
/// fallback cache, and the projection surface.
///
/// Mutating operations take `&mut self`, so two saves cannot overlap
/// through one owner. The gateway itself is not fenced, though: separate
/// store handles sharing one backend reproduce the original
/// later-response-wins race, which is documented and tested rather than
/// fixed at this layer. There is no cancellation and no timeout here;
/// both belong to the transport behind the gateway.
pub struct CustomizationStore {
    gateway: Arc<dyn SettingsGateway>,
    projector: Arc<dyn EnvironmentProjector>,
    cache: Option<SettingsCache>,
    theme: DomainState<ThemeSettings>,
    typography: DomainState<TypographySettings>,
    layout: DomainState<LayoutSettings>,
    status: StoreStatus,
}

impl CustomizationStore {
    /// Creates a store over a gateway and a projection surface, with no
    /// local cache.
    #[must_use]
    pub fn new(
        gateway: Arc<dyn SettingsGateway>,
        projector: Arc<dyn EnvironmentProjector>,
    ) -> Self {
        Self {
            gateway,
            projector,
            cache: None,
            theme: DomainState::default(),
            typography: DomainState::default(),
            layout: DomainState::default(),
            status: StoreStatus::default(),
        }
    }

    /// Attaches a best-effort local cache for cold-start fallbacks.
    #[must_use]
    pub fn with_cache(mut self, cache: SettingsCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Current theme settings, if loaded.
    #[must_use]
    pub fn theme(&self) -> Option<&ThemeSettings> {
        self.theme.live()
    }

    /// Current typography settings, if loaded.
    #[must_use]
    pub fn typography(&self) -> Option<&TypographySettings> {
        self.typography.live()
    }

    /// Current layout settings, if loaded.
    #[must_use]
    pub fn layout(&self) -> Option<&LayoutSettings> {
        self.layout.live()
    }

    /// Operation status flags.
    #[must_use]
    pub fn status(&self) -> &StoreStatus {
        &self.status
    }

    /// True iff any domain's live value differs from its snapshot.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.theme.is_dirty() || self.typography.is_dirty() || self.layout.is_dirty()
    }

    /// Loads all three settings domains concurrently.
    ///
    /// Commit is all-or-nothing at load granularity: if any fetch fails,
    /// no domain is touched, the load-failed flag is set, and the causes
    /// are logged. On success each domain falls back server → cache →
    /// default, snapshots are taken, and all three domains project onto
    /// the environment. The loading counter is decremented on every
    /// path.
    pub async fn load_all(&mut self) -> Result<(), SettingsError> {
        self.status.begin_load();

        let gateway = Arc::clone(&self.gateway);
        let (theme_res, typography_res, layout_res) = tokio::join!(
            gateway.fetch_theme(),
            gateway.fetch_typography(),
            gateway.fetch_layout(),
        );

        self.status.finish_load();

        match (theme_res, typography_res, layout_res) {
            (Ok(theme), Ok(typography), Ok(layout)) => {
                let theme = theme
                    .or_else(|| self.cache.as_ref().and_then(SettingsCache::load_theme))
                    .unwrap_or_default();
                let typography = typography
                    .or_else(|| self.cache.as_ref().and_then(SettingsCache::load_typography))
                    .unwrap_or_default();
                let layout = layout
                    .or_else(|| self.cache.as_ref().and_then(SettingsCache::load_layout))
                    .unwrap_or_default();

                if let Some(cache) = &self.cache {
                    cache.store_theme(&theme);
                    cache.store_typography(&typography);
                    cache.store_layout(&layout);
                }

                self.theme.commit(theme);
                self.typography.commit(typography);
                self.layout.commit(layout);
                self.project_all();

                debug!("customization settings loaded");
                Ok(())
            }
            (theme_res, typography_res, layout_res) => {
                let causes = [
                    (Domain::Theme, theme_res.err()),
                    (Domain::Typography, typography_res.err()),
                    (Domain::Layout, layout_res.err()),
                ];
                for (domain, err) in causes {
                    if let Some(err) = err {
                        error!(%domain, error = %err, "settings fetch failed");
                    }
                }

                self.status.load_failed = true;
                Err(SettingsError::FetchFailed)
            }
        }
    }

    /// Persists theme settings and commits the backend's stored object.
    ///
    /// The returned object is authoritative, not an echo of the input:
    /// live value and snapshot both become what the backend stored, and
    /// the theme re-projects. On failure the live value is unchanged,
    /// the domain's save flag is set, and the error propagates so the
    /// caller can react.
    pub async fn update_theme(
        &mut self,
        settings: ThemeSettings,
    ) -> Result<ThemeSettings, SettingsError> {
        self.status.save_failed[Domain::Theme.index()] = false;

        match self.gateway.update_theme(&settings).await {
            Ok(stored) => {
                if let Some(cache) = &self.cache {
                    cache.store_theme(&stored);
                }
                self.theme.commit(stored.clone());
                self.project_theme();
                debug!("theme settings saved");
                Ok(stored)
            }
            Err(source) => {
                self.status.save_failed[Domain::Theme.index()] = true;
                Err(SettingsError::SaveFailed {
                    domain: Domain::Theme,
                    source,
                })
            }
        }
    }

    /// Persists typography settings; same contract as [`Self::update_theme`].
    pub async fn update_typography(
        &mut self,
        settings: TypographySettings,
    ) -> Result<TypographySettings, SettingsError> {
        self.status.save_failed[Domain::Typography.index()] = false;

        match self.gateway.update_typography(&settings).await {
            Ok(stored) => {
                if let Some(cache) = &self.cache {
                    cache.store_typography(&stored);
                }
                self.typography.commit(stored.clone());
                self.project_typography();
                debug!("typography settings saved");
                Ok(stored)
            }
            Err(source) => {
                self.status.save_failed[Domain::Typography.index()] = true;
                Err(SettingsError::SaveFailed {
                    domain: Domain::Typography,
                    source,
                })
            }
        }
    }

    /// Persists layout settings; same contract as [`Self::update_theme`].
    pub async fn update_layout(
        &mut self,
        settings: LayoutSettings,
    ) -> Result<LayoutSettings, SettingsError> {
        self.status.save_failed[Domain::Layout.index()] = false;

        match self.gateway.update_layout(&settings).await {
            Ok(stored) => {
                if let Some(cache) = &self.cache {
                    cache.store_layout(&stored);
                }
                self.layout.commit(stored.clone());
                self.project_layout();
                debug!("layout settings saved");
                Ok(stored)
            }
            Err(source) => {
                self.status.save_failed[Domain::Layout.index()] = true;
                Err(SettingsError::SaveFailed {
                    domain: Domain::Layout,
                    source,
                })
            }
        }
    }

    /// Replaces the live theme for preview; snapshot and backend are
    /// untouched. This is how live editing works while a save is
    /// pending.
    pub fn set_theme_local(&mut self, settings: ThemeSettings) {
        self.theme.set_local(settings);
        self.project_theme();
    }

    /// Replaces the live typography for preview; snapshot and backend
    /// are untouched.
    pub fn set_typography_local(&mut self, settings: TypographySettings) {
        self.typography.set_local(settings);
        self.project_typography();
    }

    /// Replaces the live layout for preview; snapshot and backend are
    /// untouched.
    pub fn set_layout_local(&mut self, settings: LayoutSettings) {
        self.layout.set_local(settings);
        self.project_layout();
    }

    /// Discards local edits: every domain with a snapshot gets it copied
    /// back over the live value, then all three re-project.
    pub fn reset_to_saved(&mut self) {
        self.theme.reset();
        self.typography.reset();
        self.layout.reset();
        self.project_all();
        debug!("local edits reset to last saved settings");
    }

    fn project_theme(&self) {
        if let Some(settings) = self.theme.live() {
            projection::apply(
                self.projector.as_ref(),
                &projection::theme_variables(settings),
            );
        }
    }

    fn project_typography(&self) {
        if let Some(settings) = self.typography.live() {
            projection::apply(
                self.projector.as_ref(),
                &projection::typography_variables(settings),
            );
        }
    }

    fn project_layout(&self) {
        if let Some(settings) = self.layout.live() {
            projection::apply(
                self.projector.as_ref(),
                &projection::layout_variables(settings),
            );
        }
    }

    fn project_all(&self) {
        self.project_theme();
        self.project_typography();
        self.project_layout();
    }
}
