//! Environment projection port.
//!
//! The rendering surface (a browser root element, in the real deployment)
//! is reached through [`EnvironmentProjector`] so the core stays testable
//! without one. Projection writes are fire-and-forget: an unavailable
//! surface is a no-op, never an error.

use std::collections::BTreeMap;
use std::sync::Mutex;

/// Write target for derived style variables.
pub trait EnvironmentProjector: Send + Sync {
    /// Writes one named style variable (e.g. `--brand-500` = `#0066CC`).
    ///
    /// Called once per derived value per projection pass. Implementations
    /// must not fail; callers without a renderable surface should treat
    /// the write as a no-op.
    fn set_variable(&self, name: &str, value: &str);
}

/// Projector for headless contexts; every write is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProjector;

impl EnvironmentProjector for NoopProjector {
    fn set_variable(&self, _name: &str, _value: &str) {}
}

/// Projector that records writes; the test double for projection passes.
#[derive(Debug, Default)]
pub struct RecordingProjector {
    vars: Mutex<BTreeMap<String, String>>,
}

impl RecordingProjector {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last value written under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.vars.lock().expect("projector state poisoned").get(name).cloned()
    }

    /// Number of distinct variables written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.lock().expect("projector state poisoned").len()
    }

    /// True when nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of every variable written so far.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.vars.lock().expect("projector state poisoned").clone()
    }
}

impl EnvironmentProjector for RecordingProjector {
    fn set_variable(&self, name: &str, value: &str) {
        self.vars
            .lock()
            .expect("projector state poisoned")
            .insert(name.to_string(), value.to_string());
    }
}
