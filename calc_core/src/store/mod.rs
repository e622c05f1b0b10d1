//! # Client State Stores
//!
//! Observable state containers for everything a user session accumulates:
//! calculation history, preferences, theme, transient UI state and
//! performance counters.
//!
//! Each persisted store writes through a shared [`Storage`] backend on every
//! mutation. Persistence is best effort: a failed read, write or parse is
//! logged with `tracing::warn!` and the in-memory state carries on.
//!
//! ## Lifecycle
//!
//! Stores start at their defaults. [`ClientState::hydrate`] loads whatever
//! the storage holds; call it once after construction.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::store::ClientState;
//! use serde_json::Map;
//!
//! let state = ClientState::in_memory();
//! state.hydrate(false);
//!
//! let id = state.history.add_calculation("bmi-calculator", "BMI Calculator", Map::new(), Map::new());
//! state.history.toggle_favorite(&id);
//! assert_eq!(state.history.favorites().len(), 1);
//! ```

pub mod app_state;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod history;
pub mod observable;
pub mod performance;
pub mod preferences;
pub mod storage;
pub mod theme;

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CalcError;

pub use app_state::{AppState, AppStateStore, NewNotification, Notification, NotificationKind};
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
pub use history::{HistoryEntry, HistoryStore, UsageStat};
pub use observable::{SubscriptionId, Writable};
pub use performance::{PerformanceMetrics, PerformanceStore};
pub use preferences::{Preference, PreferencesStore, UnitSystem, UserPreferences};
pub use storage::{MemoryStorage, Storage};
pub use theme::{Theme, ThemeColors, ThemeStore};

/// Storage key of the calculation history (JSON array)
pub const HISTORY_KEY: &str = "kceva-calculator-history";
/// Storage key of the user preferences (JSON object)
pub const PREFERENCES_KEY: &str = "kceva-user-preferences";
/// Storage key of the theme (plain string)
pub const THEME_KEY: &str = "kceva-theme";

/// Serialize `value` under `key`, logging instead of failing.
pub(crate) fn persist<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(CalcError::from)
        .and_then(|json| storage.set_item(key, &json));
    if let Err(e) = result {
        tracing::warn!(key, error = %e, "failed to persist store");
    }
}

/// Read and parse `key`. Absent, unreadable and corrupt data all give `None`;
/// the latter two are logged.
pub(crate) fn read_persisted<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted store");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring unreadable persisted store");
            None
        }
    }
}

/// Every client store, sharing one storage backend.
pub struct ClientState {
    pub storage: Rc<dyn Storage>,
    pub history: HistoryStore,
    pub preferences: PreferencesStore,
    pub theme: ThemeStore,
    pub app: AppStateStore,
    pub performance: PerformanceStore,
}

impl ClientState {
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        ClientState {
            history: HistoryStore::new(Rc::clone(&storage)),
            preferences: PreferencesStore::new(Rc::clone(&storage)),
            theme: ThemeStore::new(Rc::clone(&storage)),
            app: AppStateStore::new(),
            performance: PerformanceStore::new(),
            storage,
        }
    }

    /// Stores backed by [`MemoryStorage`]
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    /// Load persisted history, preferences and theme.
    pub fn hydrate(&self, system_prefers_dark: bool) {
        self.history.load_history();
        self.preferences.load();
        self.theme.init(system_prefers_dark);
        tracing::debug!(history = self.history.len(), "client state hydrated");
    }
}
