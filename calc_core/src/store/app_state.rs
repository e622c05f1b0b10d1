//! Transient UI state. Nothing here is persisted.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::Writable;
use crate::catalog::Catalog;

/// Lifetime given to notifications that do not set one
pub const DEFAULT_NOTIFICATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Zero keeps the notification until it is removed
    pub duration_ms: u64,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.duration_ms > 0
            && now - self.timestamp >= Duration::milliseconds(self.duration_ms as i64)
    }
}

/// Fields a caller supplies for a new notification
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub duration_ms: u64,
}

impl Default for NewNotification {
    fn default() -> Self {
        NewNotification {
            kind: NotificationKind::Info,
            title: String::new(),
            message: String::new(),
            duration_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppState {
    pub is_loading: bool,
    pub current_calculator: Option<String>,
    pub sidebar_open: bool,
    pub mobile_menu_open: bool,
    pub search_query: String,
    /// Calculator ids matching `search_query`
    pub search_results: Vec<String>,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Default)]
pub struct AppStateStore {
    state: Writable<AppState>,
}

impl AppStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Writable<AppState> {
        &self.state
    }

    pub fn get(&self) -> AppState {
        self.state.get()
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.is_loading = loading);
    }

    pub fn set_current_calculator(&self, calculator_id: Option<&str>) {
        self.state
            .update(|s| s.current_calculator = calculator_id.map(str::to_string));
    }

    pub fn toggle_sidebar(&self) {
        self.state.update(|s| s.sidebar_open = !s.sidebar_open);
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.state.update(|s| s.sidebar_open = open);
    }

    pub fn toggle_mobile_menu(&self) {
        self.state.update(|s| s.mobile_menu_open = !s.mobile_menu_open);
    }

    pub fn set_mobile_menu_open(&self, open: bool) {
        self.state.update(|s| s.mobile_menu_open = open);
    }

    pub fn set_search_query(&self, query: &str) {
        self.state.update(|s| s.search_query = query.to_string());
    }

    pub fn set_search_results(&self, results: Vec<String>) {
        self.state.update(|s| s.search_results = results);
    }

    /// Set the query and fill the results from the catalog in one update
    pub fn search(&self, catalog: &Catalog, query: &str) -> usize {
        let results: Vec<String> = catalog
            .search(Some(query))
            .into_iter()
            .map(|c| c.id.to_string())
            .collect();
        let count = results.len();
        self.state.update(|s| {
            s.search_query = query.to_string();
            s.search_results = results;
        });
        count
    }

    pub fn add_notification(&self, notification: NewNotification) -> String {
        self.add_notification_at(notification, Utc::now())
    }

    pub fn add_notification_at(&self, notification: NewNotification, now: DateTime<Utc>) -> String {
        let id = format!("notification-{}", Uuid::now_v7());
        let entry = Notification {
            id: id.clone(),
            kind: notification.kind,
            title: notification.title,
            message: notification.message,
            duration_ms: notification.duration_ms,
            timestamp: now,
        };
        self.state.update(|s| s.notifications.push(entry));
        id
    }

    pub fn remove_notification(&self, id: &str) {
        self.state.update(|s| s.notifications.retain(|n| n.id != id));
    }

    pub fn clear_notifications(&self) {
        self.state.update(|s| s.notifications.clear());
    }

    /// Drop notifications whose lifetime has passed. Returns how many went.
    pub fn prune_expired(&self, now: DateTime<Utc>) -> usize {
        let expired = self
            .state
            .with(|s| s.notifications.iter().filter(|n| n.is_expired(now)).count());
        if expired > 0 {
            self.state
                .update(|s| s.notifications.retain(|n| !n.is_expired(now)));
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_toggles_and_setters() {
        let store = AppStateStore::new();
        store.toggle_sidebar();
        store.toggle_mobile_menu();
        store.set_loading(true);
        store.set_current_calculator(Some("bmi-calculator"));

        let state = store.get();
        assert!(state.sidebar_open && state.mobile_menu_open && state.is_loading);
        assert_eq!(state.current_calculator.as_deref(), Some("bmi-calculator"));

        store.toggle_sidebar();
        store.set_mobile_menu_open(false);
        store.set_current_calculator(None);
        let state = store.get();
        assert!(!state.sidebar_open && !state.mobile_menu_open);
        assert_eq!(state.current_calculator, None);
    }

    #[test]
    fn test_notification_lifecycle() {
        let store = AppStateStore::new();
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

        let short = store.add_notification_at(
            NewNotification {
                title: "Saved".into(),
                ..NewNotification::default()
            },
            t0,
        );
        let sticky = store.add_notification_at(
            NewNotification {
                kind: NotificationKind::Error,
                duration_ms: 0,
                ..NewNotification::default()
            },
            t0,
        );
        assert_eq!(store.get().notifications.len(), 2);

        assert_eq!(store.prune_expired(t0 + Duration::milliseconds(4999)), 0);
        assert_eq!(store.prune_expired(t0 + Duration::seconds(5)), 1);
        let remaining = store.get().notifications;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, sticky);
        assert_ne!(short, sticky);

        store.remove_notification(&sticky);
        assert!(store.get().notifications.is_empty());
    }

    #[test]
    fn test_clear_notifications() {
        let store = AppStateStore::new();
        store.add_notification(NewNotification::default());
        store.add_notification(NewNotification::default());
        store.clear_notifications();
        assert!(store.get().notifications.is_empty());
    }

    #[test]
    fn test_search_uses_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let store = AppStateStore::new();
        let count = store.search(catalog, "mortgage");
        let state = store.get();
        assert_eq!(state.search_query, "mortgage");
        assert_eq!(state.search_results.len(), count);
        assert!(state.search_results.iter().any(|id| id == "mortgage-calculator"));

        assert_eq!(store.search(catalog, ""), 0);
    }
}
