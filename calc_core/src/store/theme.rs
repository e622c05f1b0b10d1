//! Colour theme selection, persisted as a plain string.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Storage, Writable, THEME_KEY};
use crate::errors::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the system preference
    #[default]
    Auto,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Auto => "Auto",
        }
    }

    /// Class applied to the document root
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
            Theme::Auto => "theme-auto",
        }
    }

    /// Fixed palette; `Auto` has none of its own
    pub fn colors(self) -> Option<&'static ThemeColors> {
        match self {
            Theme::Light => Some(&LIGHT_COLORS),
            Theme::Dark => Some(&DARK_COLORS),
            Theme::Auto => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            other => Err(CalcError::invalid_input("theme", other, "expected light, dark or auto")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
}

pub const LIGHT_COLORS: ThemeColors = ThemeColors {
    primary: "#2563eb",
    background: "#ffffff",
    surface: "#f8fafc",
    text: "#0f172a",
};

pub const DARK_COLORS: ThemeColors = ThemeColors {
    primary: "#3b82f6",
    background: "#0f172a",
    surface: "#1e293b",
    text: "#f8fafc",
};

pub struct ThemeStore {
    theme: Writable<Theme>,
    system_prefers_dark: Cell<bool>,
    storage: Rc<dyn Storage>,
}

impl ThemeStore {
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        ThemeStore {
            theme: Writable::new(Theme::Auto),
            system_prefers_dark: Cell::new(false),
            storage,
        }
    }

    pub fn state(&self) -> &Writable<Theme> {
        &self.theme
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.save(theme);
        self.theme.set(theme);
    }

    /// Light becomes dark; dark and auto become light
    pub fn toggle(&self) -> Theme {
        let next = match self.theme.get() {
            Theme::Light => Theme::Dark,
            Theme::Dark | Theme::Auto => Theme::Light,
        };
        self.set_theme(next);
        next
    }

    /// Pick the initial theme: a valid stored value wins, otherwise the
    /// system preference decides between dark and light.
    pub fn init(&self, system_prefers_dark: bool) -> Theme {
        self.system_prefers_dark.set(system_prefers_dark);

        let stored = match self.storage.get_item(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted theme");
                None
            }
        };

        let theme = match stored.as_deref().map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme,
            Some(Err(_)) | None if system_prefers_dark => Theme::Dark,
            _ => Theme::Light,
        };
        self.theme.set(theme);
        theme
    }

    /// Record a change of system preference. Only `Auto` is affected.
    pub fn system_preference_changed(&self, prefers_dark: bool) {
        self.system_prefers_dark.set(prefers_dark);
        if self.theme.get() == Theme::Auto {
            self.theme.set(Theme::Auto);
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        match self.theme.get() {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::Auto => self.system_prefers_dark.get(),
        }
    }

    /// Palette in effect, resolving `Auto` through the system preference
    pub fn colors(&self) -> &'static ThemeColors {
        match self.theme.get().colors() {
            Some(colors) => colors,
            None if self.is_dark_mode() => &DARK_COLORS,
            None => &LIGHT_COLORS,
        }
    }

    fn save(&self, theme: Theme) {
        if let Err(e) = self.storage.set_item(THEME_KEY, theme.as_str()) {
            tracing::warn!(error = %e, theme = %theme, "failed to persist theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::storage::testing::FailingStorage;
    use crate::store::MemoryStorage;

    #[test]
    fn test_set_theme_persists_plain_string() {
        let storage = Rc::new(MemoryStorage::new());
        let store = ThemeStore::new(storage.clone());
        store.set_theme(Theme::Dark);
        assert_eq!(storage.get_item(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert!(store.is_dark_mode());
    }

    #[test]
    fn test_toggle() {
        let store = ThemeStore::new(Rc::new(MemoryStorage::new()));
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
    }

    #[test]
    fn test_init_prefers_stored_value() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item(THEME_KEY, "auto").unwrap();
        let store = ThemeStore::new(storage);
        assert_eq!(store.init(true), Theme::Auto);
        assert!(store.is_dark_mode());
        assert_eq!(store.colors(), &DARK_COLORS);
    }

    #[test]
    fn test_init_falls_back_to_system() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item(THEME_KEY, "sepia").unwrap();
        let store = ThemeStore::new(storage.clone());
        assert_eq!(store.init(true), Theme::Dark);

        storage.remove_item(THEME_KEY).unwrap();
        assert_eq!(store.init(false), Theme::Light);
    }

    #[test]
    fn test_auto_tracks_system_changes() {
        let store = ThemeStore::new(Rc::new(MemoryStorage::new()));
        store.set_theme(Theme::Auto);
        store.system_preference_changed(true);
        assert!(store.is_dark_mode());
        store.system_preference_changed(false);
        assert_eq!(store.colors(), &LIGHT_COLORS);
        assert_eq!(store.get(), Theme::Auto);

        store.set_theme(Theme::Light);
        store.system_preference_changed(true);
        assert!(!store.is_dark_mode());
    }

    #[test]
    fn test_failing_storage() {
        let store = ThemeStore::new(Rc::new(FailingStorage));
        assert_eq!(store.init(false), Theme::Light);
        store.set_theme(Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("Dark".parse::<Theme>().is_err());
    }
}
