//! User preferences with defaults, partial updates and persistence.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{persist, read_persisted, Storage, Writable, PREFERENCES_KEY};
use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(CalcError::invalid_input("units", s, "expected 'metric' or 'imperial'")),
        }
    }
}

/// Display and behaviour preferences. Keys missing from persisted data
/// take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub currency: String,
    pub units: UnitSystem,
    pub decimal_places: u8,
    pub thousands_separator: bool,
    pub auto_save: bool,
    pub show_tooltips: bool,
    pub compact_mode: bool,
    pub high_contrast: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        UserPreferences {
            currency: "USD".to_string(),
            units: UnitSystem::Metric,
            decimal_places: 2,
            thousands_separator: true,
            auto_save: true,
            show_tooltips: true,
            compact_mode: false,
            high_contrast: false,
        }
    }
}

/// A single preference change
#[derive(Debug, Clone, PartialEq)]
pub enum Preference {
    Currency(String),
    Units(UnitSystem),
    DecimalPlaces(u8),
    ThousandsSeparator(bool),
    AutoSave(bool),
    ShowTooltips(bool),
    CompactMode(bool),
    HighContrast(bool),
}

impl Preference {
    /// Every accepted preference key
    pub const KEYS: [&'static str; 8] = [
        "currency",
        "units",
        "decimal_places",
        "thousands_separator",
        "auto_save",
        "show_tooltips",
        "compact_mode",
        "high_contrast",
    ];

    /// Parse a `key=value` pair as typed on a command line.
    pub fn parse(key: &str, value: &str) -> CalcResult<Self> {
        let flag = |v: &str| -> CalcResult<bool> {
            v.parse::<bool>()
                .map_err(|_| CalcError::invalid_input(key, v, "expected 'true' or 'false'"))
        };

        match key {
            "currency" => {
                let code = value.trim().to_ascii_uppercase();
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(CalcError::invalid_input(key, value, "expected a 3-letter currency code"));
                }
                Ok(Preference::Currency(code))
            }
            "units" => Ok(Preference::Units(value.parse()?)),
            "decimal_places" => value
                .parse::<u8>()
                .ok()
                .filter(|n| *n <= 10)
                .map(Preference::DecimalPlaces)
                .ok_or_else(|| CalcError::invalid_input(key, value, "expected a whole number from 0 to 10")),
            "thousands_separator" => Ok(Preference::ThousandsSeparator(flag(value)?)),
            "auto_save" => Ok(Preference::AutoSave(flag(value)?)),
            "show_tooltips" => Ok(Preference::ShowTooltips(flag(value)?)),
            "compact_mode" => Ok(Preference::CompactMode(flag(value)?)),
            "high_contrast" => Ok(Preference::HighContrast(flag(value)?)),
            _ => Err(CalcError::invalid_input(
                "preference",
                key,
                format!("unknown preference; expected one of {}", Preference::KEYS.join(", ")),
            )),
        }
    }

    fn apply(self, prefs: &mut UserPreferences) {
        match self {
            Preference::Currency(v) => prefs.currency = v,
            Preference::Units(v) => prefs.units = v,
            Preference::DecimalPlaces(v) => prefs.decimal_places = v,
            Preference::ThousandsSeparator(v) => prefs.thousands_separator = v,
            Preference::AutoSave(v) => prefs.auto_save = v,
            Preference::ShowTooltips(v) => prefs.show_tooltips = v,
            Preference::CompactMode(v) => prefs.compact_mode = v,
            Preference::HighContrast(v) => prefs.high_contrast = v,
        }
    }
}

pub struct PreferencesStore {
    prefs: Writable<UserPreferences>,
    storage: Rc<dyn Storage>,
}

impl PreferencesStore {
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        PreferencesStore {
            prefs: Writable::new(UserPreferences::default()),
            storage,
        }
    }

    pub fn state(&self) -> &Writable<UserPreferences> {
        &self.prefs
    }

    pub fn get(&self) -> UserPreferences {
        self.prefs.get()
    }

    /// Change one preference, leaving the others as they are
    pub fn update_preference(&self, preference: Preference) {
        tracing::debug!(?preference, "updating preference");
        self.prefs.update(|prefs| preference.apply(prefs));
        self.save();
    }

    /// Apply a JSON patch of camelCase keys. The patch is rejected whole if
    /// any value has the wrong type.
    pub fn merge(&self, patch: &Map<String, Value>) -> CalcResult<()> {
        let mut merged = serde_json::to_value(self.prefs.get())?;
        if let Value::Object(current) = &mut merged {
            for (key, value) in patch {
                current.insert(key.clone(), value.clone());
            }
        }
        let prefs: UserPreferences = serde_json::from_value(merged)?;
        self.prefs.set(prefs);
        self.save();
        Ok(())
    }

    /// Restore defaults and forget the persisted preferences
    pub fn reset(&self) {
        if let Err(e) = self.storage.remove_item(PREFERENCES_KEY) {
            tracing::warn!(error = %e, "failed to clear persisted preferences");
        }
        self.prefs.set(UserPreferences::default());
    }

    /// Rehydrate from storage, filling missing keys with defaults
    pub fn load(&self) {
        if let Some(prefs) = read_persisted::<UserPreferences>(self.storage.as_ref(), PREFERENCES_KEY) {
            self.prefs.set(prefs);
        }
    }

    fn save(&self) {
        self.prefs
            .with(|prefs| persist(self.storage.as_ref(), PREFERENCES_KEY, prefs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::storage::testing::FailingStorage;
    use crate::store::MemoryStorage;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.currency, "USD");
        assert_eq!(prefs.units, UnitSystem::Metric);
        assert_eq!(prefs.decimal_places, 2);
        assert!(prefs.thousands_separator && prefs.auto_save && prefs.show_tooltips);
        assert!(!prefs.compact_mode && !prefs.high_contrast);
    }

    #[test]
    fn test_update_changes_only_one_field() {
        let store = PreferencesStore::new(Rc::new(MemoryStorage::new()));
        store.update_preference(Preference::Currency("EUR".into()));

        let expected = UserPreferences {
            currency: "EUR".into(),
            ..UserPreferences::default()
        };
        assert_eq!(store.get(), expected);
    }

    #[test]
    fn test_load_merges_with_defaults() {
        let storage = Rc::new(MemoryStorage::new());
        storage
            .set_item(PREFERENCES_KEY, r#"{"units":"imperial","legacyKey":1}"#)
            .unwrap();
        let store = PreferencesStore::new(storage);
        store.load();

        let prefs = store.get();
        assert_eq!(prefs.units, UnitSystem::Imperial);
        assert_eq!(prefs.currency, "USD");
        assert_eq!(prefs.decimal_places, 2);
    }

    #[test]
    fn test_persist_and_reset() {
        let storage = Rc::new(MemoryStorage::new());
        let store = PreferencesStore::new(storage.clone());
        store.update_preference(Preference::DecimalPlaces(4));

        let raw = storage.get_item(PREFERENCES_KEY).unwrap().unwrap();
        assert!(raw.contains("\"decimalPlaces\":4"));

        store.reset();
        assert_eq!(store.get(), UserPreferences::default());
        assert_eq!(storage.get_item(PREFERENCES_KEY).unwrap(), None);
    }

    #[test]
    fn test_merge_patch() {
        let store = PreferencesStore::new(Rc::new(MemoryStorage::new()));
        let patch = json!({ "compactMode": true, "currency": "GBP" });
        store.merge(patch.as_object().unwrap()).unwrap();
        assert!(store.get().compact_mode);
        assert_eq!(store.get().currency, "GBP");

        let bad = json!({ "decimalPlaces": "many" });
        assert!(store.merge(bad.as_object().unwrap()).is_err());
        assert_eq!(store.get().decimal_places, 2);
    }

    #[test]
    fn test_parse_preference() {
        assert_eq!(
            Preference::parse("currency", "eur").unwrap(),
            Preference::Currency("EUR".into())
        );
        assert_eq!(
            Preference::parse("units", "Imperial").unwrap(),
            Preference::Units(UnitSystem::Imperial)
        );
        assert_eq!(
            Preference::parse("high_contrast", "true").unwrap(),
            Preference::HighContrast(true)
        );
        assert!(Preference::parse("decimal_places", "11").is_err());
        assert!(Preference::parse("auto_save", "yes").is_err());
        assert!(Preference::parse("font", "large").is_err());
    }

    #[test]
    fn test_failing_storage_still_updates() {
        let store = PreferencesStore::new(Rc::new(FailingStorage));
        store.load();
        store.update_preference(Preference::CompactMode(true));
        assert!(store.get().compact_mode);
        store.reset();
        assert!(!store.get().compact_mode);
    }
}
