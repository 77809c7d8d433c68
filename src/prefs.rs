//! Preference Store
//!
//! Synchronous key-value persistence for favorites, theme and accent color.
//! Reads fall back to a default and writes are best-effort: the in-memory
//! state stays authoritative for the session. Failures are logged so they
//! remain observable.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{ACCENT_KEY, FAVORITES_KEY, THEME_KEY};
use crate::error::DashboardResult;
use crate::models::{AccentColor, Theme};

/// Raw string storage backend
pub trait KeyValueStorage {
    /// `Ok(None)` when the key is absent
    fn get_item(&self, key: &str) -> DashboardResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> DashboardResult<()>;
}

/// Favorited prompt keys: unique, insertion-ordered, opaque
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(Vec<String>);

impl Favorites {
    #[cfg(test)]
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut favorites = Self::default();
        for key in keys {
            let key = key.into();
            if !favorites.contains(&key) {
                favorites.0.push(key);
            }
        }
        favorites
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    /// Remove `key` if present, add it otherwise; returns the new membership
    pub fn toggle(&mut self, key: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|k| k == key) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(key.to_string());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything persisted across visits
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
    pub favorites: Favorites,
    pub theme: Theme,
    pub accent: AccentColor,
}

/// JSON-encoded values on top of a [`KeyValueStorage`]
pub struct PreferenceStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// `Ok(None)` for absent keys, `Err` for unreadable or corrupt entries
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> DashboardResult<Option<T>> {
        match self.storage.get_item(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn try_write<T: Serialize>(&self, key: &str, value: &T) -> DashboardResult<()> {
        let raw = serde_json::to_string(value)?;
        self.storage.set_item(key, &raw)
    }

    /// Read `key`, or `default` on absence or any failure
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_read(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(key, "[PREFS] read failed, using default: {}", e);
                default
            }
        }
    }

    /// Best-effort write; failures are logged and dropped
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_write(key, value) {
            tracing::warn!(key, "[PREFS] write failed: {}", e);
        }
    }

    pub fn load(&self) -> Preferences {
        Preferences {
            favorites: self.read(FAVORITES_KEY, Favorites::default()),
            theme: self.read(THEME_KEY, Theme::default()),
            accent: self.read(ACCENT_KEY, AccentColor::default()),
        }
    }

    pub fn save_favorites(&self, favorites: &Favorites) {
        self.write(FAVORITES_KEY, favorites);
    }

    pub fn save_theme(&self, theme: Theme) {
        self.write(THEME_KEY, &theme);
    }

    pub fn save_accent(&self, accent: AccentColor) {
        self.write(ACCENT_KEY, &accent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    use rolling_logger::{LogBuffer, RollingLayer};
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    use crate::error::DashboardError;

    /// In-memory backend; can be told to fail every call
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
        failing: bool,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        /// A backend whose reads and writes always error, like a full or
        /// disabled browser storage
        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        pub fn insert_raw(&self, key: &str, value: &str) {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    impl KeyValueStorage for MemoryStorage {
        fn get_item(&self, key: &str) -> DashboardResult<Option<String>> {
            if self.failing {
                return Err(DashboardError::Storage("storage unavailable".to_string()));
            }
            Ok(self.raw(key))
        }

        fn set_item(&self, key: &str, value: &str) -> DashboardResult<()> {
            if self.failing {
                return Err(DashboardError::Storage("quota exceeded".to_string()));
            }
            self.insert_raw(key, value);
            Ok(())
        }
    }

    fn with_log<F: FnOnce()>(f: F) -> LogBuffer {
        let buffer = LogBuffer::new(16);
        let subscriber = tracing_subscriber::registry().with(RollingLayer::new(buffer.clone()));
        tracing::subscriber::with_default(subscriber, f);
        buffer
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut favorites = Favorites::from_keys(["a::one::0"]);
        let before = favorites.clone();

        assert!(favorites.toggle("b::two::1"));
        assert!(favorites.contains("b::two::1"));
        assert!(!favorites.toggle("b::two::1"));
        assert_eq!(favorites, before);

        assert!(!favorites.toggle("a::one::0"));
        assert!(favorites.toggle("a::one::0"));
        assert!(favorites.contains("a::one::0"));
    }

    #[test]
    fn test_from_keys_drops_duplicates() {
        let favorites = Favorites::from_keys(["x", "y", "x"]);
        assert_eq!(favorites.keys(), ["x", "y"]);
    }

    #[test]
    fn test_load_defaults_when_empty() {
        let store = PreferenceStore::new(MemoryStorage::new());
        assert_eq!(store.load(), Preferences::default());
    }

    #[test]
    fn test_save_and_load() {
        let store = PreferenceStore::new(MemoryStorage::new());
        store.save_favorites(&Favorites::from_keys(["lvl1::idea-sprint::0"]));
        store.save_theme(Theme::Dark);
        store.save_accent(AccentColor::Sky);

        assert_eq!(store.storage().raw(THEME_KEY).as_deref(), Some("\"dark\""));
        assert_eq!(
            store.storage().raw(FAVORITES_KEY).as_deref(),
            Some("[\"lvl1::idea-sprint::0\"]")
        );

        let prefs = store.load();
        assert!(prefs.favorites.contains("lvl1::idea-sprint::0"));
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.accent, AccentColor::Sky);
    }

    #[test]
    fn test_corrupt_entry_falls_back_and_logs() {
        let storage = MemoryStorage::new();
        storage.insert_raw(THEME_KEY, "{not json");
        storage.insert_raw(ACCENT_KEY, "\"magenta\"");
        let store = PreferenceStore::new(storage);

        assert!(store.try_read::<Theme>(THEME_KEY).is_err());

        let mut prefs = Preferences::default();
        let log = with_log(|| prefs = store.load());
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.accent, AccentColor::Emerald);
        assert_eq!(log.entries_at_least(Level::WARN).len(), 2);
    }

    #[test]
    fn test_failed_write_is_swallowed_but_logged() {
        let store = PreferenceStore::new(MemoryStorage::failing());
        assert!(matches!(
            store.try_write(THEME_KEY, &Theme::Dark),
            Err(DashboardError::Storage(_))
        ));

        let log = with_log(|| store.save_theme(Theme::Dark));
        let warnings = log.entries_at_least(Level::WARN);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("write failed"));
    }

    #[test]
    fn test_unavailable_storage_reads_default() {
        let store = PreferenceStore::new(MemoryStorage::failing());
        assert_eq!(store.read(FAVORITES_KEY, Favorites::default()), Favorites::default());
    }
}
