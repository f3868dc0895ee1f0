use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Substring that marks the default locale identifier (e.g. `en.default`).
pub const DEFAULT_LOCALE_MARKER: &str = ".default";

/// Flattened locale entries: dotted key path to leaf value.
///
/// Backed by `serde_json::Map` built with `preserve_order`, so iteration
/// follows the order the keys appear in the locale file.
pub type FlatLocaleMap = Map<String, Value>;

/// All locales of a theme, keyed by locale identifier (e.g. `{"en.default": ..., "fr": ...}`).
///
/// Ordered by identifier so every pass walks locales deterministically.
pub type AllLocaleMessages = BTreeMap<String, LocaleMessages>;

/// All flattened entries of a single locale file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleMessages {
    /// Locale identifier derived from the file name (e.g. `en.default`).
    pub locale: String,
    /// Path of the locale file the entries were loaded from.
    pub file_path: String,
    pub entries: FlatLocaleMap,
}

impl LocaleMessages {
    pub fn new(locale: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            entries: FlatLocaleMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_default(&self) -> bool {
        self.locale.contains(DEFAULT_LOCALE_MARKER)
    }
}
