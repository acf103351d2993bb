//! Key-value preferences backend.
//!
//! On macOS this is NSUserDefaults (`platform::macos::storage`); the
//! in-memory implementation here backs tests and non-macOS builds.

use std::collections::HashMap;

/// Flat key-value storage for settings.
///
/// Getters return `None` for a missing key or a value of another type.
pub trait PreferencesBackend {
    fn get_bool(&self, key: &str) -> Option<bool>;
    fn set_bool(&mut self, key: &str, value: bool);

    fn get_f64(&self, key: &str) -> Option<f64>;
    fn set_f64(&mut self, key: &str, value: f64);

    fn get_string_list(&self, key: &str) -> Option<Vec<String>>;
    fn set_string_list(&mut self, key: &str, value: &[String]);
}

/// A stored preference value.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefValue {
    Bool(bool),
    Number(f64),
    StringList(Vec<String>),
}

/// HashMap-backed preferences.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, PrefValue>,
    writes: usize,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, for assertions.
    pub fn value(&self, key: &str) -> Option<&PrefValue> {
        self.values.get(key)
    }

    /// Store a raw value without going through the typed setters.
    pub fn insert(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }

    /// Number of writes made through the trait.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn put(&mut self, key: &str, value: PrefValue) {
        self.writes += 1;
        self.values.insert(key.to_string(), value);
    }
}

impl PreferencesBackend for MemoryPreferences {
    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(PrefValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.put(key, PrefValue::Bool(value));
    }

    fn get_f64(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(PrefValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    fn set_f64(&mut self, key: &str, value: f64) {
        self.put(key, PrefValue::Number(value));
    }

    fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        match self.values.get(key) {
            Some(PrefValue::StringList(v)) => Some(v.clone()),
            _ => None,
        }
    }

    fn set_string_list(&mut self, key: &str, value: &[String]) {
        self.put(key, PrefValue::StringList(value.to_vec()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_type_reads_as_missing() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_f64("iconSize", 48.0);
        assert_eq!(prefs.get_bool("iconSize"), None);
        assert_eq!(prefs.get_f64("iconSize"), Some(48.0));
    }

    #[test]
    fn raw_insert_is_not_counted_as_write() {
        let mut prefs = MemoryPreferences::new();
        prefs.insert("showNames", PrefValue::Bool(true));
        assert_eq!(prefs.write_count(), 0);
        prefs.set_bool("showNames", false);
        assert_eq!(prefs.write_count(), 1);
    }
}
