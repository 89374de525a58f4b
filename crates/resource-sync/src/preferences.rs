//! Local Preference Store
//!
//! Per-parent saved date and the name -> color map, kept outside the
//! server in a key/value backend (browser local storage in the app).
//! Last write wins; nothing expires.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use chrono::NaiveDate;

use crate::color::parse_hex;
use crate::error::{SyncError, SyncResult};

/// Current UTC day
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Key/value backend
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> SyncResult<()>;
}

/// Process-local backend; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> SyncResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed view over a backend for one resource kind
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
    resource: &'static str,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S, resource: &'static str) -> Self {
        Self { store, resource }
    }

    /// `{resource}Date_{parentId}`
    pub fn date_key(&self, parent_id: &str) -> String {
        format!("{}Date_{}", self.resource, parent_id)
    }

    /// `{resource}NameColors`
    pub fn colors_key(&self) -> String {
        format!("{}NameColors", self.resource)
    }

    pub fn get_date(&self, parent_id: &str) -> String {
        self.get_date_or(parent_id, today())
    }

    /// Saved date, or `today` (which is then saved as the default)
    pub fn get_date_or(&self, parent_id: &str, today: NaiveDate) -> String {
        let key = self.date_key(parent_id);
        if let Some(saved) = self.store.get(&key) {
            if NaiveDate::parse_from_str(&saved, "%Y-%m-%d").is_ok() {
                return saved;
            }
            log::warn!("Ignoring malformed date {:?} under {}", saved, key);
        }
        let today = today.format("%Y-%m-%d").to_string();
        if let Err(e) = self.store.set(&key, &today) {
            log::warn!("Could not persist default date: {}", e);
        }
        today
    }

    pub fn set_date(&self, parent_id: &str, date: &str) -> SyncResult<()> {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| SyncError::Validation(format!("not a date: {}", date)))?;
        self.store.set(&self.date_key(parent_id), date)
    }

    /// Stored map; missing or corrupt content reads as empty
    pub fn name_colors(&self) -> BTreeMap<String, String> {
        let key = self.colors_key();
        match self.store.get(&key) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring corrupt {}: {}", key, e);
                BTreeMap::new()
            }),
            None => BTreeMap::new(),
        }
    }

    pub fn get_color(&self, name: &str) -> Option<String> {
        self.name_colors().remove(name)
    }

    pub fn set_color(&self, name: &str, color: &str) -> SyncResult<()> {
        if name.trim().is_empty() {
            return Err(SyncError::Validation("a name is required to pick a color".into()));
        }
        if parse_hex(color).is_none() {
            return Err(SyncError::Validation(format!("not a color: {}", color)));
        }
        let mut colors = self.name_colors();
        colors.insert(name.to_string(), color.to_string());
        let raw = serde_json::to_string(&colors).map_err(|e| SyncError::Storage(e.to_string()))?;
        self.store.set(&self.colors_key(), &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_keys() {
        let prefs = Preferences::new(MemoryPreferences::new(), "tasks");
        assert_eq!(prefs.date_key("42"), "tasksDate_42");
        assert_eq!(prefs.colors_key(), "tasksNameColors");
    }

    #[test]
    fn test_first_access_persists_today() {
        let backend = MemoryPreferences::new();
        let prefs = Preferences::new(backend.clone(), "kader");

        assert_eq!(prefs.get_date_or("p1", day("2024-03-09")), "2024-03-09");
        assert_eq!(backend.get("kaderDate_p1").as_deref(), Some("2024-03-09"));
        assert_eq!(prefs.get_date_or("p1", day("2030-01-01")), "2024-03-09");
    }

    #[test]
    fn test_set_date_is_per_parent() {
        let prefs = Preferences::new(MemoryPreferences::new(), "tasks");
        prefs.set_date("p1", "2024-01-02").unwrap();
        assert_eq!(prefs.get_date_or("p1", day("2024-05-05")), "2024-01-02");
        assert_eq!(prefs.get_date_or("p2", day("2024-05-05")), "2024-05-05");
        assert!(prefs.set_date("p1", "yesterday").is_err());
    }

    #[test]
    fn test_malformed_date_reads_as_absent() {
        let backend = MemoryPreferences::new();
        backend.set("tasksDate_p1", "garbage").unwrap();
        let prefs = Preferences::new(backend, "tasks");
        assert_eq!(prefs.get_date_or("p1", day("2024-05-05")), "2024-05-05");
    }

    #[test]
    fn test_color_survives_reload() {
        let backend = MemoryPreferences::new();
        let prefs = Preferences::new(backend.clone(), "tasks");
        prefs.set_color("Ali", "#3b82f6").unwrap();
        prefs.set_color("Mona", "#10b981").unwrap();
        prefs.set_color("Ali", "#ec4899").unwrap();
        assert_eq!(prefs.get_color("Ali").as_deref(), Some("#ec4899"));

        let reloaded = Preferences::new(backend, "tasks");
        assert_eq!(reloaded.get_color("Ali").as_deref(), Some("#ec4899"));
        assert_eq!(reloaded.name_colors().len(), 2);
    }

    #[test]
    fn test_color_requires_name_and_hex() {
        let prefs = Preferences::new(MemoryPreferences::new(), "tasks");
        assert!(prefs.set_color("  ", "#3b82f6").is_err());
        assert!(prefs.set_color("Ali", "blue").is_err());
        assert!(prefs.name_colors().is_empty());
    }

    #[test]
    fn test_corrupt_colors_read_as_empty() {
        let backend = MemoryPreferences::new();
        backend.set("kaderNameColors", "{not json").unwrap();
        let prefs = Preferences::new(backend, "kader");
        assert!(prefs.get_color("Ali").is_none());
        prefs.set_color("Ali", "#3b82f6").unwrap();
        assert_eq!(prefs.get_color("Ali").as_deref(), Some("#3b82f6"));
    }
}
