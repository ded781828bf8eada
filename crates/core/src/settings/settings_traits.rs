//! Configuration source trait.
//!
//! The host application owns its configuration; core services only read from
//! it through this trait and never mutate it.

use std::collections::{BTreeMap, HashMap};

use crate::errors::{Error, Result};

/// Read-only key/value view over the host application's configuration.
///
/// Implementations should behave as a snapshot: two reads of the same key
/// with no intervening rebuild return the same value.
pub trait ConfigurationSource: Send + Sync {
    /// Get a single setting value by key. Returns None if not configured.
    fn get_setting(&self, key: &str) -> Option<String>;

    /// Get a setting that must be present.
    fn require_setting(&self, key: &str) -> Result<String> {
        self.get_setting(key)
            .ok_or_else(|| Error::MissingConfigKey(key.to_string()))
    }

    /// Returns true if a value is configured for `key`, even an empty one.
    fn contains_setting(&self, key: &str) -> bool {
        self.get_setting(key).is_some()
    }
}

impl ConfigurationSource for HashMap<String, String> {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigurationSource for BTreeMap<String, String> {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
