use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::settings_constants::KEY_PATH_SEPARATOR;
use super::settings_traits::ConfigurationSource;
use crate::errors::{Error, Result};

/// Owned, in-memory snapshot of configuration values.
///
/// Built once by the host (from a map, an iterator of pairs, or a JSON
/// document) and then only read.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ConfigSnapshot {
    values: BTreeMap<String, String>,
}

impl ConfigSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Builds a snapshot from a JSON object.
    ///
    /// Nested objects are flattened into dotted keys
    /// (`{"shop": {"currency": "EUR"}}` becomes `shop.currency`). Strings are
    /// kept verbatim, numbers and booleans are stringified, `null` entries are
    /// skipped. Arrays have no key/value form and are rejected, as are two
    /// entries that flatten to the same key (`"shop.currency"` next to
    /// `"shop": {"currency": ...}`).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(object) = root else {
            return Err(Error::InvalidConfigValue(
                "configuration document must be a JSON object".to_string(),
            ));
        };

        let mut values = BTreeMap::new();
        flatten_into(&mut values, None, object)?;
        debug!("Built configuration snapshot with {} keys", values.len());
        Ok(Self { values })
    }
}

fn flatten_into(
    values: &mut BTreeMap<String, String>,
    prefix: Option<&str>,
    object: Map<String, Value>,
) -> Result<()> {
    for (name, value) in object {
        let key = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, KEY_PATH_SEPARATOR, name),
            None => name,
        };
        match value {
            Value::Null => {}
            Value::String(s) => insert_unique(values, key, s)?,
            Value::Bool(b) => insert_unique(values, key, b.to_string())?,
            Value::Number(n) => insert_unique(values, key, n.to_string())?,
            Value::Object(nested) => flatten_into(values, Some(&key), nested)?,
            Value::Array(_) => {
                return Err(Error::InvalidConfigValue(format!(
                    "'{}' is an array; only scalar values and objects are supported",
                    key
                )));
            }
        }
    }
    Ok(())
}

fn insert_unique(values: &mut BTreeMap<String, String>, key: String, value: String) -> Result<()> {
    if values.contains_key(&key) {
        return Err(Error::InvalidConfigValue(format!(
            "'{}' is defined more than once",
            key
        )));
    }
    values.insert(key, value);
    Ok(())
}

impl ConfigurationSource for ConfigSnapshot {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for ConfigSnapshot {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}
