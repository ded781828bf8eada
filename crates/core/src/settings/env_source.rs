//! Environment-variable configuration source.

use log::debug;
use std::collections::BTreeMap;
use std::path::Path;

use super::settings_constants::DEFAULT_ENV_PREFIX;
use super::settings_traits::ConfigurationSource;
use crate::errors::Result;

/// Snapshot of prefixed environment variables.
///
/// A setting key is looked up by uppercasing it, mapping `.` and `-` to `_`
/// and prepending the prefix: with prefix `SHOPFRONT_`, the key
/// `default_currency_code` reads `SHOPFRONT_DEFAULT_CURRENCY_CODE`.
///
/// Variables are captured when the source is built. Later changes to the
/// process environment are not visible through an existing source.
#[derive(Debug, Clone)]
pub struct EnvConfigurationSource {
    prefix: String,
    values: BTreeMap<String, String>,
}

impl EnvConfigurationSource {
    /// Captures every variable of the current process environment that
    /// starts with `prefix`. Variables that are not valid unicode are skipped.
    pub fn from_env(prefix: &str) -> Self {
        let values = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .filter(|(k, _)| k.starts_with(prefix))
            .collect::<BTreeMap<_, _>>();
        debug!(
            "Captured {} environment variables with prefix '{}'",
            values.len(),
            prefix
        );
        Self {
            prefix: prefix.to_string(),
            values,
        }
    }

    /// Loads a `.env` file from the working directory or its parents (if
    /// any) into the process environment, then captures it.
    ///
    /// A missing `.env` file is fine; an unreadable or malformed one is a
    /// `ConfigIO` error.
    pub fn load(prefix: &str) -> Result<Self> {
        ignore_missing_file(dotenvy::dotenv())?;
        Ok(Self::from_env(prefix))
    }

    /// Same as [`load`](Self::load), with an explicit dotenv file path.
    pub fn load_from(path: impl AsRef<Path>, prefix: &str) -> Result<Self> {
        ignore_missing_file(dotenvy::from_path(path.as_ref()))?;
        Ok(Self::from_env(prefix))
    }

    /// Reads variables from the given dotenv file only, leaving the process
    /// environment untouched.
    pub fn from_dotenv(path: impl AsRef<Path>, prefix: &str) -> Result<Self> {
        let mut values = BTreeMap::new();
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            if key.starts_with(prefix) {
                values.insert(key, value);
            }
        }
        debug!(
            "Read {} variables with prefix '{}' from {}",
            values.len(),
            prefix,
            path.as_ref().display()
        );
        Ok(Self {
            prefix: prefix.to_string(),
            values,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Environment variable name used for a setting key.
    pub fn env_key(&self, key: &str) -> String {
        let mut name = String::with_capacity(self.prefix.len() + key.len());
        name.push_str(&self.prefix);
        name.extend(key.chars().map(|c| match c {
            '.' | '-' => '_',
            c => c.to_ascii_uppercase(),
        }));
        name
    }
}

fn ignore_missing_file<T>(result: dotenvy::Result<T>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => {
            debug!("No .env file found, using the process environment only");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

impl Default for EnvConfigurationSource {
    /// Captures the current environment under [`DEFAULT_ENV_PREFIX`].
    fn default() -> Self {
        Self::from_env(DEFAULT_ENV_PREFIX)
    }
}

impl ConfigurationSource for EnvConfigurationSource {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.values.get(&self.env_key(key)).cloned()
    }
}
