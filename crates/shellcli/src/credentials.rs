//! Write-once credential memoization

use crate::{ConfigError, ResourceConfig};
use std::sync::{Mutex, OnceLock};
use tracing::debug;

/// Password and private key, fetched from the resource configuration at most once
///
/// Successful lookups are stored for the lifetime of the cache and never
/// invalidated. First access is serialized by an init lock, so concurrent
/// readers never trigger a second lookup. Failed lookups are not stored.
#[derive(Debug, Default)]
pub struct CredentialCache {
    password: OnceLock<String>,
    private_key: OnceLock<String>,
    init: Mutex<()>,
}

impl CredentialCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached password, fetched from `config` on first access
    pub fn password(&self, config: &dyn ResourceConfig) -> Result<&str, ConfigError> {
        self.get_or_fetch(&self.password, "password", || config.password())
    }

    /// Cached private key, fetched from `config` on first access
    pub fn private_key(&self, config: &dyn ResourceConfig) -> Result<&str, ConfigError> {
        self.get_or_fetch(&self.private_key, "private_key", || config.private_key())
    }

    fn get_or_fetch<'a, F>(
        &'a self,
        cell: &'a OnceLock<String>,
        name: &str,
        fetch: F,
    ) -> Result<&'a str, ConfigError>
    where
        F: FnOnce() -> Result<String, ConfigError>,
    {
        if let Some(value) = cell.get() {
            return Ok(value.as_str());
        }

        let _guard = self.init.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(value) = cell.get() {
            return Ok(value.as_str());
        }

        debug!("Fetching {} from resource configuration", name);
        let value = fetch()?;
        Ok(cell.get_or_init(|| value).as_str())
    }
}
