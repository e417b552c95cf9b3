// src/infrastructure/toml_store.rs
use crate::application::PreferenceStore;
use crate::constants::{APP_DIR_NAME, PREFERENCES_FILE_NAME};
use crate::domain::DomainError;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Preference store persisted as a flat `key = "value"` TOML table.
///
/// Every write rewrites the whole file.
#[derive(Debug)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlPreferenceStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = PathBuf::from(path.as_ref());
        debug!(?path, "Opening preference store");

        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse preferences: {}", path.display()))?
        } else {
            BTreeMap::new()
        };

        info!(?path, entries = values.len(), "Opened preference store");
        Ok(Self { path, values })
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(config_dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    fn flush(&self) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DomainError::Storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let content = toml::to_string(&self.values)
            .map_err(|e| DomainError::Storage(format!("Failed to serialize preferences: {}", e)))?;

        fs::write(&self.path, content).map_err(|e| {
            DomainError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.values.get(key).cloned())
    }

    #[instrument(level = "debug", skip(self, value))]
    fn set_string(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // keep memory in line with what is on disk
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
