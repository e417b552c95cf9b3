// src/application/preferences.rs
use crate::domain::DomainError;

/// Generic string key-value store the backends persist their settings in.
pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, DomainError>;

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), DomainError>;
}
