// src/application/registry.rs
use crate::domain::wallhaven::WALLHAVEN;
use crate::domain::{BackendDescriptor, DomainError};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// All image-source backends known to the process, keyed by service name.
///
/// Registration rejects a second backend with the same service name. Service
/// names contain no `_`, so distinct names always yield disjoint key sets.
#[derive(Debug, Default)]
pub struct BackendRegistry {
    backends: BTreeMap<&'static str, BackendDescriptor>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every backend shipped with the application.
    pub fn builtin() -> Result<Self, DomainError> {
        let mut registry = Self::new();
        registry.register(BackendDescriptor::compile(WALLHAVEN)?)?;
        info!(backends = registry.len(), "Registered builtin backends");
        Ok(registry)
    }

    pub fn register(&mut self, descriptor: BackendDescriptor) -> Result<(), DomainError> {
        let name = descriptor.service_name();
        if self.backends.contains_key(name) {
            return Err(DomainError::DuplicateBackend(name.to_string()));
        }

        debug!(backend = name, namespace = descriptor.namespace(), "Registering backend");
        self.backends.insert(name, descriptor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&BackendDescriptor, DomainError> {
        self.backends
            .get(name)
            .ok_or_else(|| DomainError::UnknownBackend(name.to_string()))
    }

    /// Backend owning a fully-qualified preference key, if any.
    pub fn owner_of(&self, key: &str) -> Option<&BackendDescriptor> {
        self.backends.values().find(|d| d.owns_key(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &BackendDescriptor> {
        self.backends.values()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.backends.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}
