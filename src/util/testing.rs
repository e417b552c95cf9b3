// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::PreferenceStore;
use crate::domain::DomainError;

/// In-memory preference store for testing code that depends on PreferenceStore
///
/// # Examples
///
/// ```
/// use wallfetch::application::PreferenceStore;
/// use wallfetch::util::testing::MockPreferenceStore;
///
/// let mut store = MockPreferenceStore::builder()
///     .with_value("wallhaven_queries", "[]")
///     .build();
/// store.set_string("wallhaven_api_key", "secret").unwrap();
/// assert_eq!(store.write_count(), 1);
/// ```
#[derive(Debug)]
pub struct MockPreferenceStore {
    values: HashMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl MockPreferenceStore {
    pub fn builder() -> MockPreferenceStoreBuilder {
        MockPreferenceStoreBuilder::new()
    }

    /// Current value of `key`, bypassing the trait
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// Number of successful set_string calls
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MockPreferenceStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.values.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::Storage(format!("write to '{}' refused", key)));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Builder for MockPreferenceStore
pub struct MockPreferenceStoreBuilder {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MockPreferenceStoreBuilder {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            fail_writes: false,
        }
    }

    /// Seed a stored value
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every set_string fail with DomainError::Storage
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn build(self) -> MockPreferenceStore {
        MockPreferenceStore {
            values: self.values,
            fail_writes: self.fail_writes,
            writes: 0,
        }
    }
}

impl Default for MockPreferenceStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
