// src/domain/backend.rs
use crate::domain::DomainError;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument};

static SERVICE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*$").expect("static regex"));
static SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("static regex"));

/// Compile-time description of an image-source backend.
///
/// Patterns are written unanchored; [`BackendDescriptor::compile`] wraps them
/// so that every predicate is a full match of the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendDefinition {
    pub service_name: &'static str,
    pub display_name: &'static str,
    pub queries_suffix: &'static str,
    pub api_key_suffix: &'static str,
    pub api_key_pattern: &'static str,
    pub search_url_pattern: &'static str,
    pub description_pattern: &'static str,
    pub key_test_endpoint: &'static str,
}

/// Immutable, compiled form of a [`BackendDefinition`].
///
/// Built once at startup and shared by reference. Holds no mutable state, so
/// it can be read from any number of threads.
#[derive(Debug, Clone)]
pub struct BackendDescriptor {
    definition: BackendDefinition,
    key_prefix: String,
    api_key_re: Regex,
    search_url_re: Regex,
    description_re: Regex,
}

impl BackendDescriptor {
    #[instrument(level = "debug", skip(definition), fields(backend = definition.service_name))]
    pub fn compile(definition: BackendDefinition) -> Result<Self, DomainError> {
        if !SERVICE_NAME_RE.is_match(definition.service_name) {
            return Err(DomainError::InvalidServiceName(
                definition.service_name.to_string(),
            ));
        }

        for suffix in [definition.queries_suffix, definition.api_key_suffix] {
            if !SUFFIX_RE.is_match(suffix) {
                return Err(DomainError::InvalidSuffix {
                    backend: definition.service_name.to_string(),
                    suffix: suffix.to_string(),
                });
            }
        }
        if definition.queries_suffix == definition.api_key_suffix {
            return Err(DomainError::InvalidSuffix {
                backend: definition.service_name.to_string(),
                suffix: definition.api_key_suffix.to_string(),
            });
        }

        let descriptor = Self {
            key_prefix: format!("{}_", definition.service_name),
            api_key_re: full_match(&definition, "api key", definition.api_key_pattern)?,
            search_url_re: full_match(&definition, "search url", definition.search_url_pattern)?,
            description_re: full_match(
                &definition,
                "description",
                definition.description_pattern,
            )?,
            definition,
        };

        debug!(prefix = %descriptor.key_prefix, "Compiled backend descriptor");
        Ok(descriptor)
    }

    pub fn service_name(&self) -> &'static str {
        self.definition.service_name
    }

    pub fn display_name(&self) -> &'static str {
        self.definition.display_name
    }

    /// The key prefix every preference of this backend starts with.
    pub fn namespace(&self) -> &str {
        &self.key_prefix
    }

    /// Fully-qualified preference key for one of the backend's own suffixes.
    ///
    /// Only pass suffix constants from the backend definition, never user input.
    pub fn preference_key(&self, suffix: &str) -> String {
        format!("{}{}", self.key_prefix, suffix)
    }

    pub fn queries_key(&self) -> String {
        self.preference_key(self.definition.queries_suffix)
    }

    pub fn api_key_key(&self) -> String {
        self.preference_key(self.definition.api_key_suffix)
    }

    pub fn preference_keys(&self) -> Vec<String> {
        vec![self.queries_key(), self.api_key_key()]
    }

    pub fn owns_key(&self, key: &str) -> bool {
        self.preference_keys().iter().any(|owned| owned == key)
    }

    pub fn validate_api_key(&self, candidate: &str) -> bool {
        self.api_key_re.is_match(candidate)
    }

    pub fn validate_search_url(&self, candidate: &str) -> bool {
        self.search_url_re.is_match(candidate)
    }

    pub fn validate_description(&self, candidate: &str) -> bool {
        self.description_re.is_match(candidate)
    }

    /// URL the HTTP collaborator calls to check that `api_key` is live.
    /// The key is appended as-is.
    pub fn key_test_url(&self, api_key: &str) -> String {
        format!("{}{}", self.definition.key_test_endpoint, api_key)
    }
}

fn full_match(
    definition: &BackendDefinition,
    field: &'static str,
    pattern: &str,
) -> Result<Regex, DomainError> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| DomainError::InvalidPattern {
        backend: definition.service_name.to_string(),
        field,
        reason: e.to_string(),
    })
}
