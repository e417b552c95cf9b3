// src/application/key_verifier.rs
use crate::domain::{BackendDescriptor, DomainError};
use tracing::{debug, info, warn};

/// Performs the HTTP request behind an API key check.
pub trait KeyProbe {
    /// Status code returned for a GET of `url`, or `DomainError::Network`
    /// when no response was received.
    fn probe(&self, url: &str) -> Result<u16, DomainError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCheck {
    /// Key does not have the backend's format; nothing was sent.
    Malformed,
    Accepted,
    Rejected(u16),
    Unreachable(String),
}

impl KeyCheck {
    pub fn is_accepted(&self) -> bool {
        matches!(self, KeyCheck::Accepted)
    }
}

pub struct ApiKeyVerifier<'a, P: KeyProbe> {
    descriptor: &'a BackendDescriptor,
    probe: P,
}

impl<'a, P: KeyProbe> ApiKeyVerifier<'a, P> {
    pub fn new(descriptor: &'a BackendDescriptor, probe: P) -> Self {
        Self { descriptor, probe }
    }

    pub fn verify(&self, api_key: &str) -> KeyCheck {
        let backend = self.descriptor.service_name();
        if !self.descriptor.validate_api_key(api_key) {
            debug!(backend, "Skipping probe for malformed key");
            return KeyCheck::Malformed;
        }

        match self.probe.probe(&self.descriptor.key_test_url(api_key)) {
            Ok(status) if (200..300).contains(&status) => {
                info!(backend, status, "API key accepted");
                KeyCheck::Accepted
            }
            Ok(status) => {
                warn!(backend, status, "API key rejected");
                KeyCheck::Rejected(status)
            }
            Err(e) => {
                warn!(backend, error = %e, "Key test endpoint unreachable");
                KeyCheck::Unreachable(e.to_string())
            }
        }
    }
}
