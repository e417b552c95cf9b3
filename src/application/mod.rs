// src/application/mod.rs
pub mod backend_settings;
pub mod key_verifier;
pub mod preferences;
pub mod registry;

pub use backend_settings::BackendSettings;
pub use key_verifier::{ApiKeyVerifier, KeyCheck, KeyProbe};
pub use preferences::PreferenceStore;
pub use registry::BackendRegistry;
