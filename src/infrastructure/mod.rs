// src/infrastructure/mod.rs
pub mod config;
pub mod http_probe;
pub mod toml_store;

pub use config::AppConfig;
pub use http_probe::HttpKeyProbe;
pub use toml_store::TomlPreferenceStore;
