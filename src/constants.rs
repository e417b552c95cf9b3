// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose and
// usage context.

/// Directory below the platform config dir holding all wallfetch files.
///
/// Used in: `infrastructure/config.rs`, `infrastructure/toml_store.rs`
pub const APP_DIR_NAME: &str = "wallfetch";

/// File name of the TOML configuration.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name of the preference store when no explicit path is configured.
///
/// Used in: `infrastructure/toml_store.rs`
pub const PREFERENCES_FILE_NAME: &str = "preferences.toml";

/// Backend used when neither `--backend` nor the config file names one.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_BACKEND: &str = "wallhaven";

/// Upper bound in seconds for one API key probe.
///
/// The probe is a single blocking GET without retries; a slow or dead
/// endpoint must not hang the CLI.
///
/// Used in: `infrastructure/config.rs`, `infrastructure/http_probe.rs`
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with key probes.
///
/// Used in: `infrastructure/http_probe.rs`
pub const USER_AGENT: &str = concat!("wallfetch/", env!("CARGO_PKG_VERSION"));
