// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod util;

use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use application::{ApiKeyVerifier, BackendRegistry, BackendSettings, KeyCheck};
use domain::BackendDescriptor;
use infrastructure::{AppConfig, HttpKeyProbe, TomlPreferenceStore};
use tracing::debug;
use crate::cli::args::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    // args may carry an API key, log only the routing flags
    debug!(
        backend = ?args.backend,
        store = ?args.store,
        config = ?args.config,
        "Starting wallfetch"
    );

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => AppConfig::default_path()?,
    };

    if let Command::InitConfig { force } = args.command {
        return init_config(&config_path, force);
    }

    let config = AppConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    debug!(?config, "Loaded configuration");

    let registry = BackendRegistry::builtin()?;
    // listing must work even when the configured backend is unknown
    if let Command::Backends = args.command {
        return list_backends(&registry);
    }

    let backend = args
        .backend
        .clone()
        .unwrap_or_else(|| config.defaults.backend.clone());
    let descriptor = registry.get(&backend)?;
    debug!(backend = descriptor.service_name(), "Selected backend");

    match args.command.clone() {
        Command::Backends => list_backends(&registry),
        Command::CheckKey { key, online } => {
            check_key(descriptor, &config, &key, online)?;
            println!("API key is valid");
            Ok(())
        }
        Command::SetKey { key, online } => {
            if online {
                check_key(descriptor, &config, &key, true)?;
            }
            let mut settings = open_settings(descriptor, &args, &config)?;
            settings.set_api_key(&key)?;
            println!("Stored API key for {}", descriptor.display_name());
            Ok(())
        }
        Command::ClearKey => {
            let mut settings = open_settings(descriptor, &args, &config)?;
            settings.clear_api_key()?;
            println!("Cleared API key for {}", descriptor.display_name());
            Ok(())
        }
        Command::CheckUrl { url } => {
            if !descriptor.validate_search_url(&url) {
                bail!("Not a {} search URL: {}", descriptor.display_name(), url);
            }
            println!("Search URL is valid");
            Ok(())
        }
        Command::CheckDescription { text } => {
            if !descriptor.validate_description(&text) {
                bail!("Description must be 5-150 characters without control characters");
            }
            println!("Description is valid");
            Ok(())
        }
        Command::AddQuery { url, description } => {
            let mut settings = open_settings(descriptor, &args, &config)?;
            let query = settings.add_query(&description, &url)?;
            println!("Saved \"{}\"", query.description);
            Ok(())
        }
        Command::ListQueries { json } => {
            let settings = open_settings(descriptor, &args, &config)?;
            let queries = settings.saved_queries()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&queries)?);
            } else if queries.is_empty() {
                println!("No saved queries for {}", descriptor.display_name());
            } else {
                for (index, query) in queries.iter().enumerate() {
                    println!("{}\t{}\t{}", index, query.description, query.url);
                }
            }
            Ok(())
        }
        Command::RemoveQuery { index } => {
            let mut settings = open_settings(descriptor, &args, &config)?;
            let removed = settings.remove_query(index)?;
            println!("Removed \"{}\"", removed.description);
            Ok(())
        }
        Command::InitConfig { force } => init_config(&config_path, force),
    }
}

pub fn find_store_path(args: &Args, config: &AppConfig) -> Result<PathBuf> {
    if let Some(path) = &args.store {
        return Ok(path.clone());
    }
    match config.store.path() {
        Some(path) => Ok(path),
        None => TomlPreferenceStore::default_path(),
    }
}

fn open_settings<'a>(
    descriptor: &'a BackendDescriptor,
    args: &Args,
    config: &AppConfig,
) -> Result<BackendSettings<'a, TomlPreferenceStore>> {
    let path = find_store_path(args, config)?;
    let store = TomlPreferenceStore::open(&path)?;
    Ok(BackendSettings::new(descriptor, store))
}

fn check_key(
    descriptor: &BackendDescriptor,
    config: &AppConfig,
    key: &str,
    online: bool,
) -> Result<()> {
    if !descriptor.validate_api_key(key) {
        bail!("API key has an invalid format for {}", descriptor.display_name());
    }
    if !online {
        return Ok(());
    }

    let probe = HttpKeyProbe::new(config.network.timeout())?;
    match ApiKeyVerifier::new(descriptor, probe).verify(key) {
        KeyCheck::Accepted => Ok(()),
        KeyCheck::Malformed => bail!("API key has an invalid format"),
        KeyCheck::Rejected(status) => {
            bail!("{} rejected the API key (HTTP {})", descriptor.display_name(), status)
        }
        KeyCheck::Unreachable(reason) => {
            bail!("Could not reach {}: {}", descriptor.display_name(), reason)
        }
    }
}

fn list_backends(registry: &BackendRegistry) -> Result<()> {
    for descriptor in registry.iter() {
        println!(
            "{} ({})\t{}",
            descriptor.service_name(),
            descriptor.display_name(),
            descriptor.preference_keys().join(", ")
        );
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    AppConfig::create_default(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
