use anyhow::{Context, Result};
use std::path::PathBuf;
use tempfile::TempDir;
use wallfetch::infrastructure::TomlPreferenceStore;

pub const VALID_KEY: &str = "a1b2c3d4e5f6g7h8i9j0k1l2m3n4o5p6";

/// Temporary directory holding a config file and a preference store
#[allow(dead_code)]
pub struct TestWorkspace {
    _temp_dir: TempDir,
    pub config_path: PathBuf,
    pub store_path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let config_path = temp_dir.path().join("config.toml");
        let store_path = temp_dir.path().join("preferences.toml");

        Ok(Self {
            _temp_dir: temp_dir,
            config_path,
            store_path,
        })
    }

    /// Command line with --config and --store pointing into the workspace
    #[allow(dead_code)]
    pub fn argv(&self, command: &[&str]) -> Vec<String> {
        let mut argv = vec![
            "wallfetch".to_string(),
            "--config".to_string(),
            self.config_path.display().to_string(),
            "--store".to_string(),
            self.store_path.display().to_string(),
        ];
        argv.extend(command.iter().map(|s| s.to_string()));
        argv
    }

    #[allow(dead_code)]
    pub fn open_store(&self) -> Result<TomlPreferenceStore> {
        TomlPreferenceStore::open(&self.store_path)
    }
}
