use super::defaults::{default_config, get_config_file_path};
use super::Config;
use crate::utils::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigManager;

impl ConfigManager {
    /// Loads the first config file found, falling back to defaults when no
    /// file exists or a file cannot be read. Loading never fails the run: a
    /// cleanup tool should work out of the box in any repository.
    pub fn load_or_default() -> Config {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path).unwrap_or_else(|_| default_config()),
            None => default_config(),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Checks the working directory first, then the platform config dir.
    fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from(".shear.json");
        if local.exists() {
            return Some(local);
        }

        get_config_file_path().filter(|path| path.exists())
    }
}
