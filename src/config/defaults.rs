use super::{Config, GitConfig, LocalConfig, RemoteConfig};
use std::path::PathBuf;

pub const DEFAULT_PROTECTED_BRANCHES: &[&str] = &["main", "master", "develop"];

pub fn default_config() -> Config {
    Config {
        git: default_git_config(),
        local: default_local_config(),
        remote: default_remote_config(),
    }
}

pub fn default_git_config() -> GitConfig {
    GitConfig {
        protected_branches: DEFAULT_PROTECTED_BRANCHES
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

pub fn default_local_config() -> LocalConfig {
    LocalConfig {
        age_threshold: "2w".to_string(),
    }
}

pub fn default_remote_config() -> RemoteConfig {
    RemoteConfig {
        age_threshold: "4w".to_string(),
        remote_name: "origin".to_string(),
    }
}

pub fn get_config_file_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "shear")
        .map(|dirs| dirs.config_dir().join("config.json"))
}
