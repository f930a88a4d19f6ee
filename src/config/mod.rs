use serde::{Deserialize, Serialize};

pub mod age;
pub mod defaults;
pub mod manager;

pub use age::parse_age_threshold;
pub use manager::ConfigManager;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "defaults::default_git_config")]
    pub git: GitConfig,
    #[serde(default = "defaults::default_local_config")]
    pub local: LocalConfig,
    #[serde(default = "defaults::default_remote_config")]
    pub remote: RemoteConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GitConfig {
    /// Branches that are never offered for deletion, matched on the
    /// unqualified name.
    pub protected_branches: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LocalConfig {
    pub age_threshold: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RemoteConfig {
    pub age_threshold: String,
    pub remote_name: String,
}

impl Config {
    pub fn load_or_default() -> Self {
        ConfigManager::load_or_default()
    }
}
