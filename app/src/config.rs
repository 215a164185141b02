use directories::ProjectDirs;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::CliArgs;

pub const DEFAULT_NODE_TYPE: &str = "prompt_chain";

/// Settings read from `config.toml` in the user's config directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Fixed seed for reproducible output. A fresh seed is drawn when unset.
    pub seed: Option<u64>,
    pub node_type: String,
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            node_type: DEFAULT_NODE_TYPE.to_string(),
            pretty: false,
        }
    }
}

impl CliConfig {
    /// Command-line flags win over the file.
    pub fn apply_args(mut self, args: &CliArgs) -> Self {
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if let Some(node_type) = &args.node_type {
            self.node_type = node_type.clone();
        }
        self.pretty |= args.pretty;
        self
    }
}

fn get_config_path() -> Option<PathBuf> {
    let proj_dirs = ProjectDirs::from("dev", "promptchain", "prompt_chain")?;
    Some(proj_dirs.config_dir().join("config.toml"))
}

pub fn save_config(config: &CliConfig) {
    let Some(path) = get_config_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            error!("Failed to create config directory: {}", e);
            return;
        }
    }
    match toml::to_string_pretty(config) {
        Ok(toml_str) => {
            if let Err(e) = fs::write(&path, toml_str) {
                error!("Failed to write config file: {}", e);
            } else {
                info!("Config saved to {}", path.display());
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

pub fn load_config() -> CliConfig {
    if let Some(path) = get_config_path() {
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(toml_str) => return parse_config(&toml_str),
                Err(e) => {
                    warn!("Failed to read config file, using defaults: {}", e);
                }
            }
        }
    }
    CliConfig::default()
}

fn parse_config(toml_str: &str) -> CliConfig {
    match toml::from_str(toml_str) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse config file, using defaults: {}", e);
            CliConfig::default()
        }
    }
}
