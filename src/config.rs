//! Configuration loading
//!
//! Reads `~/.config/chisha/config.toml`. A missing file means defaults; a
//! broken file also means defaults, plus a warning for the UI to show.

mod types;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use types::{
    AiConfig, AiProviderType, Config, DEFAULT_GEMINI_MODEL, GeminiConfig, SoundConfig,
    StorageConfig,
};

use crate::error::ChishaError;

const CONFIG_DIR: &str = "chisha";
const CONFIG_FILE: &str = "config.toml";

/// Environment variables consulted for the Gemini key, in order
const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Loaded configuration plus an optional warning to surface
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Load from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return ConfigResult::default(),
        },
    };

    match read_config(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Config error, using defaults: {}", e)),
            }
        }
    }
}

/// Parse one config file; a missing file is not an error
pub fn read_config(path: &Path) -> Result<Config, ChishaError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(e.into()),
    };

    parse_config(&contents).map_err(|message| ChishaError::InvalidConfig {
        path: path.display().to_string(),
        message,
    })
}

pub fn parse_config(contents: &str) -> Result<Config, String> {
    toml::from_str(contents).map_err(|e| e.message().to_string())
}

impl AiConfig {
    /// Fill a missing API key from the environment
    pub fn with_env_api_key(mut self) -> Self {
        self.apply_api_key_from(|name| std::env::var(name).ok());
        self
    }

    fn apply_api_key_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let has_key = self
            .gemini
            .api_key
            .as_ref()
            .is_some_and(|k| !k.trim().is_empty());
        if has_key {
            return;
        }
        self.gemini.api_key = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|k| !k.trim().is_empty());
    }
}
