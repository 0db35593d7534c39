use crate::error::{Result, SnipzError};
use crate::lang::Language;
use crate::link::Location;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ORIGIN: &str = "http://localhost";
const DEFAULT_PATH: &str = "/";

pub const KEYS: [&str; 3] = ["origin", "path", "default-lang"];

/// Configuration for snipz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Origin direct links are built on (e.g. "https://snips.example.com")
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Path direct links are built on
    #[serde(default = "default_path")]
    pub path: String,

    /// Language preselected for new snippets
    #[serde(default = "default_lang")]
    pub default_lang: String,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

fn default_lang() -> String {
    Language::default().tag().to_string()
}

impl Default for SnipzConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            path: default_path(),
            default_lang: default_lang(),
        }
    }
}

impl SnipzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SnipzError::Io)?;
        let config: SnipzConfig =
            serde_json::from_str(&content).map_err(SnipzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SnipzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SnipzError::Serialization)?;
        fs::write(config_path, content).map_err(SnipzError::Io)?;
        Ok(())
    }

    /// Location direct links are built from.
    pub fn base_location(&self) -> Location {
        Location::new(self.origin.clone(), self.path.clone())
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "origin" => Ok(&self.origin),
            "path" => Ok(&self.path),
            "default-lang" => Ok(&self.default_lang),
            other => Err(SnipzError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "origin" => self.origin = value.trim_end_matches('/').to_string(),
            "path" => {
                // Path always starts with a slash
                if value.starts_with('/') {
                    self.path = value.to_string();
                } else {
                    self.path = format!("/{}", value);
                }
            }
            "default-lang" => {
                let lang: Language = value
                    .parse()
                    .map_err(|e: crate::lang::UnknownLanguage| SnipzError::Config(e.to_string()))?;
                self.default_lang = lang.tag().to_string();
            }
            other => {
                return Err(SnipzError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }
}
