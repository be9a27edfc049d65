//! Session configuration, read from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entities::{Hero, Inventory, InventoryItem, STARTING_HEALTH};

/// Story document used when neither the config nor the command line name one.
pub const DEFAULT_STORY_PATH: &str = "story.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything a session needs before the first hint is shown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Path of the story document.
    pub story_path: PathBuf,

    /// Hero health at the start of the session.
    pub starting_health: i32,

    /// Items the hero carries from the start, in order.
    pub starting_inventory: Vec<InventoryItem>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            story_path: PathBuf::from(DEFAULT_STORY_PATH),
            starting_health: STARTING_HEALTH,
            starting_inventory: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Set the story path.
    pub fn with_story_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.story_path = path.into();
        self
    }

    pub fn hero(&self) -> Hero {
        Hero::with_health(self.starting_health)
    }

    /// A fresh inventory holding the starting items, each with its own id.
    pub fn inventory(&self) -> Inventory {
        self.starting_inventory
            .iter()
            .cloned()
            .map(|mut item| {
                item.id = crate::entities::ItemId::new();
                item
            })
            .collect()
    }
}
