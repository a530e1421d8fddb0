//! Menu preferences remembered between sessions.
//!
//! Purely advisory: values are clamped into range on read and the engine
//! re-validates whatever [`PlayerPreferences::to_config`] produces.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::pairing_engine::{
    config::{GameConfig, DEFAULT_ROWS, DEFAULT_TARGET_PAIRS, MAX_ROWS, MAX_TARGET_PAIRS},
    models::{Category, WordSelector},
    vocabulary::MAX_LEVEL,
};

const FILE_NAME: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerPreferences {
    #[serde(rename = "pairTarget")]
    pub target_pairs: u32,
    #[serde(rename = "rowNumber")]
    pub rows: usize,
    pub level: u32,
    /// When non-empty, wins over `level`.
    pub categories: Vec<Category>,
}

impl Default for PlayerPreferences {
    fn default() -> Self {
        Self {
            target_pairs: DEFAULT_TARGET_PAIRS,
            rows: DEFAULT_ROWS,
            level: 1,
            categories: Vec::new(),
        }
    }
}

impl PlayerPreferences {
    /// Load preferences from the standard location.
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load preferences from `path`; a missing or unreadable file gives defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Self>(&content) {
                Ok(prefs) => prefs.clamped(),
                Err(e) => {
                    warn!("Ignoring unreadable preferences {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save preferences to the standard location.
    pub fn save(&self) -> std::io::Result<()> {
        self.save_to(Self::default_path())
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("pair-words"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(FILE_NAME)
    }

    /// Replace out-of-range values with their defaults.
    pub fn clamped(self) -> Self {
        let defaults = Self::default();
        Self {
            target_pairs: in_range(self.target_pairs, 1, MAX_TARGET_PAIRS, defaults.target_pairs),
            rows: in_range(self.rows, 1, MAX_ROWS, defaults.rows),
            level: in_range(self.level, 1, MAX_LEVEL, defaults.level),
            categories: self.categories,
        }
    }

    pub fn selector(&self) -> WordSelector {
        if self.categories.is_empty() {
            WordSelector::Level(self.level)
        } else {
            WordSelector::Categories(self.categories.clone())
        }
    }

    pub fn to_config(&self) -> GameConfig {
        GameConfig::new(self.selector(), self.target_pairs, self.rows)
    }
}

fn in_range<T: PartialOrd>(value: T, min: T, max: T, fallback: T) -> T {
    if value >= min && value <= max { value } else { fallback }
}
