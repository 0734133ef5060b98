// src/config/mod.rs
//! User configuration, loaded from the platform config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::ui::icons::IconSet;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub picker: PickerConfig,
    pub ui: UiConfig,
}

/// Picker behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PickerConfig {
    /// Directory to start in when the caller does not supply one
    pub start_dir: Option<PathBuf>,
    /// Drop plain files from listings
    pub folders_only: bool,
}

/// UI configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UiConfig {
    /// "unicode" or "ascii"
    pub icons: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            picker: PickerConfig {
                start_dir: None,
                folders_only: false,
            },
            ui: UiConfig {
                icons: "unicode".to_string(),
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "dirpick") {
            return Some(proj_dirs.config_dir().join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if it is missing or
    /// unparseable. Never fatal.
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(err) => {
                            warn!(path = %path.display(), %err, "failed to parse config, using defaults");
                        }
                    },
                    Err(err) => {
                        warn!(path = %path.display(), %err, "failed to read config, using defaults");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The glyph set selected by `ui.icons`; anything but "ascii" means the
    /// default nerd-font set.
    pub fn icon_set(&self) -> IconSet {
        if self.ui.icons.eq_ignore_ascii_case("ascii") {
            IconSet::Ascii
        } else {
            IconSet::Unicode
        }
    }
}
