//! User configuration loaded from `config.toml`.

use crate::session::{AngleMode, HISTORY_CAPACITY};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "zcalc";
const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Angle mode a keypad session starts in.
    pub angle_mode: AngleMode,
    /// Start the keypad with the scientific keys shown.
    pub scientific_mode: bool,
    /// Number of history records shown under the keypad display.
    pub history_preview: usize,
    /// Copy every `=` result to the clipboard.
    pub copy_results: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Degrees,
            scientific_mode: true,
            history_preview: 5,
            copy_results: false,
        }
    }
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/zcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    tracing::warn!("no config directory available, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read config {}", path.display()));
            }
        };

        Self::parse(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;
        config.history_preview = config.history_preview.min(HISTORY_CAPACITY);
        Ok(config)
    }
}
