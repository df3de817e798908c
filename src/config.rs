//! UI Configuration
//!
//! Window geometry, slider defaults, name length, the character catalog and
//! the credits text. Everything has a built-in default matching the reference
//! layout, so the config file is optional and may override any subset of
//! fields.
//!
//! # Lookup order
//!
//! 1. `$PIXEL_MENU_CONFIG` (explicit path)
//! 2. `<user config dir>/pixel-menu/ui.json`
//! 3. `assets/config/ui.json`
//! 4. built-in defaults
//!
//! The file is only ever read. Nothing is written back.

use crate::error::ConfigError;
use crate::name_buffer::MAX_NAME_LEN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "PIXEL_MENU_CONFIG";

/// Bundled config path, relative to the working directory
pub const ASSET_CONFIG_PATH: &str = "assets/config/ui.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Backbuffer width in pixels
    pub base_width: u32,
    /// Backbuffer height in pixels
    pub base_height: u32,
    pub min_scale: u32,
    pub max_scale: u32,
    /// Used when the monitor size can't be detected
    pub fallback_scale: u32,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Pixel RPG UI Demo".to_string(),
            base_width: 400,
            base_height: 225,
            min_scale: 2,
            max_scale: 6,
            fallback_scale: 3,
            target_fps: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub initial: f64,
    pub step: f64,
}

/// One entry of the character catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDef {
    pub name: String,
    /// Body color as RGB
    pub body: [u8; 3],
}

impl CharacterDef {
    pub fn new(name: &str, body: [u8; 3]) -> Self {
        CharacterDef {
            name: name.to_string(),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window: WindowConfig,
    pub volume: SliderConfig,
    pub brightness: SliderConfig,
    pub max_name_len: usize,
    pub characters: Vec<CharacterDef>,
    pub credits: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            window: WindowConfig::default(),
            volume: SliderConfig {
                initial: 0.7,
                step: 0.05,
            },
            brightness: SliderConfig {
                initial: 0.6,
                step: 0.05,
            },
            max_name_len: MAX_NAME_LEN,
            characters: vec![
                CharacterDef::new("Sprout", [90, 200, 90]),
                CharacterDef::new("Ember", [210, 90, 60]),
                CharacterDef::new("Aqua", [70, 120, 220]),
            ],
            credits: [
                "SUBMITTED TO: SIR SEAN POLICARPIO",
                "",
                "Blablablabla about stress and strain.",
                "We wanted it to be interactive while",
                "still providing learning and enjoyment.",
                "",
                "MEMBERS:",
                "SUMAMPONG - PROGRAMMER",
                "AGUANTA - PROGRAMMER",
                "MAHUSAY - RESEARCHER",
                "DABON - ETC. ETC.",
            ]
            .iter()
            .map(|line| line.to_string())
            .collect(),
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl UiConfig {
    /// Loads and validates a config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: UiConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the first existing file from the standard lookup order
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_first(&candidate_paths())
    }

    /// Loads the first existing path in `candidates`, or defaults if none exist.
    ///
    /// A file that exists but is malformed is an error, not a fallthrough.
    pub fn load_first(candidates: &[PathBuf]) -> Result<(Self, ConfigSource), ConfigError> {
        for path in candidates {
            if path.is_file() {
                let config = Self::load_from_file(path)?;
                return Ok((config, ConfigSource::File(path.clone())));
            }
            tracing::trace!(path = %path.display(), "no config file here");
        }
        Ok((Self::default(), ConfigSource::Defaults))
    }

    /// Checks the invariants the state machine and renderer rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.characters.is_empty() {
            return Err(ConfigError::Invalid(
                "character catalog must contain at least one entry".to_string(),
            ));
        }
        if self.max_name_len == 0 || self.max_name_len > MAX_NAME_LEN {
            return Err(ConfigError::Invalid(format!(
                "max_name_len {} is outside 1..={}",
                self.max_name_len, MAX_NAME_LEN
            )));
        }
        let window = &self.window;
        if window.base_width == 0 || window.base_height == 0 {
            return Err(ConfigError::Invalid("base resolution must be non-zero".to_string()));
        }
        if window.min_scale == 0 || window.min_scale > window.max_scale {
            return Err(ConfigError::Invalid(format!(
                "scale range {}..={} is empty",
                window.min_scale, window.max_scale
            )));
        }
        if window.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be non-zero".to_string()));
        }
        for (name, slider) in [("volume", &self.volume), ("brightness", &self.brightness)] {
            if !(0.0..=1.0).contains(&slider.initial) {
                return Err(ConfigError::Invalid(format!(
                    "{} initial value {} is outside 0..=1",
                    name, slider.initial
                )));
            }
            if slider.step.is_nan() || slider.step <= 0.0 {
                return Err(ConfigError::Invalid(format!("{} step must be positive", name)));
            }
        }
        Ok(())
    }
}

/// Config file locations in priority order
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR) {
        paths.push(PathBuf::from(explicit));
    }
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("pixel-menu").join("ui.json"));
    }
    paths.push(PathBuf::from(ASSET_CONFIG_PATH));
    paths
}
