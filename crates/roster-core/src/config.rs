//! Configuration types for roster.
//!
//! [`Config::load`] reads `~/.config/roster/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit path instead. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use crate::display::DEFAULT_MAX_COLUMN_WIDTH;
use crate::layout::{ColumnLayout, LayoutError};
use crate::normalizer::Normalizer;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[display]
max_column_width = 30
striped_rows     = true
theme            = "default"

# Uncomment to replace the built-in "hr-roster" v1 column layout.
#
# [layout]
# name            = "hr-roster"
# version         = 2
# index_columns   = ["Unnamed: 0"]
# sequence_column = "No."
#
# [[layout.renames]]
# placeholder = "Unnamed: 2"
# field       = "Name"
#
# [[layout.renames]]
# placeholder = "Unnamed: 6"
# field       = "Years Experience"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/roster/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    /// Column layout override; the built-in v1 layout when absent.
    #[serde(default)]
    pub layout: Option<ColumnLayout>,
}

/// `[display]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_max_column_width")]
    pub max_column_width: usize,
    #[serde(default = "default_striped_rows")]
    pub striped_rows: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_max_column_width() -> usize { DEFAULT_MAX_COLUMN_WIDTH }
fn default_striped_rows() -> bool { true }
fn default_theme() -> String { "default".to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_column_width: default_max_column_width(),
            striped_rows: default_striped_rows(),
            theme: default_theme(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/roster/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load from an explicit path, layered on top of the built-in defaults.
    /// The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        cfg.column_layout()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// The configured column layout, validated.
    pub fn column_layout(&self) -> Result<ColumnLayout, LayoutError> {
        let layout = self.layout.clone().unwrap_or_default();
        layout.validate()?;
        Ok(layout)
    }

    /// A [`Normalizer`] bound to the configured layout.
    pub fn normalizer(&self) -> Result<Normalizer, LayoutError> {
        Ok(Normalizer::new(self.column_layout()?))
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("roster")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
