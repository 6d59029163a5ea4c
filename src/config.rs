//! Configuration file support for persistent defaults.
//!
//! The CLI reads optional defaults from a TOML file located at
//! `~/.config/bytefmt/config.toml` (or the platform-specific equivalent).
//! Values from the file act as defaults that CLI arguments can override;
//! the precedence order is **CLI argument > config file > built-in default**.
//!
//! # Example config
//!
//! ```toml
//! # Unit base: 2 (KB = 1024 bytes) or 10 (KB = 1000 bytes)
//! base = 10
//!
//! # Locale used for numeral separators
//! locale = "de-DE"
//!
//! # Default number of decimals when formatting
//! decimals = 2
//!
//! # Spell units out ("Kilobytes" instead of "KB")
//! long = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file contents.
///
/// All fields are `Option<T>` so that only the values actually present in
/// the file participate in layering.
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Default unit base (2 or 10).
    pub base: Option<u32>,

    /// Default locale tag (e.g. `"de-DE"`).
    pub locale: Option<String>,

    /// Default number of decimals when formatting.
    pub decimals: Option<u32>,

    /// Default to the long unit form when formatting.
    pub long: Option<bool>,
}

impl FileConfig {
    /// The path of the configuration file, or `None` when the platform has
    /// no config directory.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bytefmt").join("config.toml"))
    }

    /// Load the configuration file.
    ///
    /// A missing file (or an undeterminable config directory) yields the
    /// defaults; only an unreadable or malformed file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and parse a configuration file at an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
