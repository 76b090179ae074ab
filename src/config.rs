//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::theme::ThemeMode;

/// Token table extensions the loader understands.
pub const TOKEN_TABLE_EXTENSIONS: &[&str] = &["json", "json5", "js", "mjs"];

/// Theme mode used when nothing has been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InitialMode {
    /// Start in light mode
    #[default]
    Light,
    /// Start in dark mode
    Dark,
    /// Follow the OS preference, light when it cannot be detected
    #[serde(alias = "auto")]
    System,
}

impl InitialMode {
    /// Resolves the preference to a concrete mode.
    #[must_use]
    pub fn resolve(self) -> ThemeMode {
        match self {
            Self::Light => ThemeMode::Light,
            Self::Dark => ThemeMode::Dark,
            Self::System => ThemeMode::detect_system().unwrap_or_default(),
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl std::str::FromStr for InitialMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" | "auto" => Ok(Self::System),
            other => Err(format!(
                "invalid initial mode '{other}' (expected light, dark or system)"
            )),
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathConfig {
    /// Generated token table to resolve instead of the built-in one
    pub token_table: Option<PathBuf>,
    /// Directory holding the persisted theme mode (defaults to the config directory)
    pub state_dir: Option<PathBuf>,
}

/// Token build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Where `tokens build` writes its files when `--out` is not given
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("build"),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme mode on first run
    pub initial_mode: InitialMode,
    /// Brand preset key shown by default
    pub brand: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_mode: InitialMode::default(),
            brand: "platform".to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/PlatformTokens/config.toml`
/// - macOS: `~/Library/Application Support/PlatformTokens/config.toml`
/// - Windows: `%APPDATA%\PlatformTokens\config.toml`
///
/// Setting `PLATFORM_TOKENS_CONFIG_DIR` replaces the directory.
///
/// # Validation
///
/// - `token_table`, when set, must exist and have a supported extension
/// - `brand` must be a non-empty kebab-case key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Token build settings
    pub build: BuildConfig,
    /// UI preferences
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Honors `PLATFORM_TOKENS_CONFIG_DIR`, otherwise:
    /// - Linux: `~/.config/PlatformTokens/`
    /// - macOS: `~/Library/Application Support/PlatformTokens/`
    /// - Windows: `%APPDATA%\PlatformTokens\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory the theme store persists into.
    pub fn state_dir(&self) -> Result<PathBuf> {
        match &self.paths.state_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::config_dir(),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config = Self::load_unvalidated()?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config file without validating it, so stale values can be
    /// edited before the result is checked.
    pub fn load_unvalidated() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::read_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config = Self::read_from(config_path)?;
        config.validate()?;
        Ok(config)
    }

    fn read_from(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&config_dir.join("config.toml"))
    }

    /// Writes configuration to an explicit file using atomic write.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(table) = &self.paths.token_table {
            if !table.exists() {
                anyhow::bail!("Token table does not exist: {}", table.display());
            }

            let extension = table
                .extension()
                .and_then(|ext| ext.to_str())
                .map(str::to_ascii_lowercase)
                .unwrap_or_default();
            if !TOKEN_TABLE_EXTENSIONS.contains(&extension.as_str()) {
                anyhow::bail!(
                    "Unsupported token table format: {} (expected one of: {})",
                    table.display(),
                    TOKEN_TABLE_EXTENSIONS.join(", ")
                );
            }
        }

        let brand = &self.ui.brand;
        let is_kebab = brand.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        });
        if !is_kebab {
            anyhow::bail!("Invalid brand key '{brand}': expected lowercase kebab-case");
        }

        Ok(())
    }

    /// Sets the token table path with validation.
    pub fn set_token_table(&mut self, path: PathBuf) -> Result<()> {
        self.paths.token_table = Some(path);
        self.validate()
    }
}
