//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the user's palette
//! defaults in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR_ENV, DEFAULT_BASE_COLOR, DEFAULT_PALETTE_COLORS, MAX_PALETTE_SIZE,
    MIN_PALETTE_SIZE,
};
use crate::export::ExportFormat;
use crate::harmony::HarmonyStrategy;
use crate::models::{Color, Palette, PaletteSession};

/// Starting palette settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Harmony strategy used for regeneration.
    pub harmony: HarmonyStrategy,
    /// Number of slots in a new palette (2-10).
    pub size: usize,
    /// Base color before the first regeneration.
    pub base_color: Color,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            harmony: HarmonyStrategy::default(),
            size: DEFAULT_PALETTE_COLORS.len(),
            base_color: Color::from_hex(DEFAULT_BASE_COLOR).unwrap_or(Color::new(59, 130, 246)),
        }
    }
}

/// Export preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Notation used when printing or copying a palette.
    pub format: ExportFormat,
}

/// Application configuration.
///
/// # File Location
///
/// - `$HUEKIT_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/huekit/config.toml`
/// - macOS: `~/Library/Application Support/huekit/config.toml`
/// - Windows: `%APPDATA%\huekit\config.toml`
///
/// # Validation
///
/// - `palette.size` must be within 2-10
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Starting palette settings
    pub palette: PaletteConfig,
    /// Export preferences
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Honors `HUEKIT_CONFIG_DIR`, otherwise the platform config directory
    /// joined with `huekit`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("huekit");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", config_path.display());

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::debug!("Saved configuration to {}", config_path.display());
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `palette.size` is within the allowed palette bounds
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&self.palette.size) {
            anyhow::bail!(
                "Palette size {} is out of range. Must be between {} and {}",
                self.palette.size,
                MIN_PALETTE_SIZE,
                MAX_PALETTE_SIZE
            );
        }

        Ok(())
    }

    /// Starts a session from these defaults.
    pub fn new_session<R: Rng + ?Sized>(&self, rng: &mut R) -> PaletteSession {
        PaletteSession::new(
            Palette::with_size(self.palette.size, rng),
            self.palette.harmony,
            self.palette.base_color,
            self.export.format,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.palette.harmony, HarmonyStrategy::Complementary);
        assert_eq!(config.palette.size, 5);
        assert_eq!(config.palette.base_color.to_hex(), "#3b82f6");
        assert_eq!(config.export.format, ExportFormat::Hex);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.palette.size = 1;
        assert!(config.validate().is_err());

        config.palette.size = 11;
        assert!(config.validate().is_err());

        config.palette.size = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.palette.harmony = HarmonyStrategy::SplitComplementary;
        config.palette.size = 7;
        config.palette.base_color = Color::new(16, 185, 129);
        config.export.format = ExportFormat::CssVariables;
        config.save_to(&config_file).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        assert!(content.contains("harmony = \"split-complementary\""));
        assert!(content.contains("base_color = \"#10b981\""));
        assert!(content.contains("format = \"css-variables\""));

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[palette]\nharmony = \"triadic\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.palette.harmony, HarmonyStrategy::Triadic);
        assert_eq!(loaded.palette.size, 5);
        assert_eq!(loaded.export.format, ExportFormat::Hex);
    }

    #[test]
    fn test_load_rejects_bad_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        fs::write(&config_file, "[palette]\nsize = 12\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());

        fs::write(&config_file, "[palette]\nbase_color = \"blue\"\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.palette.size = 0;
        assert!(config.save_to(&config_file).is_err());
        assert!(!config_file.exists());
    }

    #[test]
    fn test_new_session_uses_defaults() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut config = Config::new();
        config.palette.size = 3;
        config.palette.harmony = HarmonyStrategy::Tetradic;
        config.export.format = ExportFormat::Hsl;

        let session = config.new_session(&mut rng);
        assert_eq!(session.palette.len(), 3);
        assert_eq!(session.harmony, HarmonyStrategy::Tetradic);
        assert_eq!(session.export_format, ExportFormat::Hsl);
    }
}
