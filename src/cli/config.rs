//! Configuration management CLI commands.

use crate::cli::common::{parse_color, parse_format, parse_harmony, CliError, CliResult};
use crate::config::Config;
use crate::constants::{MAX_PALETTE_SIZE, MIN_PALETTE_SIZE};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Default harmony strategy
    #[arg(long, value_name = "STRATEGY")]
    harmony: Option<String>,

    /// Default palette size (2-10)
    #[arg(long, value_name = "N")]
    size: Option<usize>,

    /// Default base color
    #[arg(long, value_name = "COLOR")]
    base_color: Option<String>,

    /// Default export format (hex, rgb, hsl, css-variables)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    palette: PaletteOutput,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct PaletteOutput {
    harmony: String,
    size: usize,
    base_color: String,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    format: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path().map_err(|e| {
                    CliError::io(format!("Failed to resolve config path: {e}"))
                })?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {}", e)))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.harmony.is_none()
            && self.size.is_none()
            && self.base_color.is_none()
            && self.format.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --harmony, --size, --base-color, or --format",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|_| Config::default());

        if let Some(harmony) = &self.harmony {
            config.palette.harmony = parse_harmony(harmony)?;
        }

        if let Some(size) = self.size {
            if !(MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&size) {
                return Err(CliError::validation(format!(
                    "Invalid size {size}. Must be between {MIN_PALETTE_SIZE} and {MAX_PALETTE_SIZE}"
                )));
            }
            config.palette.size = size;
        }

        if let Some(color) = &self.base_color {
            config.palette.base_color = parse_color(color)?;
        }

        if let Some(format) = &self.format {
            config.export.format = parse_format(format)?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {}", e)))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        palette: PaletteOutput {
            harmony: config.palette.harmony.name().to_string(),
            size: config.palette.size,
            base_color: config.palette.base_color.to_hex(),
        },
        export: ExportOutput {
            format: config.export.format.name().to_string(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Huekit Configuration");
    println!("====================");
    println!();

    println!("Palette:");
    println!("  Harmony: {}", config.palette.harmony.label());
    println!("  Size: {}", config.palette.size);
    println!("  Base Color: {}", config.palette.base_color.to_hex_upper());
    println!();

    println!("Export:");
    println!("  Format: {}", config.export.format.name());
    println!();
}
