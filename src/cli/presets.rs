//! Presets listing command.

use crate::cli::common::{CliError, CliResult};
use crate::models::PresetLibrary;
use clap::Args;

/// List the built-in preset palettes
#[derive(Debug, Clone, Args)]
pub struct PresetsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PresetsArgs {
    /// Execute the presets command
    pub fn execute(&self) -> CliResult<()> {
        let library = PresetLibrary::load()
            .map_err(|e| CliError::io(format!("Failed to load presets: {e}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&library.presets)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        let width = library.names().map(str::len).max().unwrap_or(0);
        for preset in &library.presets {
            let colors: Vec<String> = preset.colors.iter().map(|c| c.to_hex_upper()).collect();
            println!("{:<width$}  {}", preset.name, colors.join(" "));
        }

        Ok(())
    }
}
