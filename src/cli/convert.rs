//! Color conversion command.

use crate::cli::common::{parse_color, CliError, CliResult};
use crate::models::{Hsl, Rgb};
use clap::Args;
use serde::Serialize;

/// Show a color as hex, RGB and HSL
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Color to convert (#RRGGBB or RRGGBB)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ConvertResult {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let color = parse_color(&self.color)?;

        let result = ConvertResult {
            hex: color.to_hex(),
            rgb: color.rgb(),
            hsl: color.hsl(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Hex: {}", result.hex);
            println!("RGB: {}", result.rgb);
            println!("HSL: {}", result.hsl);
        }

        Ok(())
    }
}
