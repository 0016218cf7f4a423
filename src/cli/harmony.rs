//! Harmony command: derive five related colors from a base.

use crate::cli::common::{build_rng, parse_color, parse_format, parse_harmony, CliError, CliResult};
use crate::export::{format_palette, ExportFormat};
use crate::harmony::{generate_harmony, HarmonyStrategy};
use crate::models::{Color, Palette};
use clap::Args;
use serde::Serialize;

/// Generate a color harmony from a base color
#[derive(Debug, Clone, Args)]
pub struct HarmonyArgs {
    /// Base color (#RRGGBB or RRGGBB)
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Harmony strategy (monochromatic, analogous, complementary, triadic,
    /// tetradic, split-complementary, random)
    #[arg(short, long, value_name = "STRATEGY", default_value = "complementary")]
    pub strategy: String,

    /// Output notation (hex, rgb, hsl, css-variables)
    #[arg(short, long, value_name = "FORMAT", default_value = "hex")]
    pub format: String,

    /// Seed for the random strategy
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct HarmonyResult {
    base: Color,
    strategy: HarmonyStrategy,
    colors: Vec<Color>,
}

impl HarmonyArgs {
    /// Execute the harmony command
    pub fn execute(&self) -> CliResult<()> {
        let base = parse_color(&self.base)?;
        let strategy = parse_harmony(&self.strategy)?;
        let format = parse_format(&self.format)?;
        let mut rng = build_rng(self.seed);

        let colors = generate_harmony(base, strategy, &mut rng);

        if self.json {
            let result = HarmonyResult {
                base,
                strategy,
                colors: colors.to_vec(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{}", render(&colors, format)?);
        }

        Ok(())
    }
}

/// Renders harmony colors through the palette formatter so css-variables
/// numbering matches what a palette holding them would produce.
fn render(colors: &[Color], format: ExportFormat) -> CliResult<String> {
    let palette = Palette::from_colors(colors.iter().copied())
        .ok_or_else(|| CliError::validation("Harmony produced an unexpected number of colors"))?;
    Ok(format_palette(&palette, format))
}
