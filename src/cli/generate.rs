//! Generate command: build a palette in one shot.

use crate::cli::common::{
    build_rng, copy_to_clipboard, parse_color, parse_format, parse_harmony, parse_slot, CliError,
    CliResult,
};
use crate::config::Config;
use crate::constants::{MAX_PALETTE_SIZE, MIN_PALETTE_SIZE};
use crate::export::PaletteDocument;
use crate::models::{Palette, PaletteSession, PresetLibrary};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate a palette from a harmony, a preset or a base color
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Harmony strategy (defaults to the configured one)
    #[arg(long, value_name = "STRATEGY")]
    pub harmony: Option<String>,

    /// Number of colors, 2-10 (defaults to the configured size)
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Start from a built-in preset instead of regenerating
    #[arg(long, value_name = "NAME", conflicts_with = "base")]
    pub preset: Option<String>,

    /// Apply the harmony to this base color instead of a random one
    #[arg(long, value_name = "COLOR")]
    pub base: Option<String>,

    /// Slots (1-based) that keep their starting color
    #[arg(long, value_name = "SLOTS", value_delimiter = ',')]
    pub lock: Vec<String>,

    /// Seed for the random source
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Output notation (defaults to the configured one)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Write the palette document (JSON) to this file or directory
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Copy the formatted palette to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Print the palette document as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable configuration: {e:#}");
            Config::default()
        });
        let mut rng = build_rng(self.seed);

        let mut session = config.new_session(&mut rng);
        self.apply_overrides(&mut session, &mut rng)?;

        for slot in &self.lock {
            session.palette.set_locked(parse_slot(slot)?, true);
        }

        if let Some(name) = &self.preset {
            let library = PresetLibrary::load()
                .map_err(|e| CliError::io(format!("Failed to load presets: {e}")))?;
            let preset = library.find(name).ok_or_else(|| {
                CliError::validation(format!(
                    "Unknown preset '{name}'. Run 'huekit presets' to list them"
                ))
            })?;
            session.apply_preset(preset, &mut rng);
        } else if let Some(base) = &self.base {
            session.base_color = parse_color(base)?;
            session.regenerate_from_base(&mut rng);
        } else {
            session.regenerate(&mut rng);
        }

        let document = PaletteDocument::from_session(&session, chrono::Utc::now());

        if let Some(path) = &self.output {
            let written = write_document(&document, path)?;
            eprintln!("✓ Saved palette to: {}", written.display());
        }

        let text = session.render();
        if self.copy {
            copy_to_clipboard(&text)?;
            eprintln!("✓ Palette copied as {}", session.export_format.name().to_uppercase());
        }

        if self.json {
            println!(
                "{}",
                document
                    .to_json_pretty()
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{text}");
        }

        Ok(())
    }

    /// Applies command-line overrides on top of the configured defaults.
    fn apply_overrides(
        &self,
        session: &mut PaletteSession,
        rng: &mut impl rand::Rng,
    ) -> CliResult<()> {
        if let Some(harmony) = &self.harmony {
            session.harmony = parse_harmony(harmony)?;
        }
        if let Some(format) = &self.format {
            session.export_format = parse_format(format)?;
        }
        if let Some(size) = self.size {
            if !(MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&size) {
                return Err(CliError::validation(format!(
                    "Invalid size {size}. Must be between {MIN_PALETTE_SIZE} and {MAX_PALETTE_SIZE}"
                )));
            }
            session.palette = Palette::with_size(size, rng);
        }
        Ok(())
    }
}

/// Writes `document` to `path`, or into `path` under the default file name
/// when `path` is an existing directory. Returns the file written.
fn write_document(document: &PaletteDocument, path: &Path) -> CliResult<PathBuf> {
    let target = if path.is_dir() {
        path.join(document.default_file_name())
    } else {
        path.to_path_buf()
    };

    let json = document
        .to_json_pretty()
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    fs::write(&target, json)
        .map_err(|e| CliError::io(format!("Failed to write {}: {e}", target.display())))?;

    Ok(target)
}
