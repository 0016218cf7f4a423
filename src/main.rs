//! Huekit - color harmony and palette generator
//!
//! Command-line front end for the palette engine: convert colors, derive
//! harmonies, generate palettes, and edit a palette interactively.

use clap::{Parser, Subcommand};
use huekit::cli::{
    CliResult, ConfigArgs, ConvertArgs, GenerateArgs, HarmonyArgs, PresetsArgs, SessionArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Huekit - color harmony and palette generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a color as hex, RGB and HSL
    Convert(ConvertArgs),
    /// Generate a color harmony from a base color
    Harmony(HarmonyArgs),
    /// Generate a palette
    Generate(GenerateArgs),
    /// List the built-in preset palettes
    Presets(PresetsArgs),
    /// Edit a palette interactively
    Session(SessionArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Convert(args) => args.execute(),
            Self::Harmony(args) => args.execute(),
            Self::Generate(args) => args.execute(),
            Self::Presets(args) => args.execute(),
            Self::Session(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
