//! Shared helpers for CLI command handlers.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

use crate::export::ExportFormat;
use crate::harmony::HarmonyStrategy;
use crate::models::Color;

/// Process exit codes returned by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Invalid input (bad color, unknown name, out-of-range value)
    ValidationError = 1,
    /// File system or clipboard failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying the exit code to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code for the process
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Builds the random source for a command: seeded when `seed` is given,
/// otherwise seeded from OS entropy.
#[must_use]
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::debug!("Using seeded random source ({seed})");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Parses a hex color argument.
pub fn parse_color(value: &str) -> CliResult<Color> {
    Color::from_hex(value.trim()).map_err(|e| CliError::validation(e.to_string()))
}

/// Parses a harmony strategy argument.
pub fn parse_harmony(value: &str) -> CliResult<HarmonyStrategy> {
    value
        .parse()
        .map_err(|e: crate::harmony::ParseNameError| CliError::validation(e.to_string()))
}

/// Parses an export format argument.
pub fn parse_format(value: &str) -> CliResult<ExportFormat> {
    value
        .parse()
        .map_err(|e: crate::harmony::ParseNameError| CliError::validation(e.to_string()))
}

/// Parses a 1-based slot number into a 0-based index.
pub fn parse_slot(value: &str) -> CliResult<usize> {
    match value.trim().parse::<usize>() {
        Ok(slot) if slot >= 1 => Ok(slot - 1),
        _ => Err(CliError::validation(format!(
            "Invalid slot '{value}'. Slots are numbered from 1"
        ))),
    }
}

/// Copies text to the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> CliResult<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| CliError::io(format!("Failed to access clipboard: {e}")))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| CliError::io(format!("Failed to copy to clipboard: {e}")))
}

/// Copies text to the system clipboard.
#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_text: &str) -> CliResult<()> {
    Err(CliError::io(
        "Clipboard support is not compiled in (enable the 'clipboard' feature)",
    ))
}
