//! Interactive palette session.
//!
//! Reads one command per line from stdin (or a script file), applies it to an
//! in-memory [`PaletteSession`], and reports the result. A bad line prints an
//! error and the session carries on.

use crate::cli::common::{
    build_rng, copy_to_clipboard, parse_color, parse_format, parse_harmony, parse_slot, CliError,
    CliResult,
};
use crate::config::Config;
use crate::export::{format_palette, ExportFormat, PaletteDocument};
use crate::harmony::HarmonyStrategy;
use crate::models::{Color, PaletteSession, PresetLibrary};
use clap::Args;
use rand::Rng;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;

const HELP_TEXT: &str = "\
Commands (slots are numbered from 1):
  list                 Show slots with lock state
  show [FORMAT]        Print the palette (hex, rgb, hsl, css-variables)
  regen                Regenerate unlocked slots with the current harmony
  from-base [COLOR]    Apply the harmony to the base color (or COLOR)
  harmony STRATEGY     Select the harmony strategy
  base COLOR           Set the base color
  lock SLOT            Lock a slot
  unlock SLOT          Unlock a slot
  toggle SLOT          Toggle the lock on a slot
  set SLOT COLOR       Overwrite a slot's color
  add                  Append a random color (max 10)
  remove SLOT          Remove a slot (min 2)
  preset NAME          Apply a built-in preset
  format FORMAT        Select the export format
  save [FILE]          Write the palette document as JSON
  copy                 Copy the formatted palette to the clipboard
  help                 Show this help
  quit                 Leave the session";

/// Run an interactive palette editing session
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// Read commands from this file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Seed for the random source
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// List slots with lock markers
    List,
    /// Print the palette, optionally in a one-off format
    Show(Option<ExportFormat>),
    /// Regenerate unlocked slots
    Regenerate,
    /// Apply the harmony to the base color, optionally replacing it first
    FromBase(Option<Color>),
    /// Select the harmony strategy
    Harmony(HarmonyStrategy),
    /// Set the base color
    Base(Color),
    /// Lock a slot (0-based)
    Lock(usize),
    /// Unlock a slot (0-based)
    Unlock(usize),
    /// Toggle a slot's lock (0-based)
    Toggle(usize),
    /// Overwrite a slot's color (0-based)
    Set(usize, Color),
    /// Append a random color
    Add,
    /// Remove a slot (0-based)
    Remove(usize),
    /// Apply a preset by name
    Preset(String),
    /// Select the export format
    Format(ExportFormat),
    /// Save the palette document
    Save(Option<PathBuf>),
    /// Copy the rendered palette to the clipboard
    Copy,
    /// Show help
    Help,
    /// End the session
    Quit,
}

impl SessionCommand {
    /// Parses one input line.
    pub fn parse(line: &str) -> CliResult<Self> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match verb.to_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "show" | "print" => Self::Show(args.first().map(|f| parse_format(f)).transpose()?),
            "regen" | "regenerate" | "generate" => Self::Regenerate,
            "from-base" => Self::FromBase(args.first().map(|c| parse_color(c)).transpose()?),
            "harmony" => Self::Harmony(parse_harmony(required(&args, 0, "harmony STRATEGY")?)?),
            "base" => Self::Base(parse_color(required(&args, 0, "base COLOR")?)?),
            "lock" => Self::Lock(parse_slot(required(&args, 0, "lock SLOT")?)?),
            "unlock" => Self::Unlock(parse_slot(required(&args, 0, "unlock SLOT")?)?),
            "toggle" => Self::Toggle(parse_slot(required(&args, 0, "toggle SLOT")?)?),
            "set" => Self::Set(
                parse_slot(required(&args, 0, "set SLOT COLOR")?)?,
                parse_color(required(&args, 1, "set SLOT COLOR")?)?,
            ),
            "add" => Self::Add,
            "remove" | "rm" => Self::Remove(parse_slot(required(&args, 0, "remove SLOT")?)?),
            "preset" => {
                if rest.is_empty() {
                    return Err(CliError::validation("Usage: preset NAME"));
                }
                Self::Preset(rest.to_string())
            }
            "format" => Self::Format(parse_format(required(&args, 0, "format FORMAT")?)?),
            "save" => Self::Save((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "copy" => Self::Copy,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(CliError::validation(format!(
                    "Unknown command '{other}'. Type 'help' for a list of commands"
                )))
            }
        };

        Ok(command)
    }
}

fn required<'a>(args: &[&'a str], index: usize, usage: &str) -> CliResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or_else(|| CliError::validation(format!("Usage: {usage}")))
}

impl SessionArgs {
    /// Execute the session command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable configuration: {e:#}");
            Config::default()
        });
        let library = PresetLibrary::load()
            .map_err(|e| CliError::io(format!("Failed to load presets: {e}")))?;
        let mut rng = build_rng(self.seed);
        let mut session = config.new_session(&mut rng);

        let stdout = io::stdout();
        let mut output = stdout.lock();

        match &self.script {
            Some(path) => {
                let file = File::open(path).map_err(|e| {
                    CliError::io(format!("Failed to open script {}: {e}", path.display()))
                })?;
                run_session(
                    BufReader::new(file),
                    &mut output,
                    &mut session,
                    &library,
                    &mut rng,
                    false,
                )
            }
            None => {
                let stdin = io::stdin();
                let interactive = stdin.is_terminal();
                if interactive {
                    writeln!(output, "Type 'help' for commands, 'quit' to leave.")
                        .map_err(write_error)?;
                }
                run_session(
                    stdin.lock(),
                    &mut output,
                    &mut session,
                    &library,
                    &mut rng,
                    interactive,
                )
            }
        }
    }
}

fn write_error(e: io::Error) -> CliError {
    CliError::io(format!("Failed to write output: {e}"))
}

/// Runs session commands from `input` until end of input or `quit`.
///
/// Lines that are empty or start with `#` are skipped. Errors in a line are
/// written to `output` and do not stop the session.
pub fn run_session<I, W, R>(
    input: I,
    output: &mut W,
    session: &mut PaletteSession,
    library: &PresetLibrary,
    rng: &mut R,
    prompt: bool,
) -> CliResult<()>
where
    I: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    if prompt {
        write!(output, "> ").map_err(write_error)?;
        output.flush().map_err(write_error)?;
    }

    for line in input.lines() {
        let line = line.map_err(|e| CliError::io(format!("Failed to read input: {e}")))?;
        let trimmed = line.trim();

        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            debug!("session: {trimmed}");
            let outcome = SessionCommand::parse(trimmed)
                .and_then(|command| apply(command, session, library, rng));
            match outcome {
                Ok(Some(message)) => writeln!(output, "{message}").map_err(write_error)?,
                Ok(None) => return Ok(()),
                Err(e) => writeln!(output, "error: {e}").map_err(write_error)?,
            }
        }

        if prompt {
            write!(output, "> ").map_err(write_error)?;
            output.flush().map_err(write_error)?;
        }
    }

    Ok(())
}

/// Applies one command. Returns the text to print, or `None` to end the session.
fn apply<R: Rng + ?Sized>(
    command: SessionCommand,
    session: &mut PaletteSession,
    library: &PresetLibrary,
    rng: &mut R,
) -> CliResult<Option<String>> {
    let message = match command {
        SessionCommand::List => list(session),
        SessionCommand::Show(format) => match format {
            Some(format) => format_palette(&session.palette, format),
            None => session.render(),
        },
        SessionCommand::Regenerate => {
            session.regenerate(rng);
            format!("New {} palette generated.\n{}", session.harmony, list(session))
        }
        SessionCommand::FromBase(base) => {
            if let Some(base) = base {
                session.base_color = base;
            }
            session.regenerate_from_base(rng);
            format!(
                "Applied {} harmony to {}.\n{}",
                session.harmony,
                session.base_color.to_hex_upper(),
                list(session)
            )
        }
        SessionCommand::Harmony(strategy) => {
            session.harmony = strategy;
            format!("Harmony set to {}.", strategy.label())
        }
        SessionCommand::Base(color) => {
            session.base_color = color;
            format!("Base color set to {}.", color.to_hex_upper())
        }
        SessionCommand::Lock(index) => {
            session.palette.set_locked(index, true);
            lock_state(session, index)
        }
        SessionCommand::Unlock(index) => {
            session.palette.set_locked(index, false);
            lock_state(session, index)
        }
        SessionCommand::Toggle(index) => {
            session.palette.toggle_lock(index);
            lock_state(session, index)
        }
        SessionCommand::Set(index, color) => {
            session.palette.update_color(index, color);
            if index < session.palette.len() {
                format!("Slot {} set to {}.", index + 1, color.to_hex_upper())
            } else {
                format!("No slot {}; palette unchanged.", index + 1)
            }
        }
        SessionCommand::Add => {
            let before = session.palette.len();
            session.palette.add_color(rng);
            if session.palette.len() > before {
                format!("Added slot {}.\n{}", session.palette.len(), list(session))
            } else {
                format!("Palette already has {before} colors.")
            }
        }
        SessionCommand::Remove(index) => {
            let before = session.palette.len();
            session.palette.remove_color(index);
            if session.palette.len() < before {
                format!("Removed slot {}.\n{}", index + 1, list(session))
            } else {
                "Palette unchanged.".to_string()
            }
        }
        SessionCommand::Preset(name) => {
            let preset = library.find(&name).ok_or_else(|| {
                CliError::validation(format!(
                    "Unknown preset '{name}'. Available: {}",
                    library.names().collect::<Vec<_>>().join(", ")
                ))
            })?;
            session.apply_preset(preset, rng);
            format!("Applied {} palette.\n{}", preset.name, list(session))
        }
        SessionCommand::Format(format) => {
            session.export_format = format;
            format!("Export format set to {format}.")
        }
        SessionCommand::Save(path) => {
            let document = PaletteDocument::from_session(session, chrono::Utc::now());
            let path = path.unwrap_or_else(|| PathBuf::from(document.default_file_name()));
            let json = document
                .to_json_pretty()
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            fs::write(&path, json)
                .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;
            format!("Palette saved to {}.", path.display())
        }
        SessionCommand::Copy => {
            copy_to_clipboard(&session.render())?;
            format!(
                "Palette copied as {}.",
                session.export_format.name().to_uppercase()
            )
        }
        SessionCommand::Help => HELP_TEXT.to_string(),
        SessionCommand::Quit => return Ok(None),
    };

    Ok(Some(message))
}

fn lock_state(session: &PaletteSession, index: usize) -> String {
    match session.palette.get(index) {
        Some(entry) if entry.locked => format!("Slot {} locked.", index + 1),
        Some(_) => format!("Slot {} unlocked.", index + 1),
        None => format!("No slot {}; palette unchanged.", index + 1),
    }
}

/// Slot listing with lock markers.
fn list(session: &PaletteSession) -> String {
    session
        .palette
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let marker = if entry.locked { "  [locked]" } else { "" };
            format!("{:>2}  {}{}", index + 1, entry.color.to_hex_upper(), marker)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
