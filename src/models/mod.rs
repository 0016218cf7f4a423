//! Data models for colors, palettes, presets and editing sessions.
//!
//! This module contains the engine's core data structures. Models are
//! independent of the command-line front end and perform no I/O.

pub mod color;
pub mod palette;
pub mod preset;
pub mod session;

// Re-export all model types
pub use color::{Color, ColorError, Hsl, Rgb};
pub use palette::{Palette, PaletteEntry, PaletteSizeError};
pub use preset::{Preset, PresetLibrary};
pub use session::PaletteSession;
