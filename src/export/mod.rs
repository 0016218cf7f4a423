//! Export functionality for palettes.
//!
//! This module renders a palette as text in one of several notations and builds
//! the JSON document used when a palette is downloaded.

pub mod document;
pub mod formats;

pub use document::PaletteDocument;
pub use formats::{format_color, format_palette, ExportFormat};
