//! Downloadable JSON description of a palette.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ExportFormat;
use crate::harmony::HarmonyStrategy;
use crate::models::{Color, PaletteSession};

/// Snapshot of a session written when the palette is downloaded.
///
/// ```json
/// {
///   "colors": ["#3b82f6", "#f6af3c"],
///   "format": "hex",
///   "harmony": "complementary",
///   "baseColor": "#3b82f6",
///   "generatedAt": "2025-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteDocument {
    /// Palette colors in slot order.
    pub colors: Vec<Color>,
    /// Export format selected when the document was produced.
    pub format: ExportFormat,
    /// Harmony strategy selected when the document was produced.
    pub harmony: HarmonyStrategy,
    /// Base color of the last harmony.
    pub base_color: Color,
    /// Creation timestamp.
    pub generated_at: DateTime<Utc>,
}

impl PaletteDocument {
    /// Captures `session` at `generated_at`.
    #[must_use]
    pub fn from_session(session: &PaletteSession, generated_at: DateTime<Utc>) -> Self {
        Self {
            colors: session.palette.colors().collect(),
            format: session.export_format,
            harmony: session.harmony,
            base_color: session.base_color,
            generated_at,
        }
    }

    /// Pretty-printed JSON text.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Default download filename, `color-palette-<unix millis>.json`.
    #[must_use]
    pub fn default_file_name(&self) -> String {
        format!("color-palette-{}.json", self.generated_at.timestamp_millis())
    }
}
