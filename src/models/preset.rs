//! Named preset palettes.
//!
//! Presets are plain color lists with no harmony semantics. The built-in set is
//! embedded as JSON and loaded on demand.

use serde::{Deserialize, Serialize};

use super::Color;

/// A named, fixed list of colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name (e.g., "Ocean Breeze").
    pub name: String,
    /// Colors in slot order.
    pub colors: Vec<Color>,
}

/// The collection of built-in presets.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetLibrary {
    /// Presets in display order.
    pub presets: Vec<Preset>,
}

impl PresetLibrary {
    /// Load the built-in presets from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        let json_data = include_str!("../data/presets.json");
        let library: Self = serde_json::from_str(json_data)?;
        Ok(library)
    }

    /// Finds a preset by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Preset> {
        let name = name.trim();
        self.presets
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }

    /// Preset names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|preset| preset.name.as_str())
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// True if no presets are available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self::load().unwrap_or_else(|_| Self {
            presets: Vec::new(),
        })
    }
}
