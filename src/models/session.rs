//! A palette together with the selections that drive it.

use rand::Rng;

use super::{Color, Palette, Preset};
use crate::constants::DEFAULT_BASE_COLOR;
use crate::export::{format_palette, ExportFormat};
use crate::harmony::HarmonyStrategy;

/// In-memory editing session: the palette plus the current harmony, base color
/// and export format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSession {
    /// The palette being edited.
    pub palette: Palette,
    /// Strategy used by [`PaletteSession::regenerate`].
    pub harmony: HarmonyStrategy,
    /// Base color of the last harmony applied.
    pub base_color: Color,
    /// Notation used by [`PaletteSession::render`].
    pub export_format: ExportFormat,
}

impl PaletteSession {
    /// Creates a session from its parts.
    #[must_use]
    pub const fn new(
        palette: Palette,
        harmony: HarmonyStrategy,
        base_color: Color,
        export_format: ExportFormat,
    ) -> Self {
        Self {
            palette,
            harmony,
            base_color,
            export_format,
        }
    }

    /// Regenerates unlocked slots with the current harmony.
    ///
    /// A harmony-based regeneration draws a new random base color, which
    /// becomes the session's base color.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(base) = self.palette.regenerate(self.harmony, rng) {
            self.base_color = base;
        }
    }

    /// Applies the current harmony to the current base color.
    pub fn regenerate_from_base<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.palette.apply_harmony(self.base_color, self.harmony, rng);
    }

    /// Applies a preset to the palette.
    pub fn apply_preset<R: Rng + ?Sized>(&mut self, preset: &Preset, rng: &mut R) {
        self.palette.apply_preset(preset, rng);
    }

    /// Renders the palette in the current export format.
    #[must_use]
    pub fn render(&self) -> String {
        format_palette(&self.palette, self.export_format)
    }
}

impl Default for PaletteSession {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            harmony: HarmonyStrategy::default(),
            base_color: Color::from_hex(DEFAULT_BASE_COLOR).unwrap_or(Color::new(59, 130, 246)),
            export_format: ExportFormat::default(),
        }
    }
}
