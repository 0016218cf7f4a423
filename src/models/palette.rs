//! Palette state: an ordered list of lockable color slots.
//!
//! Every mutation is total. Out-of-bounds indices and requests that would push
//! the palette outside `MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE` leave it untouched.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::color::Color;
use super::preset::Preset;
use crate::constants::{DEFAULT_PALETTE_COLORS, MAX_PALETTE_SIZE, MIN_PALETTE_SIZE};
use crate::harmony::{generate_harmony, HarmonyStrategy};

/// One palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Current color of the slot.
    pub color: Color,
    /// Locked slots are skipped by regeneration.
    pub locked: bool,
}

impl PaletteEntry {
    /// Creates an unlocked entry.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            locked: false,
        }
    }
}

/// Entry count outside `MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Palette must hold {MIN_PALETTE_SIZE} to {MAX_PALETTE_SIZE} colors, got {0}")]
pub struct PaletteSizeError(pub usize);

/// Ordered collection of 2 to 10 palette entries.
///
/// Position matters: slot `i` receives the `i`-th color of a harmony.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaletteRepr")]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

/// Unchecked serialized form of [`Palette`].
#[derive(Deserialize)]
struct PaletteRepr {
    entries: Vec<PaletteEntry>,
}

impl TryFrom<PaletteRepr> for Palette {
    type Error = PaletteSizeError;

    fn try_from(repr: PaletteRepr) -> Result<Self, Self::Error> {
        if (MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&repr.entries.len()) {
            Ok(Self {
                entries: repr.entries,
            })
        } else {
            Err(PaletteSizeError(repr.entries.len()))
        }
    }
}

impl Palette {
    /// Builds an unlocked palette from `colors`.
    ///
    /// Returns `None` if the number of colors is outside the allowed size range.
    #[must_use]
    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Option<Self> {
        let entries: Vec<PaletteEntry> = colors.into_iter().map(PaletteEntry::new).collect();
        if (MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&entries.len()) {
            Some(Self { entries })
        } else {
            None
        }
    }

    /// Builds a palette of `size` slots seeded from the default colors.
    ///
    /// `size` is clamped into the allowed range; slots past the defaults get
    /// random colors.
    pub fn with_size<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let size = size.clamp(MIN_PALETTE_SIZE, MAX_PALETTE_SIZE);
        let entries = (0..size)
            .map(|index| {
                let color = DEFAULT_PALETTE_COLORS
                    .get(index)
                    .and_then(|hex| Color::from_hex(hex).ok())
                    .unwrap_or_else(|| Color::random(rng));
                PaletteEntry::new(color)
            })
            .collect();
        Self { entries }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a palette holds at least two entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in palette order.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Colors in palette order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries.iter().map(|entry| entry.color)
    }

    /// Canonical hex strings in palette order.
    #[must_use]
    pub fn hex_list(&self) -> Vec<String> {
        self.colors().map(|color| color.to_hex()).collect()
    }

    /// Flips the lock flag of one entry.
    pub fn toggle_lock(&mut self, index: usize) {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.locked = !entry.locked;
                trace!("Slot {index} locked={}", entry.locked);
            }
            None => debug!("toggle_lock: index {index} out of bounds, ignoring"),
        }
    }

    /// Sets the lock flag of one entry explicitly.
    pub fn set_locked(&mut self, index: usize, locked: bool) {
        match self.entries.get_mut(index) {
            Some(entry) => entry.locked = locked,
            None => debug!("set_locked: index {index} out of bounds, ignoring"),
        }
    }

    /// Overwrites the color of one entry; its lock flag is untouched.
    pub fn update_color(&mut self, index: usize, color: Color) {
        match self.entries.get_mut(index) {
            Some(entry) => {
                trace!("Slot {index}: {} -> {color}", entry.color);
                entry.color = color;
            }
            None => debug!("update_color: index {index} out of bounds, ignoring"),
        }
    }

    /// Appends a random unlocked entry unless the palette is full.
    pub fn add_color<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.entries.len() >= MAX_PALETTE_SIZE {
            debug!("add_color: palette already holds {MAX_PALETTE_SIZE} colors");
            return;
        }
        self.entries.push(PaletteEntry::new(Color::random(rng)));
    }

    /// Removes the entry at `index` unless the palette is at its minimum size.
    pub fn remove_color(&mut self, index: usize) {
        if self.entries.len() <= MIN_PALETTE_SIZE {
            debug!("remove_color: palette already at {MIN_PALETTE_SIZE} colors");
            return;
        }
        if index >= self.entries.len() {
            debug!("remove_color: index {index} out of bounds, ignoring");
            return;
        }
        self.entries.remove(index);
    }

    /// Replaces colors positionally with those of `preset`.
    ///
    /// The palette keeps its size. Slots covered by the preset keep their lock
    /// flag (locked slots still take the preset color); slots past the end of
    /// the preset get a random color and are unlocked.
    pub fn apply_preset<R: Rng + ?Sized>(&mut self, preset: &Preset, rng: &mut R) {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            match preset.colors.get(index) {
                Some(color) => entry.color = *color,
                None => *entry = PaletteEntry::new(Color::random(rng)),
            }
        }
        debug!("Applied preset '{}' to {} slots", preset.name, self.entries.len());
    }

    /// Regenerates every unlocked slot.
    ///
    /// With [`HarmonyStrategy::Random`] each unlocked slot gets an independent
    /// random color and `None` is returned. Otherwise a random base color is
    /// drawn, the harmony is applied with [`Palette::apply_harmony`], and the
    /// base is returned.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        strategy: HarmonyStrategy,
        rng: &mut R,
    ) -> Option<Color> {
        if strategy == HarmonyStrategy::Random {
            for entry in self.entries.iter_mut().filter(|entry| !entry.locked) {
                entry.color = Color::random(rng);
            }
            debug!("Regenerated unlocked slots with random colors");
            return None;
        }

        let base = Color::random(rng);
        self.apply_harmony(base, strategy, rng);
        Some(base)
    }

    /// Assigns the harmony of `base` to unlocked slots by position.
    ///
    /// Slot `i` takes harmony color `i`; locked slots are skipped without
    /// shifting the mapping. Slots past the harmony length get random colors.
    pub fn apply_harmony<R: Rng + ?Sized>(
        &mut self,
        base: Color,
        strategy: HarmonyStrategy,
        rng: &mut R,
    ) {
        let harmony = generate_harmony(base, strategy, rng);
        for (index, entry) in self.entries.iter_mut().enumerate() {
            if entry.locked {
                continue;
            }
            entry.color = harmony
                .get(index)
                .copied()
                .unwrap_or_else(|| Color::random(rng));
        }
        debug!("Applied {strategy} harmony from base {base}");
    }
}

impl Default for Palette {
    /// The five-color startup palette, all unlocked.
    fn default() -> Self {
        let entries = DEFAULT_PALETTE_COLORS
            .iter()
            .filter_map(|hex| Color::from_hex(hex).ok())
            .map(PaletteEntry::new)
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hex(value: &str) -> Color {
        Color::from_hex(value).unwrap()
    }

    fn palette_of(values: &[&str]) -> Palette {
        Palette::from_colors(values.iter().map(|v| hex(v))).unwrap()
    }

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.hex_list()[0], "#3b82f6");
        assert!(palette.entries().iter().all(|e| !e.locked));
    }

    #[test]
    fn test_from_colors_enforces_bounds() {
        assert!(Palette::from_colors([hex("#000000")]).is_none());
        assert!(Palette::from_colors(vec![hex("#000000"); 11]).is_none());
        assert_eq!(Palette::from_colors(vec![hex("#000000"); 2]).unwrap().len(), 2);
        assert_eq!(Palette::from_colors(vec![hex("#000000"); 10]).unwrap().len(), 10);
    }

    #[test]
    fn test_with_size_clamps_and_pads() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Palette::with_size(0, &mut rng).len(), 2);
        assert_eq!(Palette::with_size(42, &mut rng).len(), 10);

        let palette = Palette::with_size(7, &mut rng);
        assert_eq!(palette.len(), 7);
        assert_eq!(&palette.hex_list()[..5], &Palette::default().hex_list()[..]);
    }

    #[test]
    fn test_toggle_lock_only_touches_one_entry() {
        let mut palette = Palette::default();
        palette.toggle_lock(1);
        assert!(palette.get(1).unwrap().locked);
        assert_eq!(palette.entries().iter().filter(|e| e.locked).count(), 1);

        palette.toggle_lock(1);
        assert!(!palette.get(1).unwrap().locked);
    }

    #[test]
    fn test_out_of_bounds_indices_are_ignored() {
        let mut palette = Palette::default();
        let before = palette.clone();

        palette.toggle_lock(5);
        palette.set_locked(99, true);
        palette.update_color(5, hex("#000000"));
        palette.remove_color(5);

        assert_eq!(palette, before);
    }

    #[test]
    fn test_update_color_keeps_lock() {
        let mut palette = Palette::default();
        palette.toggle_lock(0);
        palette.update_color(0, hex("#123456"));
        let entry = palette.get(0).unwrap();
        assert_eq!(entry.color, hex("#123456"));
        assert!(entry.locked);
    }

    #[test]
    fn test_add_color_until_full() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut palette = Palette::default();
        for _ in 0..10 {
            palette.add_color(&mut rng);
        }
        assert_eq!(palette.len(), MAX_PALETTE_SIZE);

        let before = palette.clone();
        palette.add_color(&mut rng);
        assert_eq!(palette, before);
    }

    #[test]
    fn test_added_entry_is_unlocked() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut palette = Palette::default();
        palette.add_color(&mut rng);
        assert!(!palette.get(5).unwrap().locked);
    }

    #[test]
    fn test_remove_color_stops_at_floor() {
        let mut palette = palette_of(&["#111111", "#222222", "#333333"]);
        palette.remove_color(0);
        assert_eq!(palette.hex_list(), vec!["#222222", "#333333"]);

        let before = palette.clone();
        palette.remove_color(0);
        assert_eq!(palette, before);
    }

    #[test]
    fn test_regenerate_random_respects_locks() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut palette = Palette::default();
        palette.toggle_lock(0);
        palette.toggle_lock(3);
        let before = palette.clone();

        let base = palette.regenerate(HarmonyStrategy::Random, &mut rng);
        assert!(base.is_none());

        for (old, new) in before.entries().iter().zip(palette.entries()) {
            if old.locked {
                assert_eq!(old, new);
            } else {
                assert_ne!(old.color, new.color);
            }
        }
    }

    #[test]
    fn test_regenerate_harmony_is_positional() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut palette = palette_of(&["#111111", "#222222", "#333333"]);
        palette.toggle_lock(0);

        let base = palette
            .regenerate(HarmonyStrategy::Monochromatic, &mut rng)
            .unwrap();
        let expected = HarmonyStrategy::Monochromatic.derive(base).unwrap();

        assert_eq!(palette.get(0).unwrap().color, hex("#111111"));
        assert_eq!(palette.get(1).unwrap().color, expected[1]);
        assert_eq!(palette.get(2).unwrap().color, expected[2]);
    }

    #[test]
    fn test_apply_harmony_fills_extra_slots_randomly() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut palette = Palette::with_size(8, &mut rng);
        let before: Vec<Color> = palette.colors().collect();
        let base = hex("#3b82f6");

        // Triadic draws nothing itself, so the extra slots take the next three draws
        let mut replay = rng.clone();
        let extra: Vec<Color> = (0..3).map(|_| Color::random(&mut replay)).collect();
        palette.apply_harmony(base, HarmonyStrategy::Triadic, &mut rng);

        let expected = HarmonyStrategy::Triadic.derive(base).unwrap();
        let colors: Vec<Color> = palette.colors().collect();
        assert_eq!(colors.len(), 8);
        assert_eq!(&colors[..5], &expected[..]);
        assert_eq!(&colors[5..], &extra[..]);
        assert_ne!(&colors[5..], &before[5..]);
    }

    #[test]
    fn test_deserialize_enforces_size_bounds() {
        let empty = serde_json::from_str::<Palette>(r#"{"entries":[]}"#);
        assert!(empty.is_err());

        let entry = r##"{"color":"#000000","locked":false}"##;
        let oversized = format!(r#"{{"entries":[{}]}}"#, vec![entry; 12].join(","));
        let err = serde_json::from_str::<Palette>(&oversized).unwrap_err();
        assert!(err.to_string().contains("got 12"));

        let valid = format!(r#"{{"entries":[{}]}}"#, vec![entry; 2].join(","));
        let palette: Palette = serde_json::from_str(&valid).unwrap();
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_apply_harmony_with_stepped_source() {
        // A constant zero source makes every random slot black
        let mut rng = StepRng::new(0, 0);
        let mut palette = Palette::with_size(6, &mut rng);
        palette.apply_harmony(hex("#ff0000"), HarmonyStrategy::Analogous, &mut rng);
        assert_eq!(palette.get(2).unwrap().color, hex("#ff0000"));
        assert_eq!(palette.get(5).unwrap().color, Color::new(0, 0, 0));
    }

    #[test]
    fn test_apply_preset_keeps_size_and_locks() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut palette = palette_of(&["#000000", "#000000", "#000000"]);
        palette.toggle_lock(1);

        let preset = Preset {
            name: "Duo".to_string(),
            colors: vec![hex("#ff0000"), hex("#00ff00"), hex("#0000ff"), hex("#ffffff")],
        };
        palette.apply_preset(&preset, &mut rng);

        assert_eq!(palette.hex_list(), vec!["#ff0000", "#00ff00", "#0000ff"]);
        assert!(palette.get(1).unwrap().locked);
    }

    #[test]
    fn test_apply_short_preset_pads_with_unlocked_random() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut palette = Palette::with_size(7, &mut rng);
        palette.toggle_lock(0);
        palette.toggle_lock(6);

        let preset = Preset {
            name: "Pair".to_string(),
            colors: vec![hex("#ff0000"), hex("#00ff00")],
        };
        palette.apply_preset(&preset, &mut rng);

        assert_eq!(palette.len(), 7);
        assert_eq!(palette.get(0).unwrap().color, hex("#ff0000"));
        assert!(palette.get(0).unwrap().locked);
        assert!(!palette.get(6).unwrap().locked);
    }

    #[test]
    fn test_palette_serde_shape() {
        let palette = palette_of(&["#111111", "#222222"]);
        let json = serde_json::to_value(&palette).unwrap();
        assert_eq!(json["entries"][0]["color"], "#111111");
        assert_eq!(json["entries"][1]["locked"], false);
    }
}
