//! Color harmony generation.
//!
//! Each strategy derives [`HARMONY_SIZE`] colors from one base color by
//! rotating hue and nudging saturation/lightness in HSL space. The converter
//! clamps whatever overshoot the rules produce.

use crate::constants::HARMONY_SIZE;
use crate::models::color::{Color, ColorError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a strategy or format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{name}'. Expected one of: {expected}")]
pub struct ParseNameError {
    /// What was being parsed ("harmony", "export format").
    pub kind: &'static str,
    /// The rejected input.
    pub name: String,
    /// Comma-separated accepted names.
    pub expected: String,
}

/// Named rule for deriving related colors from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyStrategy {
    /// Lightness steps around the base.
    Monochromatic,
    /// Neighbouring hues within 60 degrees.
    Analogous,
    /// Base and its 180 degree opposite, plus tints and a shade.
    #[default]
    Complementary,
    /// Three hues 120 degrees apart.
    Triadic,
    /// Four hues 90 degrees apart.
    Tetradic,
    /// Base plus the two hues flanking its complement.
    SplitComplementary,
    /// Independent random colors; ignores the base.
    Random,
}

impl HarmonyStrategy {
    /// All strategies in menu order.
    pub const ALL: [Self; 7] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::Tetradic,
        Self::SplitComplementary,
        Self::Random,
    ];

    /// Machine name used in config files and on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::SplitComplementary => "split-complementary",
            Self::Random => "random",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Monochromatic => "Monochromatic",
            Self::Analogous => "Analogous",
            Self::Complementary => "Complementary",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
            Self::SplitComplementary => "Split Complementary",
            Self::Random => "Random",
        }
    }

    /// Looks a strategy up by name, ignoring case and `-`/`_`/space separators.
    ///
    /// `"splitComplementary"`, `"split_complementary"` and
    /// `"Split Complementary"` all resolve to [`HarmonyStrategy::SplitComplementary`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let folded: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().replace('-', "") == folded)
    }

    /// Derives the harmony for a deterministic strategy.
    ///
    /// Returns `None` for [`HarmonyStrategy::Random`], which needs a random
    /// source; use [`generate_harmony`] for that.
    #[must_use]
    pub fn derive(&self, base: Color) -> Option<[Color; HARMONY_SIZE]> {
        let hsl = base.hsl();
        let (h, s, l) = (i32::from(hsl.h), i32::from(hsl.s), i32::from(hsl.l));
        let at = |offset: i32, s: i32, l: i32| {
            Color::from_hsl(
                f64::from((h + offset).rem_euclid(360)),
                f64::from(s),
                f64::from(l),
            )
        };

        let colors = match self {
            Self::Monochromatic => [
                at(0, s, (l - 30).max(10)),
                at(0, s, (l - 15).max(15)),
                base,
                at(0, s, (l + 15).min(85)),
                at(0, s, (l + 30).min(90)),
            ],
            Self::Analogous => [
                at(-60, s, l),
                at(-30, s, l),
                base,
                at(30, s, l),
                at(60, s, l),
            ],
            Self::Complementary => [
                base,
                at(180, s, l),
                at(0, (s - 20).max(20), (l + 20).min(80)),
                at(180, (s - 20).max(20), (l + 20).min(80)),
                at(0, (s + 20).min(80), (l - 20).max(20)),
            ],
            Self::Triadic => [
                base,
                at(120, s, l),
                at(240, s, l),
                at(0, (s - 15).max(15), (l + 15).min(85)),
                at(120, (s - 15).max(15), (l + 15).min(85)),
            ],
            Self::Tetradic => [
                base,
                at(90, s, l),
                at(180, s, l),
                at(270, s, l),
                at(0, (s - 10).max(10), (l + 10).min(90)),
            ],
            Self::SplitComplementary => [
                base,
                at(150, s, l),
                at(210, s, l),
                at(0, (s - 15).max(15), (l + 15).min(85)),
                at(180, (s - 30).max(30), (l + 20).min(80)),
            ],
            Self::Random => return None,
        };

        Some(colors)
    }
}

impl fmt::Display for HarmonyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyStrategy {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseNameError {
            kind: "harmony",
            name: s.to_string(),
            expected: Self::ALL
                .iter()
                .map(Self::name)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// Generates the harmony for `strategy` from `base`.
///
/// Always returns exactly [`HARMONY_SIZE`] colors. `rng` is only drawn from
/// for [`HarmonyStrategy::Random`].
///
/// # Examples
///
/// ```
/// use huekit::harmony::{generate_harmony, HarmonyStrategy};
/// use huekit::models::Color;
///
/// let base = Color::from_hex("#3B82F6").unwrap();
/// let colors = generate_harmony(base, HarmonyStrategy::Complementary, &mut rand::thread_rng());
/// assert_eq!(colors[0], base);
/// assert_eq!(colors[1].hsl().h, 37);
/// ```
pub fn generate_harmony<R: Rng + ?Sized>(
    base: Color,
    strategy: HarmonyStrategy,
    rng: &mut R,
) -> [Color; HARMONY_SIZE] {
    strategy
        .derive(base)
        .unwrap_or_else(|| std::array::from_fn(|_| Color::random(rng)))
}

/// Generates a harmony from a hex base and a strategy name.
///
/// An unrecognised strategy name is not an error: it yields five copies of
/// the base color.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `base_hex` is malformed.
pub fn generate_harmony_by_name<R: Rng + ?Sized>(
    base_hex: &str,
    strategy: &str,
    rng: &mut R,
) -> Result<[Color; HARMONY_SIZE], ColorError> {
    let base = Color::from_hex(base_hex)?;
    Ok(match HarmonyStrategy::from_name(strategy) {
        Some(strategy) => generate_harmony(base, strategy, rng),
        None => {
            tracing::debug!("Unknown harmony '{strategy}', repeating base {base}");
            [base; HARMONY_SIZE]
        }
    })
}
