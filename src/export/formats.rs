//! Textual palette notations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::harmony::ParseNameError;
use crate::models::{Color, Palette};

/// Notation used when rendering a palette as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `--color-N: #rrggbb;`
    CssVariables,
}

impl ExportFormat {
    /// All formats in menu order.
    pub const ALL: [Self; 4] = [Self::Hex, Self::Rgb, Self::Hsl, Self::CssVariables];

    /// Machine name used in config files and on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::CssVariables => "css-variables",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase().replace('_', "-");
        let folded = match folded.as_str() {
            "css" | "css-vars" => "css-variables",
            other => other,
        };

        Self::ALL
            .into_iter()
            .find(|format| format.name() == folded)
            .ok_or_else(|| ParseNameError {
                kind: "export format",
                name: s.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(Self::name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Renders one color of `palette` in `format`.
///
/// CSS variable numbers come from the 1-based position of the color's first
/// occurrence in the palette, so duplicate colors share a variable.
#[must_use]
pub fn format_color(palette: &Palette, color: Color, format: ExportFormat) -> String {
    match format {
        ExportFormat::Hex => color.to_hex(),
        ExportFormat::Rgb => color.rgb().to_string(),
        ExportFormat::Hsl => color.hsl().to_string(),
        ExportFormat::CssVariables => {
            let number = palette
                .colors()
                .position(|candidate| candidate == color)
                .map_or(0, |index| index + 1);
            format!("--color-{number}: {};", color.to_hex())
        }
    }
}

/// Renders the whole palette, one color per line, in palette order.
///
/// # Examples
///
/// ```
/// use huekit::export::{format_palette, ExportFormat};
/// use huekit::models::{Color, Palette};
///
/// let blue = Color::from_hex("#3B82F6").unwrap();
/// let palette = Palette::from_colors([blue, blue]).unwrap();
/// assert_eq!(
///     format_palette(&palette, ExportFormat::CssVariables),
///     "--color-1: #3b82f6;\n--color-1: #3b82f6;"
/// );
/// ```
#[must_use]
pub fn format_palette(palette: &Palette, format: ExportFormat) -> String {
    palette
        .colors()
        .map(|color| format_color(palette, color, format))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Palette {
        Palette::from_colors([
            Color::from_hex("#3B82F6").unwrap(),
            Color::from_hex("#ff0000").unwrap(),
            Color::from_hex("#808080").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(
            format_palette(&sample(), ExportFormat::Hex),
            "#3b82f6\n#ff0000\n#808080"
        );
    }

    #[test]
    fn test_format_rgb() {
        assert_eq!(
            format_palette(&sample(), ExportFormat::Rgb),
            "rgb(59, 130, 246)\nrgb(255, 0, 0)\nrgb(128, 128, 128)"
        );
    }

    #[test]
    fn test_format_hsl() {
        assert_eq!(
            format_palette(&sample(), ExportFormat::Hsl),
            "hsl(217, 91%, 60%)\nhsl(0, 100%, 50%)\nhsl(0, 0%, 50%)"
        );
    }

    #[test]
    fn test_format_css_variables() {
        assert_eq!(
            format_palette(&sample(), ExportFormat::CssVariables),
            "--color-1: #3b82f6;\n--color-2: #ff0000;\n--color-3: #808080;"
        );
    }

    #[test]
    fn test_css_variables_number_by_first_occurrence() {
        let red = Color::new(255, 0, 0);
        let blue = Color::new(0, 0, 255);
        let palette = Palette::from_colors([red, blue, red, blue]).unwrap();
        let lines: Vec<String> = format_palette(&palette, ExportFormat::CssVariables)
            .lines()
            .map(String::from)
            .collect();
        assert_eq!(
            lines,
            vec![
                "--color-1: #ff0000;",
                "--color-2: #0000ff;",
                "--color-1: #ff0000;",
                "--color-2: #0000ff;",
            ]
        );
    }

    #[test]
    fn test_parse_format_names() {
        assert_eq!("hex".parse::<ExportFormat>().unwrap(), ExportFormat::Hex);
        assert_eq!("RGB".parse::<ExportFormat>().unwrap(), ExportFormat::Rgb);
        assert_eq!(
            "css_variables".parse::<ExportFormat>().unwrap(),
            ExportFormat::CssVariables
        );
        assert_eq!("css".parse::<ExportFormat>().unwrap(), ExportFormat::CssVariables);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
