//! Mana colors: parsing, extraction from mana costs and display names for
//! color-indicator reminder text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static COLOR_SYMBOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[WUBRG]").unwrap());

/// One of the five mana colors, serialized as its single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    pub fn from_letter(letter: &str) -> Option<Color> {
        match letter {
            "W" => Some(Color::White),
            "U" => Some(Color::Blue),
            "B" => Some(Color::Black),
            "R" => Some(Color::Red),
            "G" => Some(Color::Green),
            _ => None,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Color::White => "W",
            Color::Blue => "U",
            Color::Black => "B",
            Color::Red => "R",
            Color::Green => "G",
        }
    }
}

/// Colors named in a mana cost, in first-seen order and without repeats.
///
/// Everything that is not one of `W`, `U`, `B`, `R`, `G` is ignored, so
/// `"{2}{W/U}{U}"` yields `[White, Blue]`.
pub fn extract_colors(mana_cost: &str) -> Vec<Color> {
    let mut colors = Vec::new();
    for symbol in COLOR_SYMBOL.find_iter(mana_cost) {
        if let Some(color) = Color::from_letter(symbol.as_str()) {
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
    }
    colors
}

/// Display names used when writing color indicators out as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorNames {
    pub white: String,
    pub blue: String,
    pub black: String,
    pub red: String,
    pub green: String,
    /// Phrase used when an indicator covers all five colors.
    pub all: String,
}

impl Default for ColorNames {
    fn default() -> Self {
        Self {
            white: "white".to_string(),
            blue: "blue".to_string(),
            black: "black".to_string(),
            red: "red".to_string(),
            green: "green".to_string(),
            all: "all colors".to_string(),
        }
    }
}

impl ColorNames {
    pub fn name(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white,
            Color::Blue => &self.blue,
            Color::Black => &self.black,
            Color::Red => &self.red,
            Color::Green => &self.green,
        }
    }

    /// "white", "white and blue", "white, blue and black", or the
    /// all-colors phrase for a five-color indicator.
    pub fn describe(&self, colors: &[Color]) -> String {
        match colors {
            [] => String::new(),
            [single] => self.name(*single).to_string(),
            _ if colors.len() == Color::ALL.len() => self.all.clone(),
            [init @ .., last] => {
                let head: Vec<&str> = init.iter().map(|c| self.name(*c)).collect();
                format!("{} and {}", head.join(", "), self.name(*last))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_colors_keeps_first_occurrence_order() {
        assert_eq!(
            extract_colors("{R}{G}{R}{W}"),
            vec![Color::Red, Color::Green, Color::White]
        );
    }

    #[test]
    fn test_extract_colors_ignores_generic_and_hybrid_noise() {
        assert_eq!(
            extract_colors("{3}{W/U}{U}{X}"),
            vec![Color::White, Color::Blue]
        );
        assert!(extract_colors("{4}{C}").is_empty());
        assert!(extract_colors("").is_empty());
    }

    #[test]
    fn test_describe_joins_names() {
        let names = ColorNames::default();
        assert_eq!(names.describe(&[Color::Green]), "green");
        assert_eq!(names.describe(&[Color::White, Color::Blue]), "white and blue");
        assert_eq!(
            names.describe(&[Color::Blue, Color::Black, Color::Red]),
            "blue, black and red"
        );
        assert_eq!(names.describe(&Color::ALL), "all colors");
        assert_eq!(names.describe(&[]), "");
    }

    #[test]
    fn test_color_serializes_as_letter() {
        let json = serde_json::to_string(&vec![Color::White, Color::Green]).unwrap();
        assert_eq!(json, r#"["W","G"]"#);
        let parsed: Vec<Color> = serde_json::from_str(r#"["U","B"]"#).unwrap();
        assert_eq!(parsed, vec![Color::Blue, Color::Black]);
    }
}
