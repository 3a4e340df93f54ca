//! Color specifications used by role cosmetics.
//!
//! Two grammars are supported:
//! - plain hex (`#RRGGBB`, `RGB`, `GG`, `G`, `#` optional) for chat colors
//! - rich colors for name colors: a single hex color, a cycle of colors
//!   separated by `|`, or a gradient separated by `>`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorParseError;

/// A 3-byte RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color3B {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color3B {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color3B {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color3B {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

/// Parse a 3-byte hex color.
///
/// Accepts an optional leading `#` followed by 6 (`RRGGBB`), 3 (`RGB`),
/// 2 (`GG`, grayscale) or 1 (`G`, grayscale) hex digits. Short forms expand
/// each digit by repetition, so `#f80` is `#ff8800`.
pub fn parse_hex_color(input: &str) -> Result<Color3B, ColorParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let mut nibbles = Vec::with_capacity(6);
    for c in digits.chars() {
        match c.to_digit(16) {
            Some(n) => nibbles.push(n as u8),
            None => {
                return Err(ColorParseError::InvalidDigit {
                    input: trimmed.to_string(),
                    digit: c,
                });
            }
        }
    }

    let color = match *nibbles.as_slice() {
        [r1, r2, g1, g2, b1, b2] => Color3B::new(r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2),
        [r, g, b] => Color3B::new(r * 17, g * 17, b * 17),
        [hi, lo] => {
            let v = hi << 4 | lo;
            Color3B::new(v, v, v)
        }
        [v] => Color3B::new(v * 17, v * 17, v * 17),
        _ => {
            return Err(ColorParseError::InvalidLength {
                input: trimmed.to_string(),
            });
        }
    };

    Ok(color)
}

/// A name color: one color, or several shown as a cycle or a gradient.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RichColor {
    Single(Color3B),
    /// Colors shown one after another (`#ff0000|#00ff00`)
    Cycle(Vec<Color3B>),
    /// Colors blended across the text (`#ff0000>#0000ff`)
    Gradient(Vec<Color3B>),
}

impl RichColor {
    /// Parse a rich color spec. Empty segments around separators are ignored.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let cycle = trimmed.contains('|');
        let gradient = trimmed.contains('>');

        let separator = match (cycle, gradient) {
            (true, true) => {
                return Err(ColorParseError::MixedSeparators {
                    input: trimmed.to_string(),
                });
            }
            (true, false) => '|',
            (false, true) => '>',
            (false, false) => return parse_hex_color(trimmed).map(Self::Single),
        };

        let colors = trimmed
            .split(separator)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(parse_hex_color)
            .collect::<Result<Vec<_>, _>>()?;

        if colors.len() < 2 {
            return Err(ColorParseError::TooFewColors {
                input: trimmed.to_string(),
            });
        }

        Ok(if cycle {
            Self::Cycle(colors)
        } else {
            Self::Gradient(colors)
        })
    }

    /// The color to use where only one color can be shown.
    pub fn primary(&self) -> Color3B {
        match self {
            Self::Single(c) => *c,
            Self::Cycle(cs) | Self::Gradient(cs) => cs.first().copied().unwrap_or(Color3B::WHITE),
        }
    }

    pub fn is_multiple(&self) -> bool {
        !matches!(self, Self::Single(_))
    }

    pub fn colors(&self) -> &[Color3B] {
        match self {
            Self::Single(c) => std::slice::from_ref(c),
            Self::Cycle(cs) | Self::Gradient(cs) => cs,
        }
    }
}

impl fmt::Display for RichColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = match self {
            Self::Single(c) => return fmt::Display::fmt(c, f),
            Self::Cycle(_) => "|",
            Self::Gradient(_) => ">",
        };

        for (i, c) in self.colors().iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            fmt::Display::fmt(c, f)?;
        }
        Ok(())
    }
}

impl FromStr for RichColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Color3B> for RichColor {
    fn from(c: Color3B) -> Self {
        Self::Single(c)
    }
}

// Both color types travel as their canonical string forms.

impl Serialize for Color3B {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color3B {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for RichColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RichColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_long_form() {
        assert_eq!(parse_hex_color("#FF8000").unwrap(), Color3B::new(255, 128, 0));
        assert_eq!(parse_hex_color("00ff7f").unwrap(), Color3B::new(0, 255, 127));
        assert_eq!(parse_hex_color("  #0a0B0c ").unwrap(), Color3B::new(10, 11, 12));
    }

    #[test]
    fn hex_short_forms() {
        assert_eq!(parse_hex_color("#f80").unwrap(), Color3B::new(255, 136, 0));
        assert_eq!(parse_hex_color("80").unwrap(), Color3B::new(128, 128, 128));
        assert_eq!(parse_hex_color("f").unwrap(), Color3B::WHITE);
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert_eq!(parse_hex_color(""), Err(ColorParseError::Empty));
        assert_eq!(parse_hex_color("   "), Err(ColorParseError::Empty));
        assert!(matches!(
            parse_hex_color("#"),
            Err(ColorParseError::InvalidLength { .. })
        ));
        assert!(matches!(
            parse_hex_color("#ff00"),
            Err(ColorParseError::InvalidLength { .. })
        ));
        assert!(matches!(
            parse_hex_color("#gg0000"),
            Err(ColorParseError::InvalidDigit { digit: 'g', .. })
        ));
        assert!(matches!(
            parse_hex_color("red"),
            Err(ColorParseError::InvalidDigit { digit: 'r', .. })
        ));
    }

    #[test]
    fn rich_single() {
        let c = RichColor::parse("#ff0000").unwrap();
        assert_eq!(c, RichColor::Single(Color3B::new(255, 0, 0)));
        assert!(!c.is_multiple());
        assert_eq!(c.primary(), Color3B::new(255, 0, 0));
    }

    #[test]
    fn rich_cycle_and_gradient() {
        let cycle = RichColor::parse("#ff0000 | #00ff00 | #0000ff").unwrap();
        assert_eq!(
            cycle,
            RichColor::Cycle(vec![
                Color3B::new(255, 0, 0),
                Color3B::new(0, 255, 0),
                Color3B::new(0, 0, 255),
            ])
        );
        assert_eq!(cycle.to_string(), "#ff0000|#00ff00|#0000ff");

        let gradient = RichColor::parse("fff>000").unwrap();
        assert_eq!(
            gradient,
            RichColor::Gradient(vec![Color3B::WHITE, Color3B::BLACK])
        );
        assert_eq!(gradient.primary(), Color3B::WHITE);
        assert_eq!(gradient.to_string(), "#ffffff>#000000");
    }

    #[test]
    fn rich_rejects_bad_input() {
        assert_eq!(RichColor::parse(""), Err(ColorParseError::Empty));
        assert!(matches!(
            RichColor::parse("#ff0000|"),
            Err(ColorParseError::TooFewColors { .. })
        ));
        assert!(matches!(
            RichColor::parse("#ff0000|#00ff00>#0000ff"),
            Err(ColorParseError::MixedSeparators { .. })
        ));
        assert!(matches!(
            RichColor::parse("#ff0000>nope"),
            Err(ColorParseError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&RichColor::parse("#ABCDEF").unwrap()).unwrap();
        assert_eq!(json, "\"#abcdef\"");

        let back: Color3B = serde_json::from_str("\"#102030\"").unwrap();
        assert_eq!(back, Color3B::new(0x10, 0x20, 0x30));

        assert!(serde_json::from_str::<RichColor>("\"#zz\"").is_err());
    }
}
