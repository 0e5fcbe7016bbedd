use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Colors a recipe can assign particles to.
/// The set matches the named colors the simulator's recipe loader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleColor {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl ParticleColor {
    /// Lowercase label as written in recipe files
    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
        }
    }

    /// All colors, in declaration order
    pub fn all() -> [Self; 8] {
        [
            Self::Black,
            Self::White,
            Self::Red,
            Self::Green,
            Self::Blue,
            Self::Yellow,
            Self::Magenta,
            Self::Cyan,
        ]
    }
}

impl fmt::Display for ParticleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParticleColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Self::Black),
            "white" => Ok(Self::White),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "yellow" => Ok(Self::Yellow),
            "magenta" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            _ => Err(format!("\"{s}\" is not a valid color")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_lowercase() {
        for color in ParticleColor::all() {
            let label = color.name();
            assert_eq!(label, label.to_lowercase());
            assert_eq!(color.to_string(), label);
        }
    }

    #[test]
    fn test_from_str_roundtrip() {
        for color in ParticleColor::all() {
            assert_eq!(color.name().parse::<ParticleColor>(), Ok(color));
        }
    }

    #[test]
    fn test_unknown_color_rejected() {
        assert!("pink".parse::<ParticleColor>().is_err());
        assert!("Red".parse::<ParticleColor>().is_err());
        assert!("".parse::<ParticleColor>().is_err());
    }
}
