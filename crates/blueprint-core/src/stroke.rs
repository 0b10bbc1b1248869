//! Line style, arrow direction and rank direction definitions.
//!
//! # Overview
//!
//! - [`LineStyle`]: edge line pattern (solid, dashed, dotted, bold)
//! - [`EdgeDirection`]: which end(s) of an edge carry an arrowhead
//! - [`Direction`]: rank direction of the whole diagram
//!
//! Every type parses from and maps to the attribute values Graphviz uses,
//! so the DOT exporter never has to translate names.

use std::{fmt, str::FromStr};

/// Visual pattern of an edge line.
///
/// | Variant  | DOT `style` |
/// |----------|-------------|
/// | `Solid`  | (omitted)   |
/// | `Dashed` | `dashed`    |
/// | `Dotted` | `dotted`    |
/// | `Bold`   | `bold`      |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Thick solid line
    Bold,
}

impl LineStyle {
    /// Returns the DOT `style` value, or `None` for solid lines.
    pub fn to_dot_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("dashed"),
            Self::Dotted => Some("dotted"),
            Self::Bold => Some("bold"),
        }
    }
}

impl FromStr for LineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "bold" => Ok(Self::Bold),
            _ => Err(format!(
                "invalid line style `{s}`, valid values: solid, dashed, dotted, bold"
            )),
        }
    }
}

/// Which end of an edge is drawn with an arrowhead.
///
/// `Back` keeps the declared source/target order while pointing the arrow at
/// the source. UML extend relations use it so the arrow lands on the base use
/// case.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    /// Arrowhead at the target (default)
    #[default]
    Forward,
    /// Arrowhead at the source
    Back,
    /// Arrowheads at both ends
    Both,
    /// No arrowheads
    None,
}

impl EdgeDirection {
    /// Returns the DOT `dir` value, or `None` for the Graphviz default.
    pub fn to_dot_value(self) -> Option<&'static str> {
        match self {
            Self::Forward => None,
            Self::Back => Some("back"),
            Self::Both => Some("both"),
            Self::None => Some("none"),
        }
    }
}

/// Rank direction of a diagram.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top to bottom (default)
    #[default]
    TopToBottom,
    /// Bottom to top
    BottomToTop,
    /// Left to right
    LeftToRight,
    /// Right to left
    RightToLeft,
}

impl Direction {
    /// Returns the DOT `rankdir` value.
    pub fn to_dot_value(self) -> &'static str {
        match self {
            Self::TopToBottom => "TB",
            Self::BottomToTop => "BT",
            Self::LeftToRight => "LR",
            Self::RightToLeft => "RL",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TB" => Ok(Self::TopToBottom),
            "BT" => Ok(Self::BottomToTop),
            "LR" => Ok(Self::LeftToRight),
            "RL" => Ok(Self::RightToLeft),
            _ => Err(format!(
                "invalid direction `{s}`, valid values: TB, BT, LR, RL"
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_dot_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_style_from_str() {
        assert_eq!("solid".parse::<LineStyle>(), Ok(LineStyle::Solid));
        assert_eq!("dashed".parse::<LineStyle>(), Ok(LineStyle::Dashed));
        assert_eq!("dotted".parse::<LineStyle>(), Ok(LineStyle::Dotted));
        assert_eq!("bold".parse::<LineStyle>(), Ok(LineStyle::Bold));
        assert!("wavy".parse::<LineStyle>().is_err());
    }

    #[test]
    fn test_line_style_dot_value() {
        assert_eq!(LineStyle::Solid.to_dot_value(), None);
        assert_eq!(LineStyle::Dashed.to_dot_value(), Some("dashed"));
        assert_eq!(LineStyle::Bold.to_dot_value(), Some("bold"));
    }

    #[test]
    fn test_edge_direction_dot_value() {
        assert_eq!(EdgeDirection::default().to_dot_value(), None);
        assert_eq!(EdgeDirection::Back.to_dot_value(), Some("back"));
        assert_eq!(EdgeDirection::Both.to_dot_value(), Some("both"));
        assert_eq!(EdgeDirection::None.to_dot_value(), Some("none"));
    }

    #[test]
    fn test_direction_round_trip() {
        for dir in ["TB", "BT", "LR", "RL"] {
            let parsed: Direction = dir.parse().unwrap();
            assert_eq!(parsed.to_string(), dir);
        }
        assert!("XY".parse::<Direction>().is_err());
    }
}
