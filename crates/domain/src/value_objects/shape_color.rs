//! Stroke/fill colors for map shapes, cycled by a single "next color" control

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeColor {
    #[default]
    Default,
    Red,
    Blue,
    Green,
    Black,
    White,
}

struct ShapeColorEntry {
    color: ShapeColor,
    key: &'static str,
    hex: &'static str,
    next: ShapeColor,
}

const SHAPE_COLORS: [ShapeColorEntry; 6] = [
    ShapeColorEntry {
        color: ShapeColor::Default,
        key: "default",
        hex: "#f97316",
        next: ShapeColor::Red,
    },
    ShapeColorEntry {
        color: ShapeColor::Red,
        key: "red",
        hex: "#ef4444",
        next: ShapeColor::Blue,
    },
    ShapeColorEntry {
        color: ShapeColor::Blue,
        key: "blue",
        hex: "#3b82f6",
        next: ShapeColor::Green,
    },
    ShapeColorEntry {
        color: ShapeColor::Green,
        key: "green",
        hex: "#22c55e",
        next: ShapeColor::Black,
    },
    ShapeColorEntry {
        color: ShapeColor::Black,
        key: "black",
        hex: "#000000",
        next: ShapeColor::White,
    },
    ShapeColorEntry {
        color: ShapeColor::White,
        key: "white",
        hex: "#ffffff",
        next: ShapeColor::Default,
    },
];

impl ShapeColor {
    pub const ALL: [ShapeColor; 6] = [
        ShapeColor::Default,
        ShapeColor::Red,
        ShapeColor::Blue,
        ShapeColor::Green,
        ShapeColor::Black,
        ShapeColor::White,
    ];

    fn entry(self) -> &'static ShapeColorEntry {
        &SHAPE_COLORS[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.entry().key
    }

    /// CSS color used when drawing.
    pub fn hex(self) -> &'static str {
        self.entry().hex
    }

    /// The following color in the cycle; white wraps back to default.
    pub fn next(self) -> Self {
        self.entry().next
    }
}

impl fmt::Display for ShapeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ShapeColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SHAPE_COLORS
            .iter()
            .find(|entry| entry.key == s)
            .map(|entry| entry.color)
            .ok_or_else(|| DomainError::parse(format!("Unknown shape color: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_declaration_order() {
        for color in ShapeColor::ALL {
            assert_eq!(color.entry().color, color);
        }
    }

    #[test]
    fn test_next_visits_every_color_then_wraps() {
        let mut color = ShapeColor::Default;
        let mut seen = Vec::new();
        for _ in 0..ShapeColor::ALL.len() {
            seen.push(color);
            color = color.next();
        }
        assert_eq!(seen, ShapeColor::ALL.to_vec());
        assert_eq!(color, ShapeColor::Default);
    }

    #[test]
    fn test_parse() {
        assert_eq!("blue".parse::<ShapeColor>(), Ok(ShapeColor::Blue));
        assert!("purple".parse::<ShapeColor>().is_err());
    }
}
