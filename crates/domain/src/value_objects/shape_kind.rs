//! The closed set of annotation shapes a map board can carry

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Shape drawn for a [`crate::GameMapShape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Square,
    Circle,
    Minus,
    Arrow,
    DoubleArrow,
    Curve,
}

/// How a renderer should draw a shape kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeGeometry {
    Rectangle,
    Ellipse,
    Line,
    Arrow { both_ends: bool },
    Curve,
}

struct ShapeKindEntry {
    kind: ShapeKind,
    key: &'static str,
    label: &'static str,
    geometry: ShapeGeometry,
}

const SHAPE_KINDS: [ShapeKindEntry; 6] = [
    ShapeKindEntry {
        kind: ShapeKind::Square,
        key: "square",
        label: "Square",
        geometry: ShapeGeometry::Rectangle,
    },
    ShapeKindEntry {
        kind: ShapeKind::Circle,
        key: "circle",
        label: "Circle",
        geometry: ShapeGeometry::Ellipse,
    },
    ShapeKindEntry {
        kind: ShapeKind::Minus,
        key: "minus",
        label: "Line",
        geometry: ShapeGeometry::Line,
    },
    ShapeKindEntry {
        kind: ShapeKind::Arrow,
        key: "arrow",
        label: "Arrow",
        geometry: ShapeGeometry::Arrow { both_ends: false },
    },
    ShapeKindEntry {
        kind: ShapeKind::DoubleArrow,
        key: "doubleArrow",
        label: "Double arrow",
        geometry: ShapeGeometry::Arrow { both_ends: true },
    },
    ShapeKindEntry {
        kind: ShapeKind::Curve,
        key: "curve",
        label: "Curve",
        geometry: ShapeGeometry::Curve,
    },
];

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Minus,
        ShapeKind::Arrow,
        ShapeKind::DoubleArrow,
        ShapeKind::Curve,
    ];

    fn entry(self) -> &'static ShapeKindEntry {
        // Table order follows declaration order.
        &SHAPE_KINDS[self as usize]
    }

    /// Stable key used in stored records.
    pub fn key(self) -> &'static str {
        self.entry().key
    }

    pub fn label(self) -> &'static str {
        self.entry().label
    }

    pub fn geometry(self) -> ShapeGeometry {
        self.entry().geometry
    }

    /// Only closed outlines can be filled.
    pub fn supports_fill(self) -> bool {
        matches!(
            self.geometry(),
            ShapeGeometry::Rectangle | ShapeGeometry::Ellipse
        )
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ShapeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "line" {
            return Ok(Self::Minus);
        }
        SHAPE_KINDS
            .iter()
            .find(|entry| entry.key == s)
            .map(|entry| entry.kind)
            .ok_or_else(|| DomainError::parse(format!("Unknown shape kind: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_declaration_order() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.entry().kind, kind);
        }
    }

    #[test]
    fn test_key_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.key().parse::<ShapeKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_line_alias() {
        assert_eq!("line".parse::<ShapeKind>(), Ok(ShapeKind::Minus));
    }

    #[test]
    fn test_unknown_kind() {
        assert!(matches!(
            "hexagon".parse::<ShapeKind>(),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn test_fill_support() {
        assert!(ShapeKind::Square.supports_fill());
        assert!(ShapeKind::Circle.supports_fill());
        assert!(!ShapeKind::Arrow.supports_fill());
        assert_eq!(
            ShapeKind::DoubleArrow.geometry(),
            ShapeGeometry::Arrow { both_ends: true }
        );
    }
}
