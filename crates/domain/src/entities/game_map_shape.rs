//! Vector annotation drawn over a map board

use crate::collections::HasId;
use crate::ids::GameMapShapeId;
use crate::value_objects::{
    Angle, Point, Progress, Scale, ScaleAxis, ShapeColor, ShapeKind, Thickness,
};

/// A positioned, styled shape
///
/// Every numeric property is a bounded value object, so any combination of
/// fields is a valid shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GameMapShape {
    id: GameMapShapeId,
    name: ShapeKind,
    thickness: Thickness,
    color: ShapeColor,
    fill: bool,
    scale: Scale,
    angle: Angle,
    /// Horizontal mirror
    flip: bool,
    /// How much of the outline is revealed
    progress: Progress,
    point: Point,
}

impl GameMapShape {
    /// A fresh shape at the board centre with default styling.
    pub fn new(name: ShapeKind) -> Self {
        Self {
            id: GameMapShapeId::new(),
            name,
            thickness: Thickness::default(),
            color: ShapeColor::default(),
            fill: false,
            scale: Scale::default(),
            angle: Angle::default(),
            flip: false,
            progress: Progress::default(),
            point: Point::center(),
        }
    }

    /// Reconstruct from stored data
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: GameMapShapeId,
        name: ShapeKind,
        thickness: Thickness,
        color: ShapeColor,
        fill: bool,
        scale: Scale,
        angle: Angle,
        flip: bool,
        progress: Progress,
        point: Point,
    ) -> Self {
        Self {
            id,
            name,
            thickness,
            color,
            fill,
            scale,
            angle,
            flip,
            progress,
            point,
        }
    }

    // Read-only accessors

    pub fn id(&self) -> &GameMapShapeId {
        &self.id
    }

    pub fn name(&self) -> ShapeKind {
        self.name
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness
    }

    pub fn color(&self) -> ShapeColor {
        self.color
    }

    pub fn fill(&self) -> bool {
        self.fill
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn flip(&self) -> bool {
        self.flip
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn point(&self) -> Point {
        self.point
    }

    // Builder-style methods

    pub fn with_name(mut self, name: ShapeKind) -> Self {
        self.name = name;
        self
    }

    pub fn with_thickness(mut self, thickness: Thickness) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_color(mut self, color: ShapeColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_angle(mut self, angle: Angle) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_point(mut self, point: Point) -> Self {
        self.point = point;
        self
    }

    // Controls

    pub fn next_colored(&self) -> Self {
        self.clone().with_color(self.color.next())
    }

    pub fn rotated(&self) -> Self {
        self.clone().with_angle(self.angle.rotated())
    }

    pub fn flipped(&self) -> Self {
        self.clone().with_flip(!self.flip)
    }

    pub fn revealed_further(&self) -> Self {
        self.clone().with_progress(self.progress.advanced())
    }

    pub fn zoomed_in(&self, axis: ScaleAxis) -> Self {
        self.clone().with_scale(self.scale.zoomed_in(axis))
    }

    pub fn zoomed_out(&self, axis: ScaleAxis) -> Self {
        self.clone().with_scale(self.scale.zoomed_out(axis))
    }

    pub fn thickened(&self) -> Self {
        self.clone().with_thickness(self.thickness.thickened())
    }

    pub fn thinned(&self) -> Self {
        self.clone().with_thickness(self.thickness.thinned())
    }

    /// Toggle fill; shapes without a closed outline stay unfilled.
    pub fn fill_toggled(&self) -> Self {
        let fill = !self.fill && self.name.supports_fill();
        self.clone().with_fill(fill)
    }

    /// Copy with a newly minted id.
    pub fn duplicated(&self) -> Self {
        Self {
            id: GameMapShapeId::new(),
            ..self.clone()
        }
    }
}

impl HasId for GameMapShape {
    type Id = GameMapShapeId;

    fn id(&self) -> &GameMapShapeId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shape_defaults() {
        let shape = GameMapShape::new(ShapeKind::Arrow);
        assert_eq!(shape.name(), ShapeKind::Arrow);
        assert_eq!(shape.thickness().value(), 3.0);
        assert_eq!(shape.scale(), Scale::new(1000.0, 1000.0));
        assert_eq!(shape.angle().value(), 0.0);
        assert_eq!(shape.progress().value(), 100.0);
        assert_eq!(shape.point(), Point::new(50.0, 50.0));
        assert_eq!(shape.color(), ShapeColor::Default);
        assert!(!shape.fill());
        assert!(!shape.flip());
    }

    #[test]
    fn test_controls_keep_id() {
        let shape = GameMapShape::new(ShapeKind::Square);
        let edited = shape
            .next_colored()
            .rotated()
            .flipped()
            .revealed_further()
            .zoomed_in(ScaleAxis::X)
            .thickened();
        assert_eq!(edited.id(), shape.id());
        assert_eq!(edited.color(), ShapeColor::Red);
        assert_eq!(edited.angle().value(), 22.5);
        assert!(edited.flip());
        assert_eq!(edited.progress().value(), 12.5);
        assert_eq!(edited.scale().x(), 1050.0);
        assert_eq!(edited.thickness().value(), 4.0);
    }

    #[test]
    fn test_fill_toggle_respects_kind() {
        assert!(GameMapShape::new(ShapeKind::Circle).fill_toggled().fill());
        assert!(!GameMapShape::new(ShapeKind::Curve).fill_toggled().fill());
        let filled = GameMapShape::new(ShapeKind::Square).fill_toggled();
        assert!(!filled.fill_toggled().fill());
    }

    #[test]
    fn test_duplicated_mints_new_id() {
        let shape = GameMapShape::new(ShapeKind::Minus).rotated();
        let copy = shape.duplicated();
        assert_ne!(copy.id(), shape.id());
        assert_eq!(copy.angle(), shape.angle());
    }
}
