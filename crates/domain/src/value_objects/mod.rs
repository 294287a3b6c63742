//! Value objects - Immutable objects defined by their attributes
//!
//! Numeric value objects never reject input. [`Point`], [`Thickness`] and
//! [`Scale`] clamp to their range; [`Angle`] and [`Progress`] are cyclic and
//! wrap back to their minimum on overflow.

mod angle;
mod point;
mod progress;
mod scale;
mod shape_color;
mod shape_kind;
mod thickness;

pub use angle::Angle;
pub use point::Point;
pub use progress::Progress;
pub use scale::{Scale, ScaleAxis};
pub use shape_color::ShapeColor;
pub use shape_kind::{ShapeGeometry, ShapeKind};
pub use thickness::Thickness;

/// Clamp into `[min, max]`, mapping NaN to `min`.
pub(crate) fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
