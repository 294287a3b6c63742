//! Position on a map board, in percent of the board's width and height

use super::clamp_finite;

/// A board position with both axes clamped to `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Create a point, clamping each axis to the nearest bound.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_finite(x, Self::MIN, Self::MAX),
            y: clamp_finite(y, Self::MIN, Self::MAX),
        }
    }

    /// The board centre, used for freshly placed shapes.
    pub fn center() -> Self {
        Self::new(50.0, 50.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Offset by a delta; the result stays on the board.
    pub fn moved(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(Self::MIN, Self::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_range_kept() {
        let point = Point::new(12.5, 99.0);
        assert_eq!(point.x(), 12.5);
        assert_eq!(point.y(), 99.0);
    }

    #[test]
    fn test_below_range_clamps_to_min() {
        let point = Point::new(-1.0, -500.0);
        assert_eq!(point.x(), Point::MIN);
        assert_eq!(point.y(), Point::MIN);
    }

    #[test]
    fn test_above_range_clamps_to_max() {
        let point = Point::new(101.0, 1e9);
        assert_eq!(point.x(), Point::MAX);
        assert_eq!(point.y(), Point::MAX);
    }

    #[test]
    fn test_nan_becomes_min() {
        assert_eq!(Point::new(f64::NAN, 3.0).x(), Point::MIN);
    }

    #[test]
    fn test_moved_stays_on_board() {
        let point = Point::new(95.0, 5.0).moved(10.0, -10.0);
        assert_eq!(point, Point::new(100.0, 0.0));
    }
}
