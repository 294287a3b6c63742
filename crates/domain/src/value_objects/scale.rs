//! Horizontal and vertical scale for map shapes

use super::clamp_finite;

/// Which axis a zoom step applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleAxis {
    X,
    Y,
    Both,
}

/// Shape scale with both axes clamped to `[100, 10000]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    x: f64,
    y: f64,
}

impl Scale {
    pub const MIN: f64 = 100.0;
    pub const MAX: f64 = 10000.0;
    pub const STEP: f64 = 50.0;

    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_finite(x, Self::MIN, Self::MAX),
            y: clamp_finite(y, Self::MIN, Self::MAX),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Grow by one step along `axis`.
    pub fn zoomed_in(&self, axis: ScaleAxis) -> Self {
        self.stepped(axis, Self::STEP)
    }

    /// Shrink by one step along `axis`.
    pub fn zoomed_out(&self, axis: ScaleAxis) -> Self {
        self.stepped(axis, -Self::STEP)
    }

    fn stepped(&self, axis: ScaleAxis, delta: f64) -> Self {
        match axis {
            ScaleAxis::X => Self::new(self.x + delta, self.y),
            ScaleAxis::Y => Self::new(self.x, self.y + delta),
            ScaleAxis::Both => Self::new(self.x + delta, self.y + delta),
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(1000.0, 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_each_axis() {
        let scale = Scale::new(10.0, 20000.0);
        assert_eq!(scale.x(), Scale::MIN);
        assert_eq!(scale.y(), Scale::MAX);
    }

    #[test]
    fn test_zoom_single_axis() {
        let scale = Scale::new(500.0, 500.0);
        assert_eq!(scale.zoomed_in(ScaleAxis::X), Scale::new(550.0, 500.0));
        assert_eq!(scale.zoomed_out(ScaleAxis::Y), Scale::new(500.0, 450.0));
    }

    #[test]
    fn test_zoom_both_axes() {
        let scale = Scale::new(500.0, 700.0).zoomed_in(ScaleAxis::Both);
        assert_eq!(scale, Scale::new(550.0, 750.0));
    }

    #[test]
    fn test_zoom_saturates_at_bounds() {
        let scale = Scale::new(100.0, 10000.0);
        assert_eq!(scale.zoomed_out(ScaleAxis::X).x(), 100.0);
        assert_eq!(scale.zoomed_in(ScaleAxis::Y).y(), 10000.0);
    }
}
