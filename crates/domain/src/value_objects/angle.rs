//! Rotation angle for map shapes
//!
//! Unlike the other bounded values, an angle is cyclic: stepping past the
//! maximum wraps back to the minimum so a rotate control can spin forever.
//! Values below the minimum clamp to it.

/// Rotation in degrees within `[0, 359]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle(f64);

impl Angle {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 359.0;
    pub const STEP: f64 = 22.5;

    /// Overflow wraps to [`Angle::MIN`]; underflow clamps to it.
    pub fn new(value: f64) -> Self {
        if value.is_nan() || value < Self::MIN || value > Self::MAX {
            Self(Self::MIN)
        } else {
            Self(value)
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Rotate one step clockwise.
    pub fn rotated(&self) -> Self {
        Self::new(self.0 + Self::STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_wraps_to_min() {
        assert_eq!(Angle::new(Angle::MAX + 1.0).value(), Angle::MIN);
    }

    #[test]
    fn test_underflow_clamps_to_min() {
        assert_eq!(Angle::new(-22.5).value(), Angle::MIN);
    }

    #[test]
    fn test_max_is_kept() {
        assert_eq!(Angle::new(359.0).value(), 359.0);
    }

    #[test]
    fn test_rotation_cycles() {
        let mut angle = Angle::default();
        for _ in 0..15 {
            angle = angle.rotated();
        }
        assert_eq!(angle.value(), 337.5);
        assert_eq!(angle.rotated().value(), 0.0);
    }
}
