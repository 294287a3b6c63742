//! Stroke thickness for map shapes

use super::clamp_finite;

/// Stroke thickness clamped to `[1, 10]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thickness(f64);

impl Thickness {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 10.0;
    pub const STEP: f64 = 1.0;

    pub fn new(value: f64) -> Self {
        Self(clamp_finite(value, Self::MIN, Self::MAX))
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn thickened(&self) -> Self {
        Self::new(self.0 + Self::STEP)
    }

    pub fn thinned(&self) -> Self {
        Self::new(self.0 - Self::STEP)
    }
}

impl Default for Thickness {
    fn default() -> Self {
        Self::new(3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_both_ends() {
        assert_eq!(Thickness::new(0.0).value(), Thickness::MIN);
        assert_eq!(Thickness::new(11.0).value(), Thickness::MAX);
        assert_eq!(Thickness::new(4.0).value(), 4.0);
    }

    #[test]
    fn test_step_saturates() {
        assert_eq!(Thickness::new(10.0).thickened().value(), 10.0);
        assert_eq!(Thickness::new(1.0).thinned().value(), 1.0);
        assert_eq!(Thickness::new(5.0).thickened().value(), 6.0);
    }
}
