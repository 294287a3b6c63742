//! Reveal fraction for drawing a shape partially

/// Drawing range in percent within `[12.5, 100]`, cyclic like [`super::Angle`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress(f64);

impl Progress {
    pub const MIN: f64 = 12.5;
    pub const MAX: f64 = 100.0;
    pub const STEP: f64 = 12.5;

    /// Overflow wraps to [`Progress::MIN`]; underflow clamps to it.
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

    pub fn advanced(&self) -> Self {
        Self::new(self.0 + Self::STEP)
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_wraps_to_min() {
        assert_eq!(Progress::new(Progress::MAX + 1.0).value(), Progress::MIN);
    }

    #[test]
    fn test_underflow_clamps_to_min() {
        assert_eq!(Progress::new(0.0).value(), Progress::MIN);
    }

    #[test]
    fn test_advance_wraps_after_full() {
        assert_eq!(Progress::default().value(), 100.0);
        assert_eq!(Progress::default().advanced().value(), 12.5);
        assert_eq!(Progress::new(87.5).advanced().value(), 100.0);
    }
}
