//! Oriented integration interval.

use std::fmt;

/// Integration bounds `a` to `b`.
///
/// The interval is oriented: when `a > b` it describes the negatively
/// oriented integral, so every quantity derived from it changes sign.
///
/// # Example
///
/// ```
/// use numforge_montecarlo::Interval;
///
/// let forward = Interval::new(0.0, 2.0);
/// let reversed = Interval::new(2.0, 0.0);
///
/// assert_eq!(forward.signed_width(), 2.0);
/// assert_eq!(reversed.signed_width(), -2.0);
/// assert_eq!(reversed.sampling_bounds(), (0.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub a: f64,
    pub b: f64,
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// `b - a`, negative for reversed bounds.
    pub fn signed_width(&self) -> f64 {
        self.b - self.a
    }

    /// Bounds sorted ascending, the range samples are drawn from.
    pub fn sampling_bounds(&self) -> (f64, f64) {
        if self.is_reversed() {
            (self.b, self.a)
        } else {
            (self.a, self.b)
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    pub fn is_reversed(&self) -> bool {
        self.a > self.b
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate() {
        let interval = Interval::new(1.5, 1.5);
        assert!(interval.is_degenerate());
        assert!(!interval.is_reversed());
        assert_eq!(interval.signed_width(), 0.0);
    }

    #[test]
    fn test_display_keeps_decimal_point() {
        assert_eq!(Interval::new(0.0, 2.0).to_string(), "[0.0, 2.0]");
    }

    #[test]
    fn test_finite() {
        assert!(Interval::new(-1.0, 1.0).is_finite());
        assert!(!Interval::new(f64::NAN, 1.0).is_finite());
        assert!(!Interval::new(0.0, f64::INFINITY).is_finite());
    }
}
