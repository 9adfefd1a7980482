//! The fixed integrand `f(x) = x²`.

/// Display form of the integrand.
pub const FORMULA: &str = "f(x)=x^2";

#[inline]
pub fn square(x: f64) -> f64 {
    x * x
}

/// Antiderivative `x³/3` of [`square`].
#[inline]
pub fn square_antiderivative(x: f64) -> f64 {
    x * x * x / 3.0
}

/// Closed-form `∫ₐᵇ x² dx = (b³ − a³)/3`, signed by orientation.
pub fn exact_integral(a: f64, b: f64) -> f64 {
    (b * b * b - a * a * a) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_integral() {
        assert_eq!(exact_integral(0.0, 2.0), 8.0 / 3.0);
        assert_eq!(exact_integral(2.0, 0.0), -8.0 / 3.0);
        assert_eq!(exact_integral(1.25, 1.25), 0.0);
    }

    #[test]
    fn test_antiderivative_matches_exact() {
        let (a, b) = (-1.0, 3.0);
        let diff = square_antiderivative(b) - square_antiderivative(a);
        assert!((diff - exact_integral(a, b)).abs() < 1e-12);
    }
}
