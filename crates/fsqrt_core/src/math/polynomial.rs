//! Polynomials without constant term, `p(x) = Σ cᵢ·x^(i+1)`.

use std::fmt;

use num_traits::Float;
use serde::Serialize;

/// Evaluate `Σ coefficients[i]·x^(i+1)` by direct summation.
///
/// An empty coefficient slice evaluates to zero.
///
/// # Examples
/// ```
/// use fsqrt_core::math::polynomial::evaluate_polynomial;
///
/// // 2x + 3x²
/// assert_eq!(evaluate_polynomial(&[2.0, 3.0], 1.0), 5.0);
/// assert_eq!(evaluate_polynomial(&[2.0, 3.0], 2.0), 16.0);
/// ```
pub fn evaluate_polynomial<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .enumerate()
        .fold(T::zero(), |sum, (i, &c)| sum + c * x.powi(i as i32 + 1))
}

/// Coefficient vector of a polynomial with zero constant term.
///
/// `coefficients()[i]` multiplies `x^(i+1)`.
///
/// `Display` renders `c₁x^{1} + c₂x^{2} + …` with four decimals unless a
/// precision is given (`format!("{:.2}", p)`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Polynomial<T: Float> {
    coefficients: Vec<T>,
}

impl<T: Float> Polynomial<T> {
    pub fn new(coefficients: Vec<T>) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Highest power of `x` carried (zero for an empty polynomial).
    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Whether every coefficient is a finite real.
    pub fn is_finite(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_finite())
    }

    pub fn evaluate(&self, x: T) -> T {
        evaluate_polynomial(&self.coefficients, x)
    }

    /// `p(p(x))`.
    pub fn compose_twice(&self, x: T) -> T {
        self.evaluate(self.evaluate(x))
    }
}

impl<T: Float> From<Vec<T>> for Polynomial<T> {
    fn from(coefficients: Vec<T>) -> Self {
        Self::new(coefficients)
    }
}

impl<T: Float> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Coefficients could not be calculated.");
        }
        let precision = f.precision().unwrap_or(4);
        for (i, c) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            let c = c.to_f64().unwrap_or(f64::NAN);
            write!(f, "{:.*}x^{{{}}}", precision, c, i + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_evaluate_linear_plus_quadratic() {
        for &x in &[-2.0_f64, -0.5, 0.0, 1.0, 2.0, 3.5] {
            assert_relative_eq!(
                evaluate_polynomial(&[2.0, 3.0], x),
                2.0 * x + 3.0 * x * x,
                max_relative = 1e-15
            );
        }
        assert_eq!(evaluate_polynomial(&[2.0, 3.0], 1.0), 5.0);
        assert_eq!(evaluate_polynomial(&[2.0, 3.0], 2.0), 16.0);
    }

    #[test]
    fn test_evaluate_empty_is_zero() {
        assert_eq!(evaluate_polynomial::<f64>(&[], 7.0), 0.0);
    }

    #[test]
    fn test_non_finite_coefficient_propagates() {
        assert!(evaluate_polynomial(&[1.0, f64::NAN], 0.5).is_nan());
        assert!(evaluate_polynomial(&[f64::INFINITY], 0.5).is_infinite());
    }

    #[test]
    fn test_compose_twice() {
        // p(x) = 2x, p(p(x)) = 4x
        let p = Polynomial::new(vec![2.0_f64]);
        assert_eq!(p.compose_twice(1.5), 6.0);

        // p(x) = x + x², p(p(x)) = (x + x²) + (x + x²)²
        let p = Polynomial::new(vec![1.0_f64, 1.0]);
        let x = 0.3;
        let inner = x + x * x;
        assert_relative_eq!(p.compose_twice(x), inner + inner * inner, max_relative = 1e-15);
    }

    #[test]
    fn test_display_four_decimals() {
        let p = Polynomial::new(vec![2.0_f64, 1.0 / 6.0, -1.0 / 90.0]);
        assert_eq!(
            format!("{}", p),
            "2.0000x^{1} + 0.1667x^{2} + -0.0111x^{3}"
        );
    }

    #[test]
    fn test_display_custom_precision() {
        let p = Polynomial::new(vec![0.5_f64, 0.3]);
        assert_eq!(format!("{:.1}", p), "0.5x^{1} + 0.3x^{2}");
    }

    #[test]
    fn test_display_empty() {
        let p: Polynomial<f64> = Polynomial::new(Vec::new());
        assert_eq!(format!("{}", p), "Coefficients could not be calculated.");
    }

    #[test]
    fn test_degree_and_finiteness() {
        let p = Polynomial::from(vec![1.0_f64, f64::NAN, 3.0]);
        assert_eq!(p.degree(), 3);
        assert!(!p.is_finite());
        assert!(Polynomial::from(vec![1.0_f64, 2.0]).is_finite());
        assert!(!p.is_empty());
        assert!(Polynomial::<f64>::new(vec![]).is_empty());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let p = Polynomial::new(vec![1.0_f64, 0.5]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[1.0,0.5]");
    }
}
