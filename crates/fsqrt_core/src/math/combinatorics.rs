//! Factorial and binomial coefficients in floating-point arithmetic.
//!
//! Both functions accumulate in `T` rather than in integers, so large
//! arguments lose precision (and eventually overflow to ∞) instead of
//! panicking.

use num_traits::Float;

use crate::types::DomainError;

#[inline]
fn cast<T: Float>(n: i64) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// `n!` for `n ≥ 0`; NaN for negative `n`.
///
/// # Examples
/// ```
/// use fsqrt_core::math::combinatorics::factorial;
///
/// assert_eq!(factorial::<f64>(5), 120.0);
/// assert!(factorial::<f64>(-1).is_nan());
/// ```
pub fn factorial<T: Float>(n: i64) -> T {
    if n < 0 {
        return T::nan();
    }
    let mut acc = T::one();
    for i in 2..=n {
        acc = acc * cast(i);
        if acc.is_infinite() {
            break;
        }
    }
    acc
}

/// [`factorial`] with the negative-argument case as an error.
///
/// # Errors
/// `DomainError::NegativeFactorial` for `n < 0`.
pub fn try_factorial<T: Float>(n: i64) -> Result<T, DomainError> {
    if n < 0 {
        return Err(DomainError::NegativeFactorial(n));
    }
    Ok(factorial(n))
}

/// Binomial coefficient `C(n, k)` by the multiplicative formula.
///
/// Uses `C(n, k) = C(n, n − k)` to loop over the smaller side. Returns zero
/// outside `0 ≤ k ≤ n`.
///
/// # Examples
/// ```
/// use fsqrt_core::math::combinatorics::combination;
///
/// assert_eq!(combination::<f64>(5, 2), 10.0);
/// assert_eq!(combination::<f64>(3, 4), 0.0);
/// ```
pub fn combination<T: Float>(n: i64, k: i64) -> T {
    if k < 0 || k > n {
        return T::zero();
    }
    let k = k.min(n - k);
    (1..=k).fold(T::one(), |acc, i| acc * cast(n - i + 1) / cast(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial::<f64>(0), 1.0);
        assert_eq!(factorial::<f64>(1), 1.0);
        assert_eq!(factorial::<f64>(5), 120.0);
        assert_eq!(factorial::<f64>(10), 3_628_800.0);
    }

    #[test]
    fn test_factorial_negative_is_nan() {
        assert!(factorial::<f64>(-1).is_nan());
        assert!(factorial::<f32>(-7).is_nan());
    }

    #[test]
    fn test_factorial_overflows_to_infinity() {
        assert!(factorial::<f64>(171).is_infinite());
        assert!(factorial::<f64>(170).is_finite());
    }

    #[test]
    fn test_factorial_stops_once_infinite() {
        assert!(factorial::<f64>(i64::MAX).is_infinite());
        assert!(factorial::<f32>(i64::MAX).is_infinite());
        assert_eq!(try_factorial::<f64>(i64::MAX), Ok(f64::INFINITY));
    }

    #[test]
    fn test_try_factorial() {
        assert_eq!(try_factorial::<f64>(4), Ok(24.0));
        assert_eq!(
            try_factorial::<f64>(-2),
            Err(DomainError::NegativeFactorial(-2))
        );
    }

    #[test]
    fn test_combination_edges() {
        assert_eq!(combination::<f64>(7, 0), 1.0);
        assert_eq!(combination::<f64>(7, 7), 1.0);
        assert_eq!(combination::<f64>(0, 0), 1.0);
        assert_eq!(combination::<f64>(4, -1), 0.0);
        assert_eq!(combination::<f64>(4, 5), 0.0);
    }

    #[test]
    fn test_combination_known_values() {
        assert_eq!(combination::<f64>(5, 2), 10.0);
        assert_eq!(combination::<f64>(6, 3), 20.0);
        assert_eq!(combination::<f64>(10, 4), 210.0);
        assert_relative_eq!(
            combination::<f64>(52, 5),
            2_598_960.0,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_combination_matches_factorial_ratio() {
        for n in 0..=15_i64 {
            for k in 0..=n {
                let ratio = factorial::<f64>(n) / (factorial::<f64>(k) * factorial::<f64>(n - k));
                assert_relative_eq!(combination::<f64>(n, k), ratio, max_relative = 1e-12);
            }
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_combination_symmetry(n in 0_i64..60, k in 0_i64..60) {
                prop_assume!(k <= n);
                let lhs = combination::<f64>(n, k);
                let rhs = combination::<f64>(n, n - k);
                prop_assert_eq!(lhs, rhs);
            }

            #[test]
            fn test_combination_unit_edges(n in 0_i64..200) {
                prop_assert_eq!(combination::<f64>(n, 0), 1.0);
                prop_assert_eq!(combination::<f64>(n, n), 1.0);
            }

            #[test]
            fn test_pascal_rule(n in 1_i64..40, k in 1_i64..40) {
                prop_assume!(k < n);
                let lhs = combination::<f64>(n, k);
                let rhs = combination::<f64>(n - 1, k - 1) + combination::<f64>(n - 1, k);
                assert_relative_eq!(lhs, rhs, max_relative = 1e-10);
            }
        }
    }
}
