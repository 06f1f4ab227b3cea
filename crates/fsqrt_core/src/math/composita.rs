//! Composita coefficient recurrence for polynomial functional square roots.
//!
//! Write the composita of a power series `g` as `G(n, k)`, the coefficient of
//! `xⁿ` in `g(x)ᵏ`. Composition multiplies compositae like triangular
//! matrices, so `f∘f = F` becomes
//!
//! ```text
//! F(n, k) = Σ_{m=k}^{n} A(n, m)·A(m, k)
//! ```
//!
//! where `A` is the composita of the unknown `f`. Pulling the `m = k` and
//! `m = n` terms out of the sum and using `A(m, m) = f1^(m/2)` gives
//!
//! ```text
//! A(n, k) = (F(n, k) − Σ_{m=k+1}^{n−1} A(n, m)·A(m, k)) / (f1^(n/2) + f1^(k/2))
//! ```
//!
//! and the coefficients of `f` are `A(n, 1)` for `n = 1..=max_degree`.
//!
//! The target composita is weighted by `C(k, n − k)·a^(2k−n)·b^(n−k)`, which
//! is the composita of the series `a·x + b·x²`; see [`target`].

use std::collections::HashMap;

use num_traits::Float;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::math::combinatorics::combination;
use crate::math::polynomial::Polynomial;
use crate::traits::FunctionalSquareRoot;
use crate::types::DomainError;

/// Parameters fixed for the lifetime of one solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositaParams<T> {
    /// Seed of the diagonal, `A(n, n) = f1^(n/2)`
    pub f1: T,
    pub a: T,
    pub b: T,
}

impl<T: Float> CompositaParams<T> {
    pub fn new(f1: T, a: T, b: T) -> Self {
        Self { f1, a, b }
    }
}

/// Target series whose composita weights the recurrence: `a·x + b·x²`.
#[inline]
pub fn target<T: Float>(x: T, a: T, b: T) -> T {
    a * x + b * x * x
}

#[inline]
fn half_power<T: Float>(base: T, n: usize) -> T {
    let exponent = T::from(n).unwrap_or_else(T::nan) / (T::one() + T::one());
    base.powf(exponent)
}

/// Target composita term `C(k, n − k)·a^(2k−n)·b^(n−k)`; zero when `k > n`.
///
/// The binomial is deliberately `C(k, n − k)`, not `C(n, k)`: it counts the
/// ways `k` factors of `a·x + b·x²` contribute to `xⁿ`.
pub fn f_composita<T: Float>(n: usize, k: usize, a: T, b: T) -> T {
    if k > n {
        return T::zero();
    }
    let (n, k) = (n as i64, k as i64);
    let coeff: T = combination(k, n - k);
    coeff * a.powi((2 * k - n) as i32) * b.powi((n - k) as i32)
}

/// Memoized `A(n, k)` table for one `(f1, a, b)`.
///
/// Parameters cannot change after construction, so memo entries are never
/// reused across parameter sets. Build a new recurrence for new parameters.
///
/// # Examples
/// ```
/// use fsqrt_core::math::composita::{CompositaParams, CompositaRecurrence};
///
/// let mut table = CompositaRecurrence::new(CompositaParams::new(4.0_f64, 4.0, 1.0));
/// assert_eq!(table.a_composita(2, 2), 4.0);
/// assert!((table.a_composita(2, 1) - 1.0 / 6.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct CompositaRecurrence<T: Float> {
    params: CompositaParams<T>,
    memo: HashMap<(usize, usize), T>,
    degenerate: Option<(usize, usize)>,
}

impl<T: Float> CompositaRecurrence<T> {
    pub fn new(params: CompositaParams<T>) -> Self {
        Self {
            params,
            memo: HashMap::new(),
            degenerate: None,
        }
    }

    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// First `(n, k)` whose denominator was exactly zero, if any.
    pub fn degenerate(&self) -> Option<(usize, usize)> {
        self.degenerate
    }

    /// `A(n, k)`: the coefficient of `xⁿ` in `f(x)ᵏ`.
    ///
    /// A zero denominator is not special-cased; the division yields ±∞ or
    /// NaN and the pair is remembered in [`degenerate`](Self::degenerate).
    pub fn a_composita(&mut self, n: usize, k: usize) -> T {
        if let Some(&known) = self.memo.get(&(n, k)) {
            return known;
        }

        let CompositaParams { f1, a, b } = self.params;
        let result = if n == k {
            half_power(f1, n)
        } else if n < k {
            T::zero()
        } else {
            let mut sum_term = T::zero();
            for m in (k + 1)..n {
                sum_term = sum_term + self.a_composita(n, m) * self.a_composita(m, k);
            }

            let denominator = half_power(f1, n) + half_power(f1, k);
            if denominator == T::zero() && self.degenerate.is_none() {
                debug!(n, k, "composita denominator is zero");
                self.degenerate = Some((n, k));
            }
            (f_composita(n, k, a, b) - sum_term) / denominator
        };

        self.memo.insert((n, k), result);
        result
    }

    /// Coefficients `A(1, 1), A(2, 1), ..., A(max_degree, 1)`.
    pub fn coefficients(&mut self, max_degree: usize) -> Vec<T> {
        let coefficients: Vec<T> = (1..=max_degree).map(|n| self.a_composita(n, 1)).collect();
        debug!(
            max_degree,
            memo_entries = self.memo.len(),
            degenerate = ?self.degenerate,
            "composita coefficients computed"
        );
        coefficients
    }
}

/// `A(n, k)` for `(f1, a, b)` with a fresh, call-scoped memo.
pub fn compute_a_composita<T: Float>(n: usize, k: usize, f1: T, a: T, b: T) -> T {
    CompositaRecurrence::new(CompositaParams::new(f1, a, b)).a_composita(n, k)
}

/// Coefficients of `f(x) = Σ cᵢ·x^(i+1)`, `i < max_degree`.
///
/// Every call starts from an empty memo. Entries may be NaN or ±∞ on
/// degenerate input (for example `f1 ≤ 0`).
///
/// # Examples
/// ```
/// use fsqrt_core::math::composita::compute_coefficients;
///
/// // f(x) = 2x solves f(f(x)) = 4x
/// assert_eq!(compute_coefficients(3, 4.0_f64, 4.0, 0.0), vec![2.0, 0.0, 0.0]);
/// ```
pub fn compute_coefficients<T: Float>(max_degree: usize, f1: T, a: T, b: T) -> Vec<T> {
    CompositaRecurrence::new(CompositaParams::new(f1, a, b)).coefficients(max_degree)
}

/// [`compute_coefficients`] with non-finite results tagged.
///
/// # Errors
/// - `DomainError::DegenerateDenominator`: some denominator was exactly zero
/// - `DomainError::NonFinite`: some coefficient is NaN or ±∞ for another reason
pub fn try_compute_coefficients<T: Float>(
    max_degree: usize,
    f1: T,
    a: T,
    b: T,
) -> Result<Vec<T>, DomainError> {
    let mut recurrence = CompositaRecurrence::new(CompositaParams::new(f1, a, b));
    let coefficients = recurrence.coefficients(max_degree);

    if let Some((n, k)) = recurrence.degenerate() {
        return Err(DomainError::DegenerateDenominator { n, k });
    }
    if let Some(i) = coefficients.iter().position(|c| !c.is_finite()) {
        return Err(DomainError::NonFinite { degree: i + 1 });
    }
    Ok(coefficients)
}

/// A solved polynomial together with the parameters it was solved for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositaSolution<T: Float> {
    pub params: CompositaParams<T>,
    pub polynomial: Polynomial<T>,
}

impl<T: Float> CompositaSolution<T> {
    /// Solve for `max_degree` coefficients.
    pub fn solve(max_degree: usize, params: CompositaParams<T>) -> Self {
        let polynomial = CompositaRecurrence::new(params)
            .coefficients(max_degree)
            .into();
        Self { params, polynomial }
    }

    pub fn coefficients(&self) -> &[T] {
        self.polynomial.coefficients()
    }
}

impl<T: Float> FunctionalSquareRoot<T> for CompositaSolution<T> {
    fn target(&self, x: T) -> T {
        target(x, self.params.a, self.params.b)
    }

    fn evaluate(&mut self, x: T) -> T {
        self.polynomial.evaluate(x)
    }
}
