//! Iterative half-iterate approximation for `f(f(x)) = x² + 1`.
//!
//! If `f∘f = F` with `F(x) = x² + 1` held exactly, then
//! `f(x)² = f(F(x)) − 1`, i.e.
//!
//! ```text
//! f(x) = √(f(x² + 1) − 1)
//! ```
//!
//! [`HalfIterateApproximator::compute_f`] unwinds this identity `iterations`
//! times and seeds the floor of the recursion with the ansatz `|x|^√2`.
//! The result is an approximation whose shape changes with the depth; it is
//! not an exact functional square root at any finite depth.
//!
//! All functions are generic over `T: num_traits::Float` for f32/f64 support.

use std::collections::HashMap;

use num_traits::Float;
use tracing::{debug, trace};

use crate::traits::FunctionalSquareRoot;
use crate::types::DomainError;

/// Depth used by [`HalfIterateApproximator::new`].
pub const DEFAULT_DEPTH: usize = 5;

/// Memo key: exact bit decomposition of `x` plus recursion depth.
///
/// `Float::integer_decode` is injective over non-NaN values, so two keys are
/// equal exactly when the floats are bit-identical (up to the sign of zero,
/// which the `|x|` base case ignores anyway).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MemoKey {
    mantissa: u64,
    exponent: i16,
    sign: i8,
    depth: usize,
}

impl MemoKey {
    fn new<T: Float>(x: T, depth: usize) -> Self {
        let (mantissa, exponent, sign) = x.integer_decode();
        Self {
            mantissa,
            exponent,
            sign,
            depth,
        }
    }
}

/// The target map `F(x) = x² + 1`.
#[inline]
pub fn target<T: Float>(x: T) -> T {
    x * x + T::one()
}

/// Base-case ansatz `|x|^√2`.
#[inline]
fn seed<T: Float>(x: T) -> T {
    let sqrt_2 = (T::one() + T::one()).sqrt();
    x.abs().powf(sqrt_2)
}

/// One unwinding step `r ↦ √(r − 1)`; NaN when the radicand is negative.
#[inline]
fn half_step<T: Float>(r: T) -> T {
    let radicand = r - T::one();
    if radicand < T::zero() {
        T::nan()
    } else {
        radicand.sqrt()
    }
}

/// Memoized approximator of the functional square root of `x² + 1`.
///
/// Each instance owns its memo table; nothing is shared between instances,
/// so independent callers never observe each other's entries. The table is
/// not thread-safe and is not meant to be: give each thread its own
/// approximator.
///
/// # Examples
/// ```
/// use fsqrt_core::math::half_iterate::HalfIterateApproximator;
///
/// let mut approx = HalfIterateApproximator::<f64>::new();
/// let base = approx.compute_f(2.0, 0);
/// assert!((base - 2.0_f64.powf(std::f64::consts::SQRT_2)).abs() < 1e-12);
///
/// let series = approx.create_series(&[-1.0, 0.0, 1.0], 3);
/// assert_eq!(series.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct HalfIterateApproximator<T: Float> {
    memo: HashMap<MemoKey, T>,
    depth: usize,
}

impl<T: Float> Default for HalfIterateApproximator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> HalfIterateApproximator<T> {
    /// Create an approximator bound to [`DEFAULT_DEPTH`].
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an approximator bound to a custom depth.
    ///
    /// The bound depth is only used through [`FunctionalSquareRoot`];
    /// [`compute_f`](Self::compute_f) always takes the depth explicitly.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            memo: HashMap::new(),
            depth,
        }
    }

    /// Depth used by [`FunctionalSquareRoot::evaluate`].
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of memoized `(x, depth)` entries.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Drop every memoized entry.
    pub fn reset(&mut self) {
        self.memo.clear();
    }

    /// Approximate `f(x)` by unwinding `f(x) = √(f(x² + 1) − 1)` `iterations` times.
    ///
    /// # Returns
    /// - `iterations == 0`: `|x|^√2`
    /// - otherwise `√(r − 1)` with `r = compute_f(x² + 1, iterations − 1)`,
    ///   or NaN when `r − 1 < 0` anywhere along the way
    ///
    /// NaN and ±∞ are ordinary results here; use
    /// [`try_compute_f`](Self::try_compute_f) to get them as a [`DomainError`].
    pub fn compute_f(&mut self, x: T, iterations: usize) -> T {
        // Walk the orbit x, F(x), F(F(x)), ... down to the first known value.
        let mut pending = Vec::new();
        let mut current = x;
        let mut depth = iterations;

        let mut value = loop {
            let key = MemoKey::new(current, depth);
            if let Some(&known) = self.memo.get(&key) {
                break known;
            }
            if depth == 0 {
                let base = seed(current);
                self.memo.insert(key, base);
                break base;
            }
            pending.push(current);
            current = target(current);
            depth -= 1;
        };

        // Unwind back up to the requested depth, memoizing every level.
        while let Some(xi) = pending.pop() {
            depth += 1;
            value = half_step(value);
            self.memo.insert(MemoKey::new(xi, depth), value);
        }

        value
    }

    /// Like [`compute_f`](Self::compute_f) but with non-finite results tagged.
    ///
    /// # Errors
    /// - `DomainError::NegativeRadicand`: the result is NaN
    /// - `DomainError::Overflow`: the result is ±∞
    pub fn try_compute_f(&mut self, x: T, iterations: usize) -> Result<T, DomainError> {
        let value = self.compute_f(x, iterations);
        let x = x.to_f64().unwrap_or(f64::NAN);
        if value.is_nan() {
            Err(DomainError::NegativeRadicand {
                x,
                depth: iterations,
            })
        } else if value.is_infinite() {
            Err(DomainError::Overflow {
                x,
                depth: iterations,
            })
        } else {
            Ok(value)
        }
    }

    /// Element-wise [`compute_f`](Self::compute_f) over `x_values`.
    ///
    /// The memo is cleared first; entries are then shared between points of
    /// this one series only.
    pub fn create_series(&mut self, x_values: &[T], iterations: usize) -> Vec<T> {
        self.reset();
        let series: Vec<T> = x_values
            .iter()
            .map(|&x| self.compute_f(x, iterations))
            .collect();

        debug!(
            points = x_values.len(),
            iterations,
            memo_entries = self.memo.len(),
            non_finite = series.iter().filter(|v| !v.is_finite()).count(),
            "half-iterate series computed"
        );
        series
    }
}

impl<T: Float> FunctionalSquareRoot<T> for HalfIterateApproximator<T> {
    fn target(&self, x: T) -> T {
        target(x)
    }

    fn evaluate(&mut self, x: T) -> T {
        let depth = self.depth;
        self.compute_f(x, depth)
    }
}

/// [`HalfIterateApproximator::compute_f`] with a fresh, call-scoped memo.
pub fn compute_f<T: Float>(x: T, iterations: usize) -> T {
    HalfIterateApproximator::with_depth(iterations).compute_f(x, iterations)
}

/// [`HalfIterateApproximator::create_series`] with a fresh, call-scoped memo.
pub fn create_series<T: Float>(x_values: &[T], iterations: usize) -> Vec<T> {
    HalfIterateApproximator::with_depth(iterations).create_series(x_values, iterations)
}

/// Forward orbit `x0, F(x0), F(F(x0)), ...` of `F(x) = x² + 1`.
///
/// Returns `steps + 1` values, starting with `x0` itself.
pub fn orbit<T: Float>(x0: T, steps: usize) -> Vec<T> {
    let mut values = Vec::with_capacity(steps + 1);
    let mut x = x0;
    values.push(x);
    for _ in 0..steps {
        x = target(x);
        values.push(x);
    }
    trace!(steps, "orbit computed");
    values
}

/// Evenly spaced sample points `start + i·step` for `i` in `0..points`.
pub fn sample_grid<T: Float>(start: T, step: T, points: usize) -> Vec<T> {
    (0..points)
        .map(|i| start + step * T::from(i).unwrap_or_else(T::nan))
        .collect()
}
