//! The `FunctionalSquareRoot` abstraction shared by both solvers.

use num_traits::Float;

/// A candidate `f` for `f∘f = F`, together with its target `F`.
///
/// `evaluate` takes `&mut self` because implementations may memoize.
/// Use static dispatch (generics or an enum); nothing here needs
/// `Box<dyn FunctionalSquareRoot<T>>`.
///
/// # Example
/// ```
/// use fsqrt_core::traits::FunctionalSquareRoot;
///
/// struct Doubling;
///
/// impl FunctionalSquareRoot<f64> for Doubling {
///     fn target(&self, x: f64) -> f64 {
///         4.0 * x
///     }
///     fn evaluate(&mut self, x: f64) -> f64 {
///         2.0 * x
///     }
/// }
///
/// let mut f = Doubling;
/// assert_eq!(f.iterate_twice(3.0), 12.0);
/// assert_eq!(f.residual(3.0), 0.0);
/// ```
pub trait FunctionalSquareRoot<T: Float> {
    /// The function being square-rooted, `F(x)`.
    fn target(&self, x: T) -> T;

    /// The approximation `f(x)`.
    fn evaluate(&mut self, x: T) -> T;

    /// `f(f(x))`.
    fn iterate_twice(&mut self, x: T) -> T {
        let once = self.evaluate(x);
        self.evaluate(once)
    }

    /// `f(f(x)) − F(x)`; zero for an exact functional square root.
    fn residual(&mut self, x: T) -> T {
        self.iterate_twice(x) - self.target(x)
    }
}
