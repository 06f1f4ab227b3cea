//! Core traits.
//!
//! - [`FunctionalSquareRoot`]: a candidate `f` with its target `F`, and the
//!   residual `f(f(x)) − F(x)` that measures how close `f` is

pub mod functional_root;

pub use functional_root::FunctionalSquareRoot;
