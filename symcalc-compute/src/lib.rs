//! Simplification of `symcalc` expressions.
//!
//! See the [`symbolic`] module for more information.

pub mod symbolic;
