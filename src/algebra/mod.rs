//! Linear algebra types and traits.
//!
//! This module contains the numeric types used throughout the crate,
//! vector operations on slices of [`FloatT`] and a small dense matrix
//! type that is used as the reference implementation for the operators
//! in [`operators`](crate::operators).

// first import and flatten the crate's collection
// of core numeric types and matrix / vector traits.

mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;

// here we select the particular numeric implementation of
// the core traits.  For now, we only have the hand-written
// one, so there is nothing to configure
mod adjoint;
mod dense;
mod vecmath;
pub use dense::*;
