//! __linop__ is a Rust implementation of square linear operators with a
//! common interface for applying a fixed matrix $A \in \mathbb{R}^{n \times n}$,
//! its inverse, its adjoint and the inverse of its adjoint to vectors:
//!
//! $$
//! y = Ax, \quad y = A^{-1}x, \quad y = A^\top x, \quad y = A^{-\top}x.
//! $$
//!
//! ## Features
//!
//! * __Tridiagonal operators__: [`TridiagonalOperator`](operators::TridiagonalOperator)
//!   stores only the three diagonals of $A$ and applies all four operations in
//!   $O(n)$ time.  Inverses are computed with the Thomas algorithm.
//!
//! * __Dense reference operators__: [`DenseOperator`](operators::DenseOperator)
//!   stores the full matrix and inverts it by Gaussian elimination with partial
//!   pivoting.  It is intended as a reference against which structured operators
//!   can be checked.
//!
//! * __Consistency checks__: [`OperatorCheck`](operators::OperatorCheck) compares
//!   two operators on a test vector and reports the error in each operation, with
//!   optional verbose output to stdout, a file, a buffer or any stream.
//!
//! * __File I/O__: with the `serde` feature (enabled by default), operators can be
//!   written to and read from JSON files.
//!
//! ## Example
//!
//! ```
//! use linop::algebra::*;
//! use linop::operators::*;
//!
//! //  A = [ 3  1  0]
//! //      [-2  6  2]
//! //      [ 0 -1  3]
//! let A = TridiagonalOperator::<f64>::new(vec![3., 6., 3.], vec![-2., -1.], vec![1., 2.]).unwrap();
//!
//! let x = [1., 2., -1.];
//! let mut y = [0.; 3];
//! let mut z = [0.; 3];
//!
//! A.apply(&mut y, &x, f64::EPSILON).unwrap();
//! assert_eq!(y, [5., 8., -5.]);
//!
//! A.apply_inverse(&mut z, &y, f64::EPSILON).unwrap();
//! assert!(z.norm_inf_diff(&x) < 1e-10);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

/// crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod operators;
