// Vector math used by the operator kernels and the consistency
// checks, implemented for slices of FloatT in vecmath.rs

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T;

    /// Copy values from `src` to `self`
    fn copy_from(&mut self, src: &Self) -> &mut Self;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Dot product
    fn dot(&self, y: &Self) -> Self::T;

    /// Euclidean distance from `self` to `y`
    fn dist(&self, y: &Self) -> Self::T;

    /// 2-norm
    fn norm(&self) -> Self::T;

    /// Maximum absolute elementwise difference between `self` and `b`
    fn norm_inf_diff(&self, b: &Self) -> Self::T;

    /// BLAS-like shift and scale in place.  Produces `self = a*x+b*self`.
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;
}

/// Matrix-vector products for dense matrices of [`FloatT`](crate::algebra::FloatT)

pub trait MultiplyGEMV {
    type T;

    /// BLAS-like general matrix-vector multiply.  Produces `y = a*self*x + b*y`
    fn gemv(&self, y: &mut [Self::T], x: &[Self::T], a: Self::T, b: Self::T);
}
