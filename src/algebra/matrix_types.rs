// Dense matrix data in this crate is stored in row-major
// format, following the convention of the operator API.

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Adjoint of a matrix or operator
///
/// A read only view of `src` that behaves as its transpose.  It
/// is produced by the `t()` methods on dense matrices and operators.
#[derive(Debug, Clone, Copy)]
pub struct Adjoint<'a, M> {
    /// the untransposed source object
    pub src: &'a M,
}
