//! Linear operators and their consistency checks.
//!
//! Every operator implements the [`LinearOperator`] trait, which applies
//! a fixed square matrix, its inverse, its adjoint (transpose) and the
//! inverse of its adjoint to a vector.   Two realizations are provided:
//!
//! * [`DenseOperator`] stores the full matrix and solves by Gaussian
//!   elimination with partial pivoting.
//! * [`TridiagonalOperator`] stores only the three diagonals and solves
//!   with the Thomas algorithm in O(n) time.
//!
//! Either may be held behind the [`SupportedOperator`] enum.

use crate::algebra::*;
use enum_dispatch::*;

mod check;
mod dense;
mod settings;
mod tridiagonal;

pub use check::*;
pub use dense::*;
pub use settings::*;
pub use tridiagonal::*;

#[cfg(feature = "serde")]
mod json;
#[cfg(feature = "serde")]
pub use json::*;

/// The four operations supported by every [`LinearOperator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatorFunction {
    /// y = A*x
    Apply,
    /// y = inv(A)*x
    ApplyInverse,
    /// y = A'*x
    ApplyAdjoint,
    /// y = inv(A')*x
    ApplyAdjointInverse,
}

impl OperatorFunction {
    /// All operations, in the order checked by [`OperatorCheck`]
    pub const ALL: [OperatorFunction; 4] = [
        OperatorFunction::Apply,
        OperatorFunction::ApplyInverse,
        OperatorFunction::ApplyAdjoint,
        OperatorFunction::ApplyAdjointInverse,
    ];
}

impl std::fmt::Display for OperatorFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OperatorFunction::Apply => "apply",
            OperatorFunction::ApplyInverse => "apply_inverse",
            OperatorFunction::ApplyAdjoint => "apply_adjoint",
            OperatorFunction::ApplyAdjointInverse => "apply_adjoint_inverse",
        };
        write!(f, "{}", name)
    }
}

/// Square linear operator acting on vectors of length [`dim`](LinearOperator::dim).
///
/// All operations overwrite `y` and leave `x` unchanged.  Both vectors must
/// have length `dim()`, otherwise [`OperatorError::DimensionMismatch`] is
/// returned before `y` is written.  The inverse operations return
/// [`OperatorError::SingularOperator`] if a pivot with magnitude at or below `tol`
/// is encountered, in which case the contents of `y` are unspecified.

#[enum_dispatch]
pub trait LinearOperator<T>
where
    T: FloatT,
{
    /// operator dimension n
    fn dim(&self) -> usize;

    /// y = A*x
    fn apply(&self, y: &mut [T], x: &[T], tol: T) -> Result<(), OperatorError>;

    /// y = inv(A)*x
    fn apply_inverse(&self, y: &mut [T], x: &[T], tol: T) -> Result<(), OperatorError>;

    /// y = A'*x
    fn apply_adjoint(&self, y: &mut [T], x: &[T], tol: T) -> Result<(), OperatorError>;

    /// y = inv(A')*x
    fn apply_adjoint_inverse(&self, y: &mut [T], x: &[T], tol: T) -> Result<(), OperatorError>;

    /// Apply one of the four operations selected by name
    fn apply_function(
        &self,
        f: OperatorFunction,
        y: &mut [T],
        x: &[T],
        tol: T,
    ) -> Result<(), OperatorError> {
        match f {
            OperatorFunction::Apply => self.apply(y, x, tol),
            OperatorFunction::ApplyInverse => self.apply_inverse(y, x, tol),
            OperatorFunction::ApplyAdjoint => self.apply_adjoint(y, x, tol),
            OperatorFunction::ApplyAdjointInverse => self.apply_adjoint_inverse(y, x, tol),
        }
    }
}

/// Either of the supported operator types, with static dispatch
/// of the [`LinearOperator`] trait.
#[enum_dispatch(LinearOperator<T>)]
#[derive(Debug, Clone)]
pub enum SupportedOperator<T>
where
    T: FloatT,
{
    /// dense operator
    DenseOperator(DenseOperator<T>),
    /// tridiagonal operator
    TridiagonalOperator(TridiagonalOperator<T>),
}

impl<T> SupportedOperator<T>
where
    T: FloatT,
{
    /// Adjoint view of the operator.  No data is copied.
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }
}

// The adjoint view of any operator swaps the plain and adjoint
// operations.  The view is itself an operator, so checks and
// solves can be run on A' without forming it.
impl<T, M> LinearOperator<T> for Adjoint<'_, M>
where
    T: FloatT,
    M: LinearOperator<T>,
{
    fn dim(&self) -> usize {
        self.src.dim()
    }
    fn apply(&self, y: &mut [T], x: &[T], tol: T) -> Result<(), OperatorError> {
        self.src.apply_adjoint(y, x, tol)
    }
    fn apply_inverse(&self, y: &mut [T], x: &[T], tol: T) -> Result<(), OperatorError> {
        self.src.apply_adjoint_inverse(y, x, tol)
    }
    fn apply_adjoint(&self, y: &mut [T], x: &[T], tol: T) -> Result<(), OperatorError> {
        self.src.apply(y, x, tol)
    }
    fn apply_adjoint_inverse(&self, y: &mut [T], x: &[T], tol: T) -> Result<(), OperatorError> {
        self.src.apply_inverse(y, x, tol)
    }
}

// checks that both vectors of an operator call have length n
pub(crate) fn check_dims<T>(n: usize, y: &[T], x: &[T]) -> Result<(), OperatorError> {
    OperatorError::check_dim(n, x.len())?;
    OperatorError::check_dim(n, y.len())
}
