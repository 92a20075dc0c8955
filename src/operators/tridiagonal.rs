use super::*;
use itertools::izip;
use std::sync::Arc;

/// Linear operator defined by a square tridiagonal matrix.
///
/// Only the three diagonals are stored:
///
/// * `diag[i] = A[i][i]` for `i` in `0..n`
/// * `sub[i]  = A[i+1][i]` for `i` in `0..n-1`
/// * `sup[i]  = A[i][i+1]` for `i` in `0..n-1`
///
/// All four operations run in O(n) time without forming the dense matrix.
/// Inverses use the Thomas algorithm, i.e. Gaussian elimination *without*
/// pivoting.  This is only stable for well conditioned systems, e.g. those
/// that are diagonally dominant.  A system that needs row exchanges fails
/// with [`OperatorError::SingularOperator`] even when it is nonsingular.
///
/// The bands are shared and immutable, so clones are cheap and an operator
/// may be used from several threads at once.

#[derive(Debug, Clone)]
pub struct TridiagonalOperator<T> {
    diag: Arc<[T]>,
    sub: Arc<[T]>,
    sup: Arc<[T]>,
}

impl<T> TridiagonalOperator<T>
where
    T: FloatT,
{
    /// Creates an operator from its main, sub- and superdiagonals.
    ///
    /// `diag` must be nonempty, and `sub` and `sup` must both have
    /// length `diag.len() - 1`.
    pub fn new(
        diag: impl Into<Arc<[T]>>,
        sub: impl Into<Arc<[T]>>,
        sup: impl Into<Arc<[T]>>,
    ) -> Result<Self, OperatorError> {
        let (diag, sub, sup) = (diag.into(), sub.into(), sup.into());

        if diag.is_empty() {
            return Err(OperatorError::EmptyOperator);
        }
        let n = diag.len();
        OperatorError::check_dim(n - 1, sub.len())?;
        OperatorError::check_dim(n - 1, sup.len())?;

        Ok(Self { diag, sub, sup })
    }

    /// main diagonal
    pub fn diag(&self) -> &[T] {
        &self.diag
    }

    /// subdiagonal, i.e. the band below the main diagonal
    pub fn sub(&self) -> &[T] {
        &self.sub
    }

    /// superdiagonal, i.e. the band above the main diagonal
    pub fn sup(&self) -> &[T] {
        &self.sup
    }

    /// Adjoint view of the operator.  No data is copied.
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// Dense operator with the same entries
    pub fn to_dense(&self) -> DenseOperator<T> {
        let n = self.dim();
        let mut mat = Matrix::zeros((n, n));
        for (i, &d) in self.diag.iter().enumerate() {
            mat[(i, i)] = d;
        }
        for (i, (&l, &u)) in self.sub.iter().zip(self.sup.iter()).enumerate() {
            mat[(i + 1, i)] = l;
            mat[(i, i + 1)] = u;
        }
        DenseOperator::from_matrix(mat)
    }
}

impl<T> From<&TridiagonalOperator<T>> for DenseOperator<T>
where
    T: FloatT,
{
    fn from(op: &TridiagonalOperator<T>) -> Self {
        op.to_dense()
    }
}

impl<T> LinearOperator<T> for TridiagonalOperator<T>
where
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.diag.len()
    }

    fn apply(&self, y: &mut [T], x: &[T], _tol: T) -> Result<(), OperatorError> {
        check_dims(self.dim(), y, x)?;
        tridiagonal_mul(y, x, &self.sub, &self.diag, &self.sup);
        Ok(())
    }

    fn apply_inverse(&self, y: &mut [T], x: &[T], tol: T) -> Result<(), OperatorError> {
        check_dims(self.dim(), y, x)?;
        thomas_solve(y, x, &self.sub, &self.diag, &self.sup, tol)
    }

    // A' has the superdiagonal of A below its diagonal
    // and the subdiagonal of A above it

    fn apply_adjoint(&self, y: &mut [T], x: &[T], _tol: T) -> Result<(), OperatorError> {
        check_dims(self.dim(), y, x)?;
        tridiagonal_mul(y, x, &self.sup, &self.diag, &self.sub);
        Ok(())
    }

    fn apply_adjoint_inverse(&self, y: &mut [T], x: &[T], tol: T) -> Result<(), OperatorError> {
        check_dims(self.dim(), y, x)?;
        thomas_solve(y, x, &self.sup, &self.diag, &self.sub, tol)
    }
}

// y = A*x for the tridiagonal A with bands (lower, diag, upper).
// Lengths are checked by the caller.
fn tridiagonal_mul<T: FloatT>(y: &mut [T], x: &[T], lower: &[T], diag: &[T], upper: &[T]) {
    for (yi, &di, &xi) in izip!(y.iter_mut(), diag, x) {
        *yi = di * xi;
    }
    for (yi, &li, &xprev) in izip!(y[1..].iter_mut(), lower, x) {
        *yi += li * xprev;
    }
    for (yi, &ui, &xnext) in izip!(y.iter_mut(), upper, &x[1..]) {
        *yi += ui * xnext;
    }
}

// Solves A*y = x for the tridiagonal A with bands (lower, diag, upper)
// by the Thomas algorithm.  The right hand side is eliminated in place
// in y, and the eliminated diagonal is held in call-local scratch, so
// the bands are never modified.  Fails with the index of the first
// pivot with magnitude at or below tol.  Lengths are checked by the caller.
fn thomas_solve<T: FloatT>(
    y: &mut [T],
    x: &[T],
    lower: &[T],
    diag: &[T],
    upper: &[T],
    tol: T,
) -> Result<(), OperatorError> {
    let n = diag.len();
    let mut d = diag.to_vec();
    y.copy_from(x);

    // forward elimination
    for i in 1..n {
        check_pivot(d[i - 1], i - 1, tol)?;
        let m = lower[i - 1] / d[i - 1];
        d[i] -= m * upper[i - 1];
        let r = y[i - 1];
        y[i] -= m * r;
    }
    check_pivot(d[n - 1], n - 1, tol)?;

    // back substitution
    y[n - 1] /= d[n - 1];
    for i in (0..(n - 1)).rev() {
        y[i] = (y[i] - upper[i] * y[i + 1]) / d[i];
    }

    Ok(())
}

// NaN pivots also fail
#[inline]
fn check_pivot<T: FloatT>(pivot: T, index: usize, tol: T) -> Result<(), OperatorError> {
    if !(pivot.abs() > tol) {
        return Err(OperatorError::SingularOperator { index });
    }
    Ok(())
}
