#![allow(non_snake_case)]

use super::*;
use std::sync::Arc;

/// Linear operator defined by a fully stored square matrix.
///
/// Products are computed directly.  Inverses are computed by Gaussian
/// elimination with partial pivoting on a fresh copy of the matrix at
/// every call, so this type is intended as a reference for checking
/// structured operators rather than for repeated solves.

#[derive(Debug, Clone)]
pub struct DenseOperator<T> {
    A: SharedMatrix<T>,
}

impl<T> DenseOperator<T>
where
    T: FloatT,
{
    /// Creates an `n × n` operator from row major data of length `n²`.
    ///
    /// The data may be supplied as a `Vec`, a slice or an existing
    /// `Arc<[T]>`, in which case the storage is shared with the caller.
    pub fn new(n: usize, data: impl Into<Arc<[T]>>) -> Result<Self, OperatorError> {
        let data = data.into();
        if n == 0 {
            return Err(OperatorError::EmptyOperator);
        }
        // an n whose square overflows can never match the data length
        let len = n.checked_mul(n).ok_or(OperatorError::DimensionMismatch {
            expected: usize::MAX,
            found: data.len(),
        })?;
        OperatorError::check_dim(len, data.len())?;
        let A = SharedMatrix::from_data((n, n), data);
        Ok(Self { A })
    }

    // square by construction at every call site
    pub(crate) fn from_matrix(A: Matrix<T>) -> Self {
        debug_assert!(A.is_square() && A.nrows() > 0);
        let (m, n) = A.size();
        Self {
            A: SharedMatrix::from_data((m, n), A.data.into()),
        }
    }

    /// matrix data in row major format
    pub fn data(&self) -> &[T] {
        self.A.data()
    }

    /// the underlying matrix
    pub fn matrix(&self) -> &SharedMatrix<T> {
        &self.A
    }

    /// Adjoint view of the operator.  No data is copied.
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }
}

impl<const N: usize, T> From<&[[T; N]; N]> for DenseOperator<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; N]) -> Self {
        assert!(N > 0);
        Self::from_matrix(Matrix::from(rows))
    }
}

impl<T> LinearOperator<T> for DenseOperator<T>
where
    T: FloatT,
{
    fn dim(&self) -> usize {
        self.A.nrows()
    }

    fn apply(&self, y: &mut [T], x: &[T], _tol: T) -> Result<(), OperatorError> {
        check_dims(self.dim(), y, x)?;
        self.A.gemv(y, x, T::one(), T::zero());
        Ok(())
    }

    fn apply_inverse(&self, y: &mut [T], x: &[T], tol: T) -> Result<(), OperatorError> {
        check_dims(self.dim(), y, x)?;
        y.copy_from(x);
        LuEngine::new(self.dim()).lusolve(&self.A, y, tol)
    }

    fn apply_adjoint(&self, y: &mut [T], x: &[T], _tol: T) -> Result<(), OperatorError> {
        check_dims(self.dim(), y, x)?;
        self.A.t().gemv(y, x, T::one(), T::zero());
        Ok(())
    }

    fn apply_adjoint_inverse(&self, y: &mut [T], x: &[T], tol: T) -> Result<(), OperatorError> {
        check_dims(self.dim(), y, x)?;
        y.copy_from(x);
        LuEngine::new(self.dim()).lusolve(&self.A.t(), y, tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> DenseOperator<f64> {
        DenseOperator::new(3, vec![3., 1., 0., -2., 6., 2., 0., -1., 3.]).unwrap()
    }

    #[test]
    fn test_dense_new() {
        let A = scenario();
        assert_eq!(A.dim(), 3);
        assert_eq!(A.matrix()[(1, 2)], 2.);

        assert_eq!(
            DenseOperator::<f64>::new(0, Vec::new()).unwrap_err(),
            OperatorError::EmptyOperator
        );
        assert_eq!(
            DenseOperator::<f64>::new(2, vec![1., 2., 3.]).unwrap_err(),
            OperatorError::DimensionMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_dense_new_huge_dimension() {
        let n = 1usize << (usize::BITS / 2);
        assert_eq!(
            DenseOperator::<f64>::new(n, Vec::new()).unwrap_err(),
            OperatorError::DimensionMismatch {
                expected: usize::MAX,
                found: 0
            }
        );
        assert!(DenseOperator::<f64>::new(n + 1, vec![1.]).is_err());
    }

    #[test]
    fn test_dense_shared_data() {
        let data: Arc<[f64]> = Arc::from(vec![2., 0., 0., 4.]);
        let A = DenseOperator::<f64>::new(2, Arc::clone(&data)).unwrap();
        assert_eq!(Arc::strong_count(&data), 2);
        assert_eq!(A.data(), &data[..]);

        let B = A.clone();
        assert_eq!(Arc::strong_count(&data), 3);
        assert_eq!(B.data().as_ptr(), data.as_ptr());
    }

    #[test]
    fn test_dense_apply() {
        let A = scenario();
        let x = [1., 2., -1.];
        let mut y = [0.; 3];

        A.apply(&mut y, &x, f64::EPSILON).unwrap();
        assert_eq!(y, [5., 8., -5.]);

        A.apply_adjoint(&mut y, &x, f64::EPSILON).unwrap();
        assert_eq!(y, [-1., 14., 1.]);
    }

    #[test]
    fn test_dense_inverse() {
        let A = scenario();
        let x = [1., 2., -1.];
        let mut y = [0.; 3];
        let mut z = [0.; 3];

        A.apply(&mut y, &x, f64::EPSILON).unwrap();
        A.apply_inverse(&mut z, &y, f64::EPSILON).unwrap();
        assert!(z.norm_inf_diff(&x) < 1e-12);

        A.apply_adjoint(&mut y, &x, f64::EPSILON).unwrap();
        A.apply_adjoint_inverse(&mut z, &y, f64::EPSILON).unwrap();
        assert!(z.norm_inf_diff(&x) < 1e-12);
    }

    #[test]
    fn test_dense_singular() {
        let A = DenseOperator::from(&[[1., 2.], [2., 4.]]);
        let x = [1., 1.];
        let mut y = [0.; 2];
        assert_eq!(
            A.apply_inverse(&mut y, &x, 1e-12),
            Err(OperatorError::SingularOperator { index: 1 })
        );
        assert_eq!(
            A.apply_adjoint_inverse(&mut y, &x, 1e-12),
            Err(OperatorError::SingularOperator { index: 1 })
        );
    }

    #[test]
    fn test_dense_pivot_at_tolerance() {
        // the only pivot equals tol and is rejected,
        // while any smaller tol accepts it
        let A = DenseOperator::<f64>::new(1, vec![-0.5]).unwrap();
        let mut y = [0.];
        assert_eq!(
            A.apply_inverse(&mut y, &[1.], 0.5),
            Err(OperatorError::SingularOperator { index: 0 })
        );
        assert_eq!(
            A.apply_adjoint_inverse(&mut y, &[1.], 0.5),
            Err(OperatorError::SingularOperator { index: 0 })
        );
        A.apply_inverse(&mut y, &[1.], 0.25).unwrap();
        assert_eq!(y, [-2.]);
    }

    #[test]
    fn test_dense_dimension_mismatch() {
        let A = scenario();
        let mut y = [0.; 3];
        let mut ybad = [0.; 4];

        let err = OperatorError::DimensionMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(A.apply(&mut y, &[1., 2.], 0.), Err(err.clone()));
        assert_eq!(A.apply_inverse(&mut y, &[1., 2.], 0.), Err(err));

        // output untouched on failure
        ybad[0] = 7.;
        assert!(A.apply_adjoint(&mut ybad, &[1., 2., 3.], 0.).is_err());
        assert_eq!(ybad, [7., 0., 0., 0.]);
    }

    #[test]
    fn test_dense_scalar() {
        let A = DenseOperator::<f64>::new(1, vec![4.]).unwrap();
        let mut y = [0.];
        A.apply(&mut y, &[2.], f64::EPSILON).unwrap();
        assert_eq!(y, [8.]);
        A.apply_inverse(&mut y, &[2.], f64::EPSILON).unwrap();
        assert_eq!(y, [0.5]);
    }
}
