#![allow(non_snake_case)]

use crate::algebra::*;

impl<S, T> MultiplyGEMV for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    type T = T;
    // implements y = αA*x + βy
    fn gemv(&self, y: &mut [T], x: &[T], α: T, β: T) {
        let (m, n) = self.size();
        assert!(n == x.len() && m == y.len());

        for (r, yr) in y.iter_mut().enumerate() {
            let Ax = self.row_slice(r).dot(x);
            *yr = α * Ax + beta_scaled(β, *yr);
        }
    }
}

impl<S, T> MultiplyGEMV for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    type T = T;
    // implements y = αA'*x + βy
    fn gemv(&self, y: &mut [T], x: &[T], α: T, β: T) {
        let (m, n) = self.src.size(); //NB: size of A, not A'
        assert!(m == x.len() && n == y.len());

        // A' is never formed.  The rows of A are the columns
        // of A', so accumulate one scaled row of A at a time
        if β == T::zero() {
            y.set(T::zero());
        } else {
            y.scale(β);
        }
        for (r, &xr) in x.iter().enumerate() {
            y.axpby(α * xr, self.src.row_slice(r), T::one());
        }
    }
}

// BLAS convention: y is not read when β = 0, so that
// NaNs in an uninitialized output are not propagated
#[inline]
fn beta_scaled<T: FloatT>(β: T, y: T) -> T {
    if β == T::zero() {
        T::zero()
    } else {
        β * y
    }
}

#[test]
fn test_gemv() {
    let (m, n) = (2, 3);
    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let A = Matrix::from_data((m, n), a);

    let x = vec![1., 2., 3.];
    let mut y = vec![-1., -2.];
    A.gemv(&mut y, &x, 2.0, 3.0);
    assert!(y == [25.0, 58.0]);

    let x = vec![1., 2.];
    let mut y = vec![-1., -2., -3.];
    A.t().gemv(&mut y, &x, 2.0, 3.0);
    assert!(y == [15.0, 18.0, 21.0]);
}

#[test]
fn test_gemv_ignores_nan_output() {
    let A = Matrix::from(&[[2.0, 0.0], [0.0, 4.0]]);
    let x = vec![1., 1.];

    let mut y = vec![f64::NAN; 2];
    A.gemv(&mut y, &x, 1.0, 0.0);
    assert_eq!(y, [2.0, 4.0]);

    let mut y = vec![f64::NAN; 2];
    A.t().gemv(&mut y, &x, 1.0, 0.0);
    assert_eq!(y, [2.0, 4.0]);
}
