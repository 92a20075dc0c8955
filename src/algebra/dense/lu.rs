#![allow(non_snake_case)]

use crate::algebra::*;

// Gaussian elimination with partial pivoting for dense square
// systems.  The factors are overwritten on every solve, so the
// solver only owns its workspace and never the source matrix.

pub(crate) struct LuEngine<T> {
    lu: Matrix<T>,
}

impl<T> LuEngine<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        Self {
            lu: Matrix::zeros((n, n)),
        }
    }

    // Solves A*x = b in place, with the solution overwriting b.
    // A may be any dense matrix or adjoint view.  Fails on the
    // first selected pivot with magnitude at or below tol (or NaN)
    pub fn lusolve<M>(&mut self, A: &M, b: &mut [T], tol: T) -> Result<(), OperatorError>
    where
        M: DenseMatrix<T>,
    {
        let n = self.lu.nrows();
        assert_eq!(A.size(), (n, n));
        assert_eq!(b.len(), n);

        let lu = &mut self.lu;
        lu.copy_from(A);

        for k in 0..n {
            // partial pivoting: largest magnitude in column k, rows k..n
            let mut p = k;
            let mut pmax = lu[(k, k)].abs();
            for i in (k + 1)..n {
                let v = lu[(i, k)].abs();
                if v > pmax {
                    p = i;
                    pmax = v;
                }
            }
            if !(pmax > tol) {
                return Err(OperatorError::SingularOperator { index: k });
            }
            lu.swap_rows(k, p);
            b.swap(k, p);

            let pivot = lu[(k, k)];
            for i in (k + 1)..n {
                let m = lu[(i, k)] / pivot;
                if m == T::zero() {
                    continue;
                }
                lu[(i, k)] = m;
                for j in (k + 1)..n {
                    let ukj = lu[(k, j)];
                    lu[(i, j)] -= m * ukj;
                }
                let bk = b[k];
                b[i] -= m * bk;
            }
        }

        // back substitution with the upper triangle
        for k in (0..n).rev() {
            let row = lu.row_slice(k);
            let s = row[(k + 1)..].dot(&b[(k + 1)..]);
            b[k] = (b[k] - s) / row[k];
        }

        Ok(())
    }
}

macro_rules! generate_test_lusolve {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        fn $test_name() {
            let A = Matrix::<$fxx>::from(&[[0., 2., 1.], [1., 1., 0.], [3., 0., 4.]]);
            let x: Vec<$fxx> = vec![1., -2., 3.];

            let mut b = vec![0.; 3];
            A.gemv(&mut b, &x, 1., 0.);

            let mut solver = LuEngine::<$fxx>::new(3);
            solver.lusolve(&A, &mut b, <$fxx>::EPSILON).unwrap();
            assert!(b.norm_inf_diff(&x) <= $tolfn(1e-5));

            // same solver, transposed system
            let mut b = vec![0.; 3];
            A.t().gemv(&mut b, &x, 1., 0.);
            solver.lusolve(&A.t(), &mut b, <$fxx>::EPSILON).unwrap();
            assert!(b.norm_inf_diff(&x) <= $tolfn(1e-5));
        }
    };
}

#[cfg(test)]
fn tol_f32(t: f64) -> f32 {
    t as f32
}
#[cfg(test)]
fn tol_f64(t: f64) -> f64 {
    t * 1e-6
}

generate_test_lusolve!(f32, test_lusolve_f32, tol_f32);
generate_test_lusolve!(f64, test_lusolve_f64, tol_f64);

#[test]
fn test_lusolve_needs_pivoting() {
    // zero in the leading position, so elimination
    // without row exchanges would fail immediately
    let A = Matrix::from(&[[0., 1.], [1., 0.]]);
    let mut b = vec![2., 3.];
    let mut solver = LuEngine::new(2);
    solver.lusolve(&A, &mut b, f64::EPSILON).unwrap();
    assert_eq!(b, [3., 2.]);
}

#[test]
fn test_lusolve_singular() {
    let A = Matrix::from(&[[1., 2., 3.], [2., 4., 6.], [1., 0., 1.]]);
    let mut b = vec![1., 1., 1.];
    let mut solver = LuEngine::new(3);
    let err = solver.lusolve(&A, &mut b, 1e-12).unwrap_err();
    assert_eq!(err, OperatorError::SingularOperator { index: 2 });
}

#[test]
fn test_lusolve_pivot_at_tolerance() {
    // after one elimination step the second pivot is 1.5 - 0.5 = 1
    let A = Matrix::from(&[[2., 1.], [1., 1.5]]);
    let mut solver = LuEngine::new(2);

    let mut b = vec![3., 2.5];
    let err = solver.lusolve(&A, &mut b, 1.).unwrap_err();
    assert_eq!(err, OperatorError::SingularOperator { index: 1 });

    let mut b = vec![3., 2.5];
    solver.lusolve(&A, &mut b, 0.5).unwrap();
    assert_eq!(b, [1., 1.]);
}

#[test]
fn test_lusolve_nan_pivot() {
    let A = Matrix::from(&[[f64::NAN]]);
    let mut b = vec![1.];
    let mut solver = LuEngine::new(1);
    assert!(solver.lusolve(&A, &mut b, 0.0).is_err());
}
