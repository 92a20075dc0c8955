#![allow(non_snake_case)]
use linop::{algebra::*, operators::*};

// a collection of tests checking the tridiagonal operator
// against the dense operator built from the same entries

// deterministic, diagonally dominant test data
fn tridiagonal_data(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let sub: Vec<f64> = (0..n - 1).map(|i| f64::sin(i as f64 + 1.)).collect();
    let sup: Vec<f64> = (0..n - 1).map(|i| f64::cos(2. * i as f64 + 0.5)).collect();
    let diag: Vec<f64> = (0..n).map(|i| 3. + f64::sin(3. * i as f64)).collect();
    (diag, sub, sup)
}

fn test_vector(n: usize) -> Vec<f64> {
    (0..n).map(|i| f64::cos(i as f64) - 0.25 * i as f64).collect()
}

fn operator_pair(n: usize) -> (DenseOperator<f64>, TridiagonalOperator<f64>) {
    let (diag, sub, sup) = tridiagonal_data(n);
    let T = TridiagonalOperator::new(diag, sub, sup).unwrap();
    let A = T.to_dense();
    (A, T)
}

#[test]
fn test_equivalence_all_functions() {
    for n in [1, 2, 3, 7, 50] {
        let (A, T) = operator_pair(n);
        let x = test_vector(n);

        for f in OperatorFunction::ALL {
            let mut ya = vec![0.; n];
            let mut yt = vec![0.; n];
            A.apply_function(f, &mut ya, &x, f64::EPSILON).unwrap();
            T.apply_function(f, &mut yt, &x, f64::EPSILON).unwrap();
            assert!(
                ya.norm_inf_diff(&yt) <= 1e-10 * ya.norm().max(1.),
                "n = {}, {}",
                n,
                f
            );
        }
    }
}

#[test]
fn test_inverse_round_trip() {
    let n = 20;
    let (_, T) = operator_pair(n);
    let x = test_vector(n);
    let mut y = vec![0.; n];
    let mut z = vec![0.; n];

    T.apply(&mut y, &x, f64::EPSILON).unwrap();
    T.apply_inverse(&mut z, &y, f64::EPSILON).unwrap();
    assert!(z.norm_inf_diff(&x) <= 1e-10);

    T.apply_inverse(&mut y, &x, f64::EPSILON).unwrap();
    T.apply(&mut z, &y, f64::EPSILON).unwrap();
    assert!(z.norm_inf_diff(&x) <= 1e-10);

    T.apply_adjoint(&mut y, &x, f64::EPSILON).unwrap();
    T.apply_adjoint_inverse(&mut z, &y, f64::EPSILON).unwrap();
    assert!(z.norm_inf_diff(&x) <= 1e-10);

    T.apply_adjoint_inverse(&mut y, &x, f64::EPSILON).unwrap();
    T.apply_adjoint(&mut z, &y, f64::EPSILON).unwrap();
    assert!(z.norm_inf_diff(&x) <= 1e-10);
}

#[test]
fn test_adjoint_identity() {
    // dot(Ax,y) = dot(x,A'y)
    let n = 15;
    let (A, T) = operator_pair(n);
    let x = test_vector(n);
    let y: Vec<f64> = (0..n).map(|i| f64::sin(0.7 * i as f64)).collect();
    let mut Ax = vec![0.; n];
    let mut Aty = vec![0.; n];

    for op in [SupportedOperator::from(A), SupportedOperator::from(T)] {
        op.apply(&mut Ax, &x, f64::EPSILON).unwrap();
        op.apply_adjoint(&mut Aty, &y, f64::EPSILON).unwrap();
        let lhs = Ax.dot(&y);
        let rhs = x.dot(&Aty);
        assert!((lhs - rhs).abs() <= 1e-12 * lhs.abs().max(1.));
    }
}

#[test]
fn test_reference_scenario() {
    let A = DenseOperator::from(&[[3., 1., 0.], [-2., 6., 2.], [0., -1., 3.]]);
    let T = TridiagonalOperator::<f64>::new(vec![3., 6., 3.], vec![-2., -1.], vec![1., 2.])
        .unwrap();
    let x = [1., 2., -1.];
    let mut y = [0.; 3];
    let mut z = [0.; 3];

    T.apply(&mut y, &x, f64::EPSILON).unwrap();
    assert_eq!(y, [5., 8., -5.]);
    T.apply_inverse(&mut z, &y, f64::EPSILON).unwrap();
    assert!(z.norm_inf_diff(&x) <= 1e-10);

    let mut ya = [0.; 3];
    A.apply_adjoint(&mut ya, &x, f64::EPSILON).unwrap();
    T.apply_adjoint(&mut y, &x, f64::EPSILON).unwrap();
    assert_eq!(y, ya);
    assert_eq!(y, [-1., 14., 1.]);
}

#[test]
fn test_equivalence_f32() {
    let T = TridiagonalOperator::<f32>::new(vec![4., 5., 6., 4.], vec![1., -1., 2.], vec![-2., 1., 1.])
        .unwrap();
    let A = DenseOperator::from(&T);
    let x = [1., -2., 0.5, 3.];

    for f in OperatorFunction::ALL {
        let mut ya = [0f32; 4];
        let mut yt = [0f32; 4];
        A.apply_function(f, &mut ya, &x, f32::EPSILON).unwrap();
        T.apply_function(f, &mut yt, &x, f32::EPSILON).unwrap();
        assert!(ya.norm_inf_diff(&yt) <= 1e-5);
    }
}
