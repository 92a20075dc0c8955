#![allow(non_snake_case)]
use linop::operators::*;

fn main() {
    // Tridiagonal example
    //
    //  A = [ 3  1  0]
    //      [-2  6  2]
    //      [ 0 -1  3]

    // print details only if some command line argument is given
    let verbose = std::env::args().len() > 1;

    let A = DenseOperator::<f64>::new(
        3,                                          // n
        vec![3., 1., 0., -2., 6., 2., 0., -1., 3.], // row major data
    )
    .unwrap();

    let T = TridiagonalOperator::<f64>::new(
        vec![3., 6., 3.], // diag
        vec![-2., -1.],   // sub
        vec![1., 2.],     // sup
    )
    .unwrap();

    let x = [1., 2., -1.];

    let settings = CheckSettingsBuilder::<f64>::default()
        .verbose(verbose)
        .build()
        .unwrap();

    let mut check = OperatorCheck::new(settings).unwrap();

    match check.check(&A, &T, &x) {
        // the verbose report already ends with the result line
        Ok(report) => {
            if !verbose {
                println!("{}", report);
            }
        }
        Err(e) => {
            if verbose {
                println!("{}", e);
            }
            println!("End Result: TEST FAILED");
        }
    }
}
