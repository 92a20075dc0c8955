use super::*;
use crate::io::{print_vector, ConfigurablePrintTarget, PrintTarget};
use std::io::Write;

/// Error in one operation of a candidate operator, measured
/// against a reference operator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckResult<T> {
    /// the operation checked
    pub function: OperatorFunction,
    /// 2-norm of the difference between candidate and reference outputs
    pub error: T,
}

/// Outcome of an [`OperatorCheck`]
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport<T> {
    /// one result per operation, in the order of [`OperatorFunction::ALL`]
    pub results: Vec<CheckResult<T>>,
    /// largest error accepted as a pass
    pub tol_diff: T,
}

impl<T> CheckReport<T>
where
    T: FloatT,
{
    /// true if every operation is within tolerance.  NaN errors fail.
    pub fn passed(&self) -> bool {
        self.failures() == 0
    }

    /// number of operations with error above tolerance
    pub fn failures(&self) -> usize {
        self.results
            .iter()
            .filter(|r| !(r.error <= self.tol_diff))
            .count()
    }

    /// error for a particular operation
    pub fn error(&self, f: OperatorFunction) -> Option<T> {
        self.results.iter().find(|r| r.function == f).map(|r| r.error)
    }
}

impl<T> std::fmt::Display for CheckReport<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.passed() {
            write!(f, "End Result: TEST PASSED")
        } else {
            write!(f, "End Result: TEST FAILED")
        }
    }
}

/// Compares a candidate operator against a reference operator.
///
/// For the plain and the adjoint forms in turn, both operators are applied
/// to a test vector `x` and then inverted on their own output.  The error
/// recorded for each of the four operations is the 2-norm distance between
/// the candidate and reference outputs.  With `verbose` set, all
/// intermediate vectors are written to the configured print target.
///
/// # Example
///
/// ```
/// use linop::operators::*;
///
/// let reference = DenseOperator::from(&[[3., 1., 0.], [-2., 6., 2.], [0., -1., 3.]]);
/// let candidate =
///     TridiagonalOperator::<f64>::new(vec![3., 6., 3.], vec![-2., -1.], vec![1., 2.]).unwrap();
///
/// let mut check = OperatorCheck::new(CheckSettings::default()).unwrap();
/// let report = check.check(&reference, &candidate, &[1., 2., -1.]).unwrap();
/// assert!(report.passed());
/// ```

#[derive(Debug)]
pub struct OperatorCheck<T: FloatT> {
    /// check settings.  Not revalidated if modified after construction.
    pub settings: CheckSettings<T>,
    stream: PrintTarget,
}

impl<T> ConfigurablePrintTarget for OperatorCheck<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

impl<T> OperatorCheck<T>
where
    T: FloatT,
{
    /// Fails if the settings do not pass [`CheckSettings::validate`], e.g.
    /// for settings deserialized from a file or built by struct literal.
    pub fn new(settings: CheckSettings<T>) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            stream: PrintTarget::default(),
        })
    }

    /// Check all four operations of `candidate` against `reference` at `x`.
    ///
    /// Fails if either operator has dimension other than `x.len()`, or if any
    /// operator call fails, e.g. with a singular pivot.  Failures to write
    /// verbose output are ignored.
    pub fn check<R, C>(
        &mut self,
        reference: &R,
        candidate: &C,
        x: &[T],
    ) -> Result<CheckReport<T>, OperatorError>
    where
        R: LinearOperator<T>,
        C: LinearOperator<T>,
    {
        let n = x.len();
        OperatorError::check_dim(reference.dim(), n)?;
        OperatorError::check_dim(candidate.dim(), n)?;

        use OperatorFunction::*;
        let mut results = Vec::with_capacity(4);
        for (fmul, finv) in [(Apply, ApplyInverse), (ApplyAdjoint, ApplyAdjointInverse)] {
            let pair = self.check_pair(reference, candidate, x, fmul, finv)?;
            results.extend(pair);
        }

        let report = CheckReport {
            results,
            tol_diff: self.settings.tol_diff,
        };

        if self.settings.verbose {
            let _ = writeln!(self.stream, "{}", report);
            let _ = self.stream.flush();
        }

        Ok(report)
    }

    // y = Ax and z = inv(A)y for both operators, reporting
    // the output differences
    fn check_pair<R, C>(
        &mut self,
        reference: &R,
        candidate: &C,
        x: &[T],
        fmul: OperatorFunction,
        finv: OperatorFunction,
    ) -> Result<[CheckResult<T>; 2], OperatorError>
    where
        R: LinearOperator<T>,
        C: LinearOperator<T>,
    {
        let tol = self.settings.tol_pivot;
        let n = x.len();
        let (mut yr, mut zr) = (vec![T::zero(); n], vec![T::zero(); n]);
        let (mut yc, mut zc) = (vec![T::zero(); n], vec![T::zero(); n]);

        reference.apply_function(fmul, &mut yr, x, tol)?;
        reference.apply_function(finv, &mut zr, &yr, tol)?;
        candidate.apply_function(fmul, &mut yc, x, tol)?;
        candidate.apply_function(finv, &mut zc, &yc, tol)?;

        let results = [
            CheckResult {
                function: fmul,
                error: yc.dist(&yr),
            },
            CheckResult {
                function: finv,
                error: zc.dist(&zr),
            },
        ];

        if self.settings.verbose {
            let _ = self.print_pair(x, [&yr[..], &zr[..], &yc[..], &zc[..]], &results, fmul);
        }

        Ok(results)
    }

    fn print_pair(
        &mut self,
        x: &[T],
        [yr, zr, yc, zc]: [&[T]; 4],
        results: &[CheckResult<T>; 2],
        fmul: OperatorFunction,
    ) -> std::io::Result<()> {
        let tag = if fmul == OperatorFunction::ApplyAdjoint {
            "'"
        } else {
            ""
        };
        let out = &mut self.stream;

        writeln!(out, "\nreference operator R")?;
        write!(out, "x = ")?;
        print_vector(out, x)?;
        write!(out, "y = R{}x = ", tag)?;
        print_vector(out, yr)?;
        write!(out, "z = inv(R{})y = ", tag)?;
        print_vector(out, zr)?;

        writeln!(out, "\ncandidate operator C")?;
        write!(out, "y = C{}x = ", tag)?;
        print_vector(out, yc)?;
        write!(out, "z = inv(C{})y = ", tag)?;
        print_vector(out, zc)?;

        for r in results {
            writeln!(out, "{}() error = {:.6e}", r.function, r.error)?;
        }
        out.flush()?;

        Ok(())
    }
}
