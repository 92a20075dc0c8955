use thiserror::Error;

/// Error type returned by linear operator construction and application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperatorError {
    /// Vector, band or matrix data lengths are incompatible with the operator dimension
    #[error("Incompatible dimension: expected length {expected}, found {found}")]
    DimensionMismatch {
        /// length implied by the operator dimension
        expected: usize,
        /// length actually supplied
        found: usize,
    },
    /// A pivot with magnitude at or below tolerance (or NaN) was found during elimination
    #[error("Singular operator: pivot {index} is at or below tolerance")]
    SingularOperator {
        /// elimination step at which the pivot was found
        index: usize,
    },
    /// Operators must have dimension of at least one
    #[error("Operator dimension must be at least one")]
    EmptyOperator,
}

impl OperatorError {
    // checks that a vector or band has exactly the expected length
    pub(crate) fn check_dim(expected: usize, found: usize) -> Result<(), OperatorError> {
        if expected != found {
            return Err(OperatorError::DimensionMismatch { expected, found });
        }
        Ok(())
    }
}
