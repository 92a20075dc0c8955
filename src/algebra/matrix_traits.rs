use crate::algebra::MatrixShape;

/// Dimensional information for matrix types and their views.
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// orientation of the underlying data
    fn shape(&self) -> MatrixShape;
    /// returns (nrows, ncols)
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if `nrows == ncols`
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
