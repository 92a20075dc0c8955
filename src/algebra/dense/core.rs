use crate::algebra::*;
use std::ops::{Index, IndexMut};
use std::sync::Arc;

// core dense matrix type for owned, borrowed and shared matrices
#[derive(Debug, Clone, PartialEq)]
pub struct DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: Sized,
{
    /// dimensions
    pub size: (usize, usize),
    /// vector of data in row major format
    pub data: S,
    pub(crate) phantom: std::marker::PhantomData<T>,
}

/// Dense matrix with owned data
pub type Matrix<T> = DenseStorageMatrix<Vec<T>, T>;
/// Dense matrix over reference counted data that may be shared with the caller
pub type SharedMatrix<T> = DenseStorageMatrix<Arc<[T]>, T>;

impl<S, T> ShapedMatrix for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn nrows(&self) -> usize {
        self.size.0
    }
    fn ncols(&self) -> usize {
        self.size.1
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

//NB: the owned dense type is just called "Matrix".  The "DenseMatrix" trait
//is implemented for every storage type and for their Adjoint views, so that
//the LU solver can read an operator or its transpose through one interface.
/// Read access to dense matrices and their adjoint views
pub trait DenseMatrix<T>: ShapedMatrix + Index<(usize, usize), Output = T> {
    /// position of the `(row, col)` entry in the underlying data
    fn index_linear(&self, idx: (usize, usize)) -> usize;
    /// underlying data, in the storage order of the source matrix
    fn data(&self) -> &[T];
}

impl<S, T> DenseMatrix<T> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.ncols() + idx.1
    }
    fn data(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<S, T> Index<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: Sized,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    /// Wraps existing row major data as an `m × n` matrix.
    ///
    /// # Panics
    /// Panics if the data length is not `m*n`, or if `m*n` overflows.
    pub fn from_data(size: (usize, usize), data: S) -> Self {
        let (m, n) = size;
        assert_eq!(m.checked_mul(n), Some(data.as_ref().len()));
        Self {
            size,
            data,
            phantom: std::marker::PhantomData,
        }
    }

    /// Adjoint view of the matrix.  No data is copied.
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let (m, n) = self.size;
        assert!(row < m);
        &self.data()[(row * n)..(row + 1) * n]
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        Self::from_data(size, vec![T::zero(); m * n])
    }

    /// Overwrite this matrix with the values of any dense matrix
    /// or dense matrix view of the same size.
    pub fn copy_from<M>(&mut self, src: &M) -> &mut Self
    where
        M: DenseMatrix<T>,
    {
        assert_eq!(self.size(), src.size());
        for r in 0..self.nrows() {
            for c in 0..self.ncols() {
                self[(r, c)] = src[(r, c)];
            }
        }
        self
    }

    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        let n = self.ncols();
        for c in 0..n {
            self.data.swap(r1 * n + c, r2 * n + c);
        }
    }
}

// Literal row major construction, e.g. Matrix::from(&[[1., 2.], [3., 4.]])
impl<const M: usize, const N: usize, T> From<&[[T; N]; M]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        let data = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self::from_data((M, N), data)
    }
}

// ------------------------------------------------
// Adjoint implementation for DenseMatrix.  This is
// a read only view of the matrix that allows for
// indexing and matrix-vector multiplication, but
// does not allow for modification of the underlying data.

impl<S, T> DenseMatrix<T> for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
    T: Sized,
{
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        //reverse the indices
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        self.src.data()
    }
}

impl<S, T> Index<(usize, usize)> for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}
