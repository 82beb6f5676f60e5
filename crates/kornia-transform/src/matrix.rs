use crate::error::DimensionError;

/// The size of a matrix in columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixSize {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl std::fmt::Display for MatrixSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The capabilities the transform helpers need from a dense matrix type.
///
/// Entries are addressed column first, i.e. `value_at(column, row)`, with 0-based indices.
/// The helpers never write into a matrix supplied by the caller, only into matrices they
/// build themselves through [`Matrix::identity`] or [`Matrix::from_rows`].
pub trait Matrix: Sized {
    /// The number of columns and rows of the matrix.
    fn size(&self) -> MatrixSize;

    /// Read the entry at `column` and `row`.
    ///
    /// PRECONDITION: `column < width` and `row < height`.
    fn value_at(&self, column: usize, row: usize) -> f64;

    /// Write the entry at `column` and `row`.
    ///
    /// PRECONDITION: `column < width` and `row < height`.
    fn set_value_at(&mut self, column: usize, row: usize, value: f64);

    /// Whether the matrix has as many rows as columns.
    fn is_square(&self) -> bool {
        let size = self.size();
        size.height == size.width
    }

    /// Compute the product `self * other`.
    ///
    /// The result has the height of `self` and the width of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::IncompatibleShapes`] if the width of `self` differs from the
    /// height of `other`.
    fn multiply(&self, other: &Self) -> Result<Self, DimensionError>;

    /// Create the identity matrix of `size` rows and columns.
    fn identity(size: usize) -> Self;

    /// Create a matrix from its rows.
    ///
    /// An empty slice gives an empty matrix.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::RaggedRows`] if the rows do not all have the same length.
    fn from_rows(rows: &[Vec<f64>]) -> Result<Self, DimensionError>;
}

/// Check that all the rows have the length of the first one and return that length.
pub(crate) fn check_rows(rows: &[Vec<f64>]) -> Result<usize, DimensionError> {
    let expected = rows.first().map_or(0, Vec::len);
    match rows.iter().position(|row| row.len() != expected) {
        Some(row) => Err(DimensionError::RaggedRows {
            expected,
            row,
            actual: rows[row].len(),
        }),
        None => Ok(expected),
    }
}

impl Matrix for faer::Mat<f64> {
    fn size(&self) -> MatrixSize {
        MatrixSize {
            width: self.ncols(),
            height: self.nrows(),
        }
    }

    fn value_at(&self, column: usize, row: usize) -> f64 {
        self.read(row, column)
    }

    fn set_value_at(&mut self, column: usize, row: usize, value: f64) {
        self.write(row, column, value);
    }

    fn multiply(&self, other: &Self) -> Result<Self, DimensionError> {
        if self.ncols() != other.nrows() {
            return Err(DimensionError::IncompatibleShapes {
                left: Matrix::size(self),
                right: Matrix::size(other),
            });
        }
        Ok(self * other)
    }

    fn identity(size: usize) -> Self {
        faer::Mat::from_fn(size, size, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    fn from_rows(rows: &[Vec<f64>]) -> Result<Self, DimensionError> {
        let ncols = check_rows(rows)?;
        Ok(faer::Mat::from_fn(rows.len(), ncols, |i, j| rows[i][j]))
    }
}
