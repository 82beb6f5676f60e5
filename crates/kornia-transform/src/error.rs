use crate::matrix::MatrixSize;

/// An error type for dimension mismatches in the transform helpers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// The matrix to translate is not square.
    #[error("non-square matrix: cannot translate a {width}x{height} matrix")]
    NonSquare {
        /// Number of columns.
        width: usize,
        /// Number of rows.
        height: usize,
    },

    /// The vector does not match the homogeneous size of the matrix.
    ///
    /// A 2D vector needs a 3x3 matrix and a 3D vector needs a 4x4 matrix.
    #[error("translation failed: a {vector_dim}D vector cannot translate a {size}x{size} matrix")]
    TranslationFailed {
        /// Dimension of the translation vector.
        vector_dim: usize,
        /// Side length of the square matrix.
        size: usize,
    },

    /// The matrix has fewer columns than the vector has components.
    #[error(
        "multiplication by vector failed: a {vector_dim}D vector needs at least {vector_dim} columns, got {width}"
    )]
    MultiplicationByVectorFailed {
        /// Dimension of the vector.
        vector_dim: usize,
        /// Number of columns of the matrix.
        width: usize,
    },

    /// The operands of a matrix product have incompatible shapes.
    #[error("cannot multiply a {left} matrix by a {right} matrix")]
    IncompatibleShapes {
        /// Size of the left operand.
        left: MatrixSize,
        /// Size of the right operand.
        right: MatrixSize,
    },

    /// The rows passed to build a matrix differ in length.
    #[error("row {row} has {actual} values, expected {expected}")]
    RaggedRows {
        /// Length of the first row.
        expected: usize,
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        actual: usize,
    },
}
