#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the transform helpers.
pub mod error;

/// Flattening of matrices into row-major sequences.
pub mod flatten;

/// The matrix capability contract and its dense backend.
pub mod matrix;

/// Multiplication of a matrix by a column vector.
pub mod multiply;

/// Translation of homogeneous transforms.
pub mod translate;

/// 2D and 3D vector types.
pub mod vector;

pub use error::DimensionError;
pub use flatten::flatten;
pub use matrix::{Matrix, MatrixSize};
pub use multiply::{column_matrix, multiply_by_vector, COLUMN_FILL_VALUE};
pub use translate::{translate, translation_matrix};
pub use vector::{Vec2, Vec3, Vector};

/// Transform helpers available as methods on every [`Matrix`].
///
/// Example:
///
/// ```
/// use kornia_transform::{Matrix, MatrixTransformExt, Vec2};
///
/// let m: faer::Mat<f64> = Matrix::identity(3);
/// let t = m.translate(Vec2::new(5.0, 7.0)).unwrap();
/// assert_eq!(t.flatten(), vec![1.0, 0.0, 5.0, 0.0, 1.0, 7.0, 0.0, 0.0, 1.0]);
/// ```
pub trait MatrixTransformExt: Matrix {
    /// See [`flatten()`].
    fn flatten(&self) -> Vec<f64> {
        flatten::flatten(self)
    }

    /// See [`translate()`].
    fn translate(&self, vector: impl Into<Vector>) -> Result<Self, DimensionError> {
        translate::translate(self, vector)
    }

    /// See [`multiply_by_vector()`].
    fn multiply_by_vector(&self, vector: impl Into<Vector>) -> Result<Self, DimensionError> {
        multiply::multiply_by_vector(self, vector)
    }
}

impl<M: Matrix> MatrixTransformExt for M {}
