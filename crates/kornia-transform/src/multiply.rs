use crate::{error::DimensionError, matrix::Matrix, vector::Vector};

/// The value of the column entries past the components of the vector.
// TODO: decide whether 0 (a direction instead of a point) is the better fill value.
pub const COLUMN_FILL_VALUE: f64 = 1.0;

/// Build the column matrix of `height` rows holding `vector`.
///
/// The first entries are the components of the vector, the remaining ones are set to
/// [`COLUMN_FILL_VALUE`].
///
/// # Errors
///
/// Returns [`DimensionError::MultiplicationByVectorFailed`] if `height` is smaller than the
/// dimension of the vector.
pub fn column_matrix<M: Matrix>(
    height: usize,
    vector: impl Into<Vector>,
) -> Result<M, DimensionError> {
    let vector = vector.into();

    let min_height = match vector {
        Vector::Vec2(_) => 2,
        Vector::Vec3(_) => 3,
    };
    if height < min_height {
        log::warn!(
            "cannot multiply a matrix with {height} columns by a {}D vector",
            vector.dim()
        );
        return Err(DimensionError::MultiplicationByVectorFailed {
            vector_dim: vector.dim(),
            width: height,
        });
    }

    let mut rows = vec![vec![COLUMN_FILL_VALUE]; height];
    for (row, value) in rows.iter_mut().zip(vector.components()) {
        row[0] = value;
    }

    M::from_rows(&rows)
}

/// Multiply a matrix by a 2D or 3D vector taken as a column vector.
///
/// The vector is turned into a [`column_matrix`] as tall as the matrix is wide, and the
/// result is `matrix * column`, a matrix with the height of `matrix` and a single column.
///
/// # Arguments
///
/// * `matrix` - The matrix to multiply. It needs at least 2 columns for a 2D vector and at
///   least 3 columns for a 3D vector.
/// * `vector` - The vector to multiply with.
///
/// # Errors
///
/// Returns [`DimensionError::MultiplicationByVectorFailed`] if the matrix is too narrow.
///
/// Example:
///
/// ```
/// use kornia_transform::{flatten, multiply_by_vector, Matrix, Vec2};
///
/// let m = <faer::Mat<f64> as Matrix>::identity(2);
/// let v = multiply_by_vector(&m, Vec2::new(4.0, 9.0)).unwrap();
/// assert_eq!(flatten(&v), vec![4.0, 9.0]);
/// ```
pub fn multiply_by_vector<M: Matrix>(
    matrix: &M,
    vector: impl Into<Vector>,
) -> Result<M, DimensionError> {
    let size = matrix.size();
    let column = column_matrix::<M>(size.width, vector)?;
    log::debug!("multiplying {size} matrix by column vector");

    matrix.multiply(&column)
}
