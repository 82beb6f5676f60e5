use crate::matrix::Matrix;

/// Flatten a matrix into a one-dimensional sequence in row-major order.
///
/// The entry at column `i` and row `j` lands at position `j * width + i`. A matrix with no
/// rows or no columns gives an empty sequence.
///
/// Example:
///
/// ```
/// use kornia_transform::{flatten, Matrix};
///
/// let m = <faer::Mat<f64> as Matrix>::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(flatten(&m), vec![1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn flatten<M: Matrix>(matrix: &M) -> Vec<f64> {
    let size = matrix.size();
    if size.height == 0 || size.width == 0 {
        return Vec::new();
    }

    let mut values = Vec::with_capacity(size.width * size.height);
    for row in 0..size.height {
        for column in 0..size.width {
            values.push(matrix.value_at(column, row));
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_empty() {
        assert!(flatten(&faer::Mat::<f64>::zeros(0, 3)).is_empty());
        assert!(flatten(&faer::Mat::<f64>::zeros(3, 0)).is_empty());
        assert!(flatten(&faer::Mat::<f64>::zeros(0, 0)).is_empty());
    }

    #[test]
    fn test_flatten_row_major() {
        let m = faer::Mat::<f64>::from_fn(2, 3, |i, j| (10 * i + j) as f64);
        let values = flatten(&m);
        assert_eq!(values, vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);

        let size = Matrix::size(&m);
        for row in 0..size.height {
            for column in 0..size.width {
                assert_eq!(values[row * size.width + column], m.value_at(column, row));
            }
        }
    }
}
