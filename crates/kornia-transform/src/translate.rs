use crate::{error::DimensionError, matrix::Matrix, vector::Vector};

/// Build the homogeneous transform that translates by `vector`.
///
/// The result is the identity of the given `size` with the vector stored in the last column,
/// above the homogeneous 1. A 2D vector needs `size == 3` and a 3D vector needs `size == 4`.
///
/// # Errors
///
/// Returns [`DimensionError::TranslationFailed`] if the vector does not match `size`.
pub fn translation_matrix<M: Matrix>(
    size: usize,
    vector: impl Into<Vector>,
) -> Result<M, DimensionError> {
    let vector = vector.into();

    let expected_size = match vector {
        Vector::Vec2(_) => 3,
        Vector::Vec3(_) => 4,
    };
    if size != expected_size {
        log::warn!(
            "cannot translate a {size}x{size} matrix by a {}D vector",
            vector.dim()
        );
        return Err(DimensionError::TranslationFailed {
            vector_dim: vector.dim(),
            size,
        });
    }

    let mut transformation = M::identity(size);
    for (row, value) in vector.components().into_iter().enumerate() {
        transformation.set_value_at(size - 1, row, value);
    }

    Ok(transformation)
}

/// Translate a 3x3 or 4x4 homogeneous matrix by a vector.
///
/// In the 3x3 case the vector has to be 2D, in the 4x4 case it has to be 3D. The result is
/// `matrix * T` where `T` is the [`translation_matrix`] of the vector, so the translation is
/// applied before the transform already encoded in `matrix`.
///
/// # Arguments
///
/// * `matrix` - The square homogeneous matrix to translate.
/// * `vector` - The translation vector.
///
/// # Returns
///
/// A newly allocated translated matrix. The input is left untouched.
///
/// # Errors
///
/// * [`DimensionError::NonSquare`] if the matrix is not square.
/// * [`DimensionError::TranslationFailed`] if the vector does not match the matrix size.
///
/// Example:
///
/// ```
/// use kornia_transform::{flatten, translate, Matrix, Vec2};
///
/// let m = <faer::Mat<f64> as Matrix>::identity(3);
/// let t = translate(&m, Vec2::new(5.0, 7.0)).unwrap();
/// assert_eq!(flatten(&t), vec![1.0, 0.0, 5.0, 0.0, 1.0, 7.0, 0.0, 0.0, 1.0]);
/// ```
pub fn translate<M: Matrix>(matrix: &M, vector: impl Into<Vector>) -> Result<M, DimensionError> {
    let size = matrix.size();
    if !matrix.is_square() {
        log::warn!("cannot translate non-square {size} matrix");
        return Err(DimensionError::NonSquare {
            width: size.width,
            height: size.height,
        });
    }

    let transformation = translation_matrix::<M>(size.height, vector)?;
    log::debug!("composing {size} matrix with translation");

    matrix.multiply(&transformation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{flatten, Vec2, Vec3};
    use approx::assert_relative_eq;

    type Mat = faer::Mat<f64>;

    #[test]
    fn test_translate_identity_2d() -> Result<(), Box<dyn std::error::Error>> {
        let m = Mat::from_fn(3, 3, |i, j| if i == j { 1.0 } else { 0.0 });
        let t = translate(&m, Vec2::new(5.0, 7.0))?;
        let expected = [1.0, 0.0, 5.0, 0.0, 1.0, 7.0, 0.0, 0.0, 1.0];
        assert_eq!(flatten(&t), expected);
        Ok(())
    }

    #[test]
    fn test_translate_identity_3d() -> Result<(), Box<dyn std::error::Error>> {
        let m = <Mat as Matrix>::identity(4);
        let t = translate(&m, Vec3::new(1.0, 2.0, 3.0))?;
        #[rustfmt::skip]
        let expected = [
            1.0, 0.0, 0.0, 1.0,
            0.0, 1.0, 0.0, 2.0,
            0.0, 0.0, 1.0, 3.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        assert_eq!(flatten(&t), expected);
        Ok(())
    }

    #[test]
    fn test_translate_composes_after_scale() -> Result<(), Box<dyn std::error::Error>> {
        // uniform scale by 2 in the upper-left block
        let m = <Mat as Matrix>::from_rows(&[
            vec![2.0, 0.0, 0.0],
            vec![0.0, 2.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ])?;
        let t = translate(&m, Vec2::new(1.0, -3.0))?;
        assert_relative_eq!(t.value_at(2, 0), 2.0);
        assert_relative_eq!(t.value_at(2, 1), -6.0);
        assert_relative_eq!(t.value_at(2, 2), 1.0);
        // input is untouched
        assert_eq!(m.value_at(2, 0), 0.0);
        Ok(())
    }

    #[test]
    fn test_translate_non_square() {
        let m = Mat::zeros(3, 4);
        let res = translate(&m, Vec2::new(1.0, 1.0));
        assert_eq!(
            res.err(),
            Some(DimensionError::NonSquare {
                width: 4,
                height: 3
            })
        );
    }

    #[test]
    fn test_translate_mismatched_vector() {
        let m = <Mat as Matrix>::identity(4);
        let res = translate(&m, Vec2::new(1.0, 1.0));
        assert_eq!(
            res.err(),
            Some(DimensionError::TranslationFailed {
                vector_dim: 2,
                size: 4
            })
        );

        let m = <Mat as Matrix>::identity(3);
        let res = translate(&m, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(
            res.err(),
            Some(DimensionError::TranslationFailed {
                vector_dim: 3,
                size: 3
            })
        );
    }

    #[test]
    fn test_translation_matrix() -> Result<(), Box<dyn std::error::Error>> {
        let t: Mat = translation_matrix(4, Vec3::new(-1.0, 0.5, 8.0))?;
        assert_eq!(t.value_at(3, 0), -1.0);
        assert_eq!(t.value_at(3, 1), 0.5);
        assert_eq!(t.value_at(3, 2), 8.0);
        assert_eq!(t.value_at(3, 3), 1.0);
        assert_eq!(t.value_at(0, 3), 0.0);

        let res: Result<Mat, _> = translation_matrix(2, Vec2::new(1.0, 2.0));
        assert!(res.is_err());
        Ok(())
    }
}
