use crate::validate::valid_chord_matrix;
use ndarray::Array2;

/// Ratio of correctly predicted frames, ignoring unannotated ones.
///
/// A frame counts as correct when its predicted and annotated columns are
/// exactly equal. Frames whose annotated column is all-zero carried the
/// no-chord sentinel and are excluded from both the numerator and the
/// denominator, so silence at the start of a track does not drag the score
/// down.
///
/// # Arguments
/// * `predicted` - Binary prediction matrix with shape `(24, n_frames)`
/// * `annotated` - Binary annotated matrix of the same shape
///
/// # Returns
/// Accuracy in `[0, 1]`.
///
/// # Errors
/// Shape errors if either matrix lacks 24 rows or the shapes differ;
/// [`Error::NoAnnotatedFrames`](crate::Error::NoAnnotatedFrames) when every
/// frame is excluded and no denominator remains.
///
/// # Example
/// ```
/// use chordal::score::accuracy;
/// use ndarray::Array2;
///
/// let mut predicted = Array2::<f32>::zeros((24, 2));
/// predicted[(4, 0)] = 1.0;
/// predicted[(4, 1)] = 1.0;
///
/// let mut annotated = Array2::<f32>::zeros((24, 2));
/// annotated[(4, 0)] = 1.0; // frame 1 is unannotated
///
/// assert_eq!(accuracy(&predicted, &annotated).unwrap(), 1.0);
/// ```
pub fn accuracy(predicted: &Array2<f32>, annotated: &Array2<f32>) -> crate::Result<f32> {
    valid_chord_matrix(predicted)?;
    valid_chord_matrix(annotated)?;

    if predicted.shape() != annotated.shape() {
        return Err(crate::Error::ShapeMismatch {
            expected: format!("({}, {})", predicted.shape()[0], predicted.shape()[1]),
            got: format!("({}, {})", annotated.shape()[0], annotated.shape()[1]),
        });
    }

    let n_frames = predicted.shape()[1];
    let mut annotated_frames = 0usize;
    let mut correct_frames = 0usize;

    for t in 0..n_frames {
        let excluded = (0..24).all(|c| annotated[(c, t)] == 0.0);
        if excluded {
            continue;
        }

        annotated_frames += 1;
        if (0..24).all(|c| predicted[(c, t)] == annotated[(c, t)]) {
            correct_frames += 1;
        }
    }

    if annotated_frames == 0 {
        return Err(crate::Error::NoAnnotatedFrames);
    }

    Ok(correct_frames as f32 / annotated_frames as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn one_hot(rows: &[usize]) -> Array2<f32> {
        let mut m = Array2::<f32>::zeros((24, rows.len()));
        for (t, &c) in rows.iter().enumerate() {
            if c < 24 {
                m[(c, t)] = 1.0;
            }
        }
        m
    }

    // Row 24 in the helper means "leave the column empty".
    const EMPTY: usize = 24;

    #[test]
    fn perfect_match_with_excluded_frames() {
        // 10 frames, 2 unannotated; prediction matches everywhere else.
        let annotated = one_hot(&[EMPTY, 3, 3, 7, 7, EMPTY, 12, 12, 0, 0]);
        let predicted = one_hot(&[5, 3, 3, 7, 7, 5, 12, 12, 0, 0]);

        assert_relative_eq!(accuracy(&predicted, &annotated).unwrap(), 1.0);
    }

    #[test]
    fn one_mismatch_in_ten() {
        let annotated = one_hot(&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
        let predicted = one_hot(&[1, 1, 1, 1, 13, 1, 1, 1, 1, 1]);

        assert_relative_eq!(accuracy(&predicted, &annotated).unwrap(), 0.9);
    }

    #[test]
    fn mismatch_on_excluded_frame_does_not_count() {
        let annotated = one_hot(&[EMPTY, 2, 2, 2]);
        let predicted = one_hot(&[9, 2, 2, 2]);

        assert_relative_eq!(accuracy(&predicted, &annotated).unwrap(), 1.0);
    }

    #[test]
    fn all_wrong_scores_zero() {
        let annotated = one_hot(&[0, 1, 2, 3]);
        let predicted = one_hot(&[4, 5, 6, 7]);

        assert_relative_eq!(accuracy(&predicted, &annotated).unwrap(), 0.0);
    }

    #[test]
    fn fully_unannotated_is_an_error() {
        let annotated = Array2::<f32>::zeros((24, 6));
        let predicted = one_hot(&[0, 0, 0, 0, 0, 0]);

        assert!(matches!(
            accuracy(&predicted, &annotated),
            Err(crate::Error::NoAnnotatedFrames)
        ));
    }

    #[test]
    fn shape_checks() {
        let a = Array2::<f32>::zeros((24, 4));
        let b = Array2::<f32>::zeros((24, 5));
        assert!(accuracy(&a, &b).is_err());

        let c = Array2::<f32>::zeros((12, 4));
        assert!(accuracy(&c, &a).is_err());
        assert!(accuracy(&a, &c).is_err());
    }
}
