use ndarray::Array2;

/// Validate a chromagram: exactly 12 pitch-class rows, all entries finite.
pub(crate) fn valid_chromagram(chroma: &Array2<f32>) -> crate::Result<()> {
    if chroma.shape()[0] != 12 {
        return Err(crate::Error::ShapeMismatch {
            expected: "(12, n_frames)".to_string(),
            got: format!("({}, {})", chroma.shape()[0], chroma.shape()[1]),
        });
    }

    if !chroma.iter().all(|&v| v.is_finite()) {
        return Err(crate::Error::NonFiniteData);
    }

    Ok(())
}

/// Validate a chord-indexed matrix (similarity, prediction, or annotated):
/// exactly 24 chord rows.
pub(crate) fn valid_chord_matrix(matrix: &Array2<f32>) -> crate::Result<()> {
    if matrix.shape()[0] != 24 {
        return Err(crate::Error::ShapeMismatch {
            expected: "(24, n_frames)".to_string(),
            got: format!("({}, {})", matrix.shape()[0], matrix.shape()[1]),
        });
    }

    Ok(())
}
