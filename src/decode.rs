use crate::validate::valid_chord_matrix;
use ndarray::Array2;

/// Turn a similarity matrix into a frame-wise chord decision.
///
/// For each frame the row with the highest similarity is set to 1 and every
/// other row to 0, giving a one-hot binary matrix of the same shape. Exact
/// ties go to the lowest row index, i.e. the first chord in label order.
///
/// # Arguments
/// * `similarities` - Similarity matrix with shape `(24, n_frames)`
///
/// # Returns
/// Binary prediction matrix with shape `(24, n_frames)`.
///
/// # Errors
/// Shape error if the input does not have 24 rows.
///
/// # Example
/// ```
/// use chordal::decode::predict_chords;
/// use ndarray::Array2;
///
/// let mut sim = Array2::<f32>::zeros((24, 1));
/// sim[(7, 0)] = 0.9; // G major wins
///
/// let predicted = predict_chords(&sim).unwrap();
/// assert_eq!(predicted[(7, 0)], 1.0);
/// assert_eq!(predicted.column(0).sum(), 1.0);
/// ```
pub fn predict_chords(similarities: &Array2<f32>) -> crate::Result<Array2<f32>> {
    valid_chord_matrix(similarities)?;

    let n_frames = similarities.shape()[1];
    let mut predicted = Array2::<f32>::zeros((24, n_frames));

    for t in 0..n_frames {
        let mut best = 0usize;
        let mut best_val = similarities[(0, t)];
        for c in 1..24 {
            if similarities[(c, t)] > best_val {
                best_val = similarities[(c, t)];
                best = c;
            }
        }
        predicted[(best, t)] = 1.0;
    }

    Ok(predicted)
}
