use crate::validate::valid_chromagram;
use ndarray::Array2;

/// Score every chromagram frame against every chord template.
///
/// Entry `[c][t]` is the scalar product between template row `c` and
/// chromagram column `t`. No normalization happens here: if comparable
/// magnitudes across frames are wanted, normalize the chromagram columns
/// first (see [`log_compression`](crate::preprocess::log_compression)).
///
/// # Arguments
/// * `chroma` - Chromagram with shape `(12, n_frames)`
/// * `templates` - Chord template matrix with shape `(24, 12)`, as built by
///   [`chord_templates`](crate::template::chord_templates)
///
/// # Returns
/// Similarity matrix with shape `(24, n_frames)`.
///
/// # Errors
/// Shape errors if the chromagram does not have 12 rows or the template
/// matrix is not `(24, 12)`.
///
/// # Example
/// ```
/// use chordal::similarity::chord_similarities;
/// use chordal::template::chord_templates;
/// use ndarray::Array2;
///
/// let templates = chord_templates(0.0).unwrap();
/// let mut chroma = Array2::<f32>::zeros((12, 1));
/// chroma[(0, 0)] = 1.0; // C
/// chroma[(4, 0)] = 1.0; // E
/// chroma[(7, 0)] = 1.0; // G
///
/// let sim = chord_similarities(&chroma, &templates).unwrap();
/// assert_eq!(sim.shape(), &[24, 1]);
/// ```
pub fn chord_similarities(
    chroma: &Array2<f32>,
    templates: &Array2<f32>,
) -> crate::Result<Array2<f32>> {
    valid_chromagram(chroma)?;

    if templates.shape() != [24, 12] {
        return Err(crate::Error::ShapeMismatch {
            expected: "(24, 12)".to_string(),
            got: format!("({}, {})", templates.shape()[0], templates.shape()[1]),
        });
    }

    let n_frames = chroma.shape()[1];
    let mut similarities = Array2::<f32>::zeros((24, n_frames));

    for t in 0..n_frames {
        for c in 0..24 {
            let mut sum = 0.0f64;
            for p in 0..12 {
                sum += chroma[(p, t)] as f64 * templates[(c, p)] as f64;
            }
            similarities[(c, t)] = sum as f32;
        }
    }

    Ok(similarities)
}
