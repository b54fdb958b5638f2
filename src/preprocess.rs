use crate::validate::valid_chromagram;
use ndarray::Array2;

/// Smooth a chromagram over time with a sliding average window.
///
/// Output frame `i` is the sum of input frames in the index window
/// `[i - (l - 1) / 2, i + l / 2)` (integer division, upper end exclusive and
/// clamped to the last frame) divided by `l`. Because the divisor is always
/// `l` rather than the number of frames actually inside the clamped window,
/// frames near the edges come out systematically weaker than interior
/// frames. This boundary behavior is intentional and matched by the
/// accuracy figures reported for the reference recordings.
///
/// # Arguments
/// * `chroma` - Chromagram with shape `(12, n_frames)`
/// * `l` - Window size in frames, at least 2
///
/// # Returns
/// A freshly allocated smoothed chromagram of the same shape.
///
/// # Errors
/// Shape errors for non-12-row input, [`Error::InvalidSize`](crate::Error::InvalidSize)
/// for `l < 2`.
pub fn temporal_smoothing(chroma: &Array2<f32>, l: usize) -> crate::Result<Array2<f32>> {
    valid_chromagram(chroma)?;

    if l < 2 {
        return Err(crate::Error::InvalidSize {
            name: "l",
            value: l,
            reason: "must be at least 2",
        });
    }

    let n_frames = chroma.shape()[1];
    let mut smoothed = Array2::<f32>::zeros((12, n_frames));

    for i in 0..n_frames {
        let start = i.saturating_sub((l - 1) / 2);
        let end = (i + l / 2).min(n_frames.saturating_sub(1));

        for p in 0..12 {
            let mut sum = 0.0f64;
            for t in start..end {
                sum += chroma[(p, t)] as f64;
            }
            smoothed[(p, i)] = (sum / l as f64) as f32;
        }
    }

    Ok(smoothed)
}

/// Apply logarithmic compression followed by per-frame L2 normalization.
///
/// Each entry is mapped to `ln(1 + gamma * x)`, then every column is scaled
/// to unit L2 norm so frames become comparable regardless of their overall
/// energy. Columns whose compressed norm falls below `1e-10` are left as-is
/// instead of being divided toward NaN.
///
/// # Arguments
/// * `chroma` - Chromagram with shape `(12, n_frames)`
/// * `gamma` - Compression weight; larger values flatten dynamics harder
///
/// # Returns
/// A freshly allocated compressed and normalized chromagram.
///
/// # Errors
/// Shape errors for non-12-row input,
/// [`Error::InvalidParameter`](crate::Error::InvalidParameter) for
/// non-finite `gamma`.
///
/// # Example
/// ```
/// use chordal::preprocess::log_compression;
/// use ndarray::Array2;
///
/// let chroma = Array2::<f32>::from_elem((12, 4), 2.0);
/// let compressed = log_compression(&chroma, 1.0).unwrap();
///
/// // Every frame has unit L2 norm
/// for t in 0..4 {
///     let norm: f32 = (0..12).map(|p| compressed[(p, t)].powi(2)).sum::<f32>().sqrt();
///     assert!((norm - 1.0).abs() < 1e-5);
/// }
/// ```
pub fn log_compression(chroma: &Array2<f32>, gamma: f32) -> crate::Result<Array2<f32>> {
    valid_chromagram(chroma)?;

    if !gamma.is_finite() {
        return Err(crate::Error::InvalidParameter {
            name: "gamma",
            value: gamma.to_string(),
            reason: "must be finite".to_string(),
        });
    }

    let n_frames = chroma.shape()[1];
    let mut compressed = Array2::<f32>::zeros((12, n_frames));

    for t in 0..n_frames {
        for p in 0..12 {
            compressed[(p, t)] = (1.0 + gamma * chroma[(p, t)]).ln();
        }

        let mut sum_sq = 0.0f64;
        for p in 0..12 {
            sum_sq += (compressed[(p, t)] as f64).powi(2);
        }
        let norm = sum_sq.sqrt();
        if norm > 1e-10 {
            for p in 0..12 {
                compressed[(p, t)] = (compressed[(p, t)] as f64 / norm) as f32;
            }
        }
    }

    Ok(compressed)
}
