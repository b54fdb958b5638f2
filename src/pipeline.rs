use crate::annotations::annotation_matrix;
use crate::decode::predict_chords;
use crate::preprocess::{log_compression, temporal_smoothing};
use crate::score::accuracy;
use crate::similarity::chord_similarities;
use crate::template::chord_templates;
use ndarray::Array2;

/// Settings for the end-to-end recognition pipeline.
#[derive(Debug, Clone, Copy)]
pub struct RecognitionConfig {
    /// Harmonic weight for the chord templates, in `[0, 1]`.
    pub alpha: f32,
    /// Temporal smoothing window in frames, or `None` to skip smoothing.
    pub smoothing: Option<usize>,
    /// Logarithmic compression weight, or `None` to skip compression.
    pub gamma: Option<f32>,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            smoothing: Some(20),
            gamma: Some(1.0),
        }
    }
}

/// Run the full recognition pipeline on a chromagram.
///
/// Applies temporal smoothing and logarithmic compression as configured,
/// scores the result against the chord templates for `config.alpha`, and
/// decodes a one-hot chord decision per frame. For access to the
/// intermediate similarity matrix, compose the stages from
/// [`preprocess`](crate::preprocess), [`similarity`](crate::similarity) and
/// [`decode`](crate::decode) directly.
///
/// # Arguments
/// * `chroma` - Chromagram with shape `(12, n_frames)`
/// * `config` - Pipeline settings
///
/// # Returns
/// Binary prediction matrix with shape `(24, n_frames)`.
///
/// # Errors
/// Propagates the shape and parameter errors of the individual stages.
pub fn recognize(chroma: &Array2<f32>, config: &RecognitionConfig) -> crate::Result<Array2<f32>> {
    let templates = chord_templates(config.alpha)?;

    let mut processed = chroma.clone();
    if let Some(l) = config.smoothing {
        processed = temporal_smoothing(&processed, l)?;
    }
    if let Some(gamma) = config.gamma {
        processed = log_compression(&processed, gamma)?;
    }

    let similarities = chord_similarities(&processed, &templates)?;
    predict_chords(&similarities)
}

/// Recognize chords in a chromagram and score the result against one of the
/// reference annotation tracks.
///
/// The chromagram is assumed to cover the track's 30-second annotation
/// window; the annotations are resolved to the chromagram's frame count
/// before comparison.
///
/// # Arguments
/// * `chroma` - Chromagram with shape `(12, n_frames)`
/// * `config` - Pipeline settings
/// * `title` - One of [`TRACK_TITLES`](crate::annotations::TRACK_TITLES)
///
/// # Returns
/// Accuracy in `[0, 1]`.
///
/// # Errors
/// Propagates stage errors, unknown-title errors, and
/// [`Error::NoAnnotatedFrames`](crate::Error::NoAnnotatedFrames) when the
/// resolved annotations leave nothing to score.
pub fn evaluate(
    chroma: &Array2<f32>,
    config: &RecognitionConfig,
    title: &str,
) -> crate::Result<f32> {
    let predicted = recognize(chroma, config)?;
    let annotated = annotation_matrix(title, chroma.shape()[1])?;
    accuracy(&predicted, &annotated)
}
