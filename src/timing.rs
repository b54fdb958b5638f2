//! Frame/time axis helpers for consumers of the recognition matrices.

/// Seconds at which each frame of an `n_frames`-column matrix starts, given
/// the hop size in seconds per frame.
///
/// # Example
/// ```
/// use chordal::timing::frame_times;
///
/// let times = frame_times(4, 0.5);
/// assert_eq!(times, vec![0.0, 0.5, 1.0, 1.5]);
/// ```
pub fn frame_times(n_frames: usize, hop: f32) -> Vec<f32> {
    (0..n_frames).map(|i| i as f32 * hop).collect()
}

/// `n` evenly spaced sample times covering `[start, end]` inclusive.
///
/// A single sample sits at `start`; zero samples give an empty vector.
pub fn sample_times(n: usize, start: f32, end: f32) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f32;
            (0..n).map(|i| start + i as f32 * step).collect()
        }
    }
}
