use ndarray::Array2;

/// Cyclically rotate a 12-element pitch-class profile upward by `shift`
/// semitones, so the weight at pitch class p moves to (p + shift) mod 12.
fn roll(profile: &[f32; 12], shift: usize) -> [f32; 12] {
    let mut out = [0.0f32; 12];
    for (p, &v) in profile.iter().enumerate() {
        out[(p + shift) % 12] = v;
    }
    out
}

/// Build the reference templates for all 24 major and minor chords.
///
/// Each template is a 12-dimensional harmonic profile. The root pitch class
/// carries the fundamental plus its octave partials, and weaker weights sit
/// where the lower partials of the chord tones fall:
///
/// - pitch class 0: `1 + alpha + alpha^3 + alpha^7`
/// - pitch class 4: `alpha^4`
/// - pitch class 7: `alpha^2 + alpha^5`
/// - pitch class 10: `alpha^6`
///
/// A major chord stacks the root profile with its rotations by a major
/// third (4 semitones) and a fifth (7 semitones); a minor chord swaps the
/// major third for a minor third (3 semitones). All 24 rows are divided by
/// the L2 norm of the major-chord profile, sharing one normalization
/// constant so the relative scale between major and minor rows is kept.
///
/// # Arguments
/// * `alpha` - Harmonic decay weight in `[0, 1]`. `0.0` gives plain triads
///   with no overtones.
///
/// # Returns
/// A `(24, 12)` matrix: rows 0-11 are the major chords C..B, rows 12-23 the
/// minor chords Cm..Bm, in fixed pitch-class order.
///
/// # Errors
/// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if
/// `alpha` is not finite or lies outside `[0, 1]`.
///
/// # Example
/// ```
/// use chordal::template::chord_templates;
///
/// let templates = chord_templates(0.0).unwrap();
/// assert_eq!(templates.shape(), &[24, 12]);
///
/// // C major with alpha = 0: equal weight on C, E, G only
/// assert!(templates[(0, 0)] > 0.0);
/// assert!(templates[(0, 4)] > 0.0);
/// assert!(templates[(0, 7)] > 0.0);
/// assert_eq!(templates[(0, 1)], 0.0);
/// ```
pub fn chord_templates(alpha: f32) -> crate::Result<Array2<f32>> {
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return Err(crate::Error::InvalidParameter {
            name: "alpha",
            value: alpha.to_string(),
            reason: "must be between 0 and 1".to_string(),
        });
    }

    let mut root = [0.0f32; 12];
    root[0] = 1.0 + alpha + alpha.powi(3) + alpha.powi(7);
    root[4] = alpha.powi(4);
    root[7] = alpha.powi(2) + alpha.powi(5);
    root[10] = alpha.powi(6);

    let minor_third = roll(&root, 3);
    let major_third = roll(&root, 4);
    let fifth = roll(&root, 7);

    let mut major_chord = [0.0f32; 12];
    let mut minor_chord = [0.0f32; 12];
    for p in 0..12 {
        major_chord[p] = root[p] + major_third[p] + fifth[p];
        minor_chord[p] = root[p] + minor_third[p] + fifth[p];
    }

    // Shared normalization constant: the L2 norm of the major profile
    let mut norm_sq = 0.0f64;
    for &v in &major_chord {
        norm_sq += (v as f64).powi(2);
    }
    let norm = norm_sq.sqrt() as f32;

    let mut templates = Array2::<f32>::zeros((24, 12));
    for i in 0..12 {
        let major_i = roll(&major_chord, i);
        let minor_i = roll(&minor_chord, i);
        for p in 0..12 {
            templates[(i, p)] = major_i[p] / norm;
            templates[(i + 12, p)] = minor_i[p] / norm;
        }
    }

    Ok(templates)
}
