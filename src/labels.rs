//! Label tables for pitch classes and the 24 chord classes.
//!
//! The orderings here match the row layout produced by
//! [`chord_templates`](crate::template::chord_templates): majors C..B first,
//! then minors Cm..Bm.

/// Pitch class names in chromagram row order, starting at C.
pub const PITCH_CLASS_LABELS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Chord names in template row order: 12 majors, then 12 minors.
pub const CHORD_LABELS: [&str; 24] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B", "Cm", "C#m", "Dm", "D#m",
    "Em", "Fm", "F#m", "Gm", "G#m", "Am", "A#m", "Bm",
];

/// Look up the name of a chord class by its template row index.
///
/// Returns `None` for indices outside `0..24`.
pub fn chord_name(index: usize) -> Option<&'static str> {
    CHORD_LABELS.get(index).copied()
}

/// Look up the template row index of a chord by name, e.g. `"F#m"` -> 18.
///
/// Returns `None` for names outside the 24 major/minor chord classes.
pub fn chord_index(name: &str) -> Option<usize> {
    CHORD_LABELS.iter().position(|&label| label == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for (i, &label) in CHORD_LABELS.iter().enumerate() {
            assert_eq!(chord_name(i), Some(label));
            assert_eq!(chord_index(label), Some(i));
        }
        assert_eq!(chord_name(24), None);
        assert_eq!(chord_index("H"), None);
        assert_eq!(chord_index("Cmaj7"), None);
    }

    #[test]
    fn minors_sit_an_octave_of_rows_above_majors() {
        for i in 0..12 {
            let major = CHORD_LABELS[i];
            let minor = CHORD_LABELS[i + 12];
            assert_eq!(minor, format!("{major}m"));
            assert_eq!(major, PITCH_CLASS_LABELS[i]);
        }
    }
}
