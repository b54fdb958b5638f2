//! Ground-truth chord annotations for three reference recordings.
//!
//! Each track covers the first 30 seconds of one recording as an ordered
//! list of `(time, label)` pairs. Times are interval boundaries in seconds;
//! the label at `key` governs the half-open interval `(key, next_key]`.
//! Labels are template row indices (0..24) or [`NO_CHORD`] where the source
//! annotation marks silence or no chord.
//!
//! Sources for the hand-mapped tables:
//! - "Helter Skelter" (The Beatles): isophonics reference annotations
//! - "The Girl from Ipanema" (Stan Getz / Antonio Carlos Jobim): MTG/JAAH
//! - "Honey Honey" (ABBA): McGill Billboard project
//!
//! Chords outside the 24 major/minor classes were folded onto their nearest
//! triad when the tables were transcribed.

use crate::timing::sample_times;
use ndarray::Array2;

/// Sentinel label marking "no chord / silence / unannotated" intervals.
///
/// Frames governed by a sentinel interval come out as all-zero columns in
/// the resolved matrix and are excluded from the accuracy denominator.
pub const NO_CHORD: usize = 25;

/// Length in seconds of the annotated window at the start of each track.
pub const ANNOTATION_WINDOW: f32 = 30.0;

/// An annotation track: strictly increasing interval boundaries with the
/// chord label governing the interval that starts at each boundary.
pub type AnnotationTrack = &'static [(f32, usize)];

/// "Helter Skelter", The Beatles.
pub const HELTER_SKELTER: AnnotationTrack = &[
    (0.0, NO_CHORD),
    (0.165431, 4),
    (0.588571, 4),
    (6.521269, 1),
    (9.435374, 0),
    (12.24499, 7),
    (15.08943, 4),
    (18.00354, 4),
    (30.0, 4),
];

/// "The Girl from Ipanema", Stan Getz and Antonio Carlos Jobim.
pub const IPANEMA: AnnotationTrack = &[
    (0.0, NO_CHORD),
    (0.19, 1),
    (11.24, 3),
    (14.96, 15),
    (16.83, 8),
    (18.65, 1),
    (20.51, 2),
    (22.39, 1),
    (26.15, 3),
    (29.85, 15),
    (30.0, 15),
];

/// "Honey Honey", ABBA.
pub const HONEY_HONEY: AnnotationTrack = &[
    (0.0, NO_CHORD),
    (0.255419501, 5),
    (3.781734693, 10),
    (6.867260487, 0),
    (7.308049886, 5),
    (10.74512472, 10),
    (14.18219955, 5),
    (17.61927438, 10),
    (21.05634921, 5),
    (22.77260771, 14),
    (24.48886621, 5),
    (26.20512472, 14),
    (27.92138322, 5),
    (29.63764172, 14),
    (30.0, 14),
];

/// Titles accepted by [`annotation_track`] and [`annotation_matrix`].
pub const TRACK_TITLES: [&str; 3] = ["HelterSkelter", "Ipanema", "HoneyHoney"];

/// Look up the raw annotation track registered under `title`.
///
/// # Errors
/// [`Error::UnknownTrack`](crate::Error::UnknownTrack) if the title is not
/// one of [`TRACK_TITLES`].
pub fn annotation_track(title: &str) -> crate::Result<AnnotationTrack> {
    match title {
        "HelterSkelter" => Ok(HELTER_SKELTER),
        "Ipanema" => Ok(IPANEMA),
        "HoneyHoney" => Ok(HONEY_HONEY),
        _ => Err(crate::Error::UnknownTrack(title.to_string())),
    }
}

/// Resolve a track's sparse annotations onto a dense one-hot matrix.
///
/// `n_frames` evenly spaced sample times are laid over the 30-second
/// annotation window, endpoints included. Each sample time picks up the
/// label of the first interval `(key, next_key]` that contains it; sentinel
/// intervals leave the column all-zero.
///
/// A sample falling exactly on the track's first boundary (time 0.0)
/// matches no interval under the half-open rule and stays unlabeled. This
/// matters for frame 0 of every resolution and is kept deliberately, since
/// the accuracy scorer excludes such columns from its denominator.
///
/// # Arguments
/// * `title` - One of [`TRACK_TITLES`]
/// * `n_frames` - Number of frames of the chromagram being scored
///
/// # Returns
/// Binary annotated matrix with shape `(24, n_frames)`.
///
/// # Errors
/// [`Error::UnknownTrack`](crate::Error::UnknownTrack) for an unrecognized
/// title.
///
/// # Example
/// ```
/// use chordal::annotations::annotation_matrix;
///
/// let annotated = annotation_matrix("HelterSkelter", 100).unwrap();
/// assert_eq!(annotated.shape(), &[24, 100]);
/// ```
pub fn annotation_matrix(title: &str, n_frames: usize) -> crate::Result<Array2<f32>> {
    let track = annotation_track(title)?;

    let mut annotated = Array2::<f32>::zeros((24, n_frames));
    let times = sample_times(n_frames, 0.0, ANNOTATION_WINDOW);

    for (i, &t) in times.iter().enumerate() {
        for pair in track.windows(2) {
            let (key, label) = pair[0];
            let (next_key, _) = pair[1];

            if key < t && t <= next_key {
                if label != NO_CHORD {
                    annotated[(label, i)] = 1.0;
                }
                break;
            }
        }
    }

    Ok(annotated)
}
