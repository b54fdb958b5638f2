use chordal::annotations::annotation_matrix;
use chordal::decode::predict_chords;
use chordal::pipeline::{recognize, RecognitionConfig};
use chordal::preprocess::{log_compression, temporal_smoothing};
use chordal::score::accuracy;
use chordal::similarity::chord_similarities;
use chordal::template::chord_templates;
use chordal::Error;
use ndarray::Array2;

#[test]
fn empty_chromagram_flows_through_the_pipeline() {
    let chroma = Array2::<f32>::zeros((12, 0));

    let smoothed = temporal_smoothing(&chroma, 4).unwrap();
    assert_eq!(smoothed.shape(), &[12, 0]);

    let compressed = log_compression(&smoothed, 1.0).unwrap();
    assert_eq!(compressed.shape(), &[12, 0]);

    let templates = chord_templates(0.5).unwrap();
    let sim = chord_similarities(&compressed, &templates).unwrap();
    assert_eq!(sim.shape(), &[24, 0]);

    let predicted = predict_chords(&sim).unwrap();
    assert_eq!(predicted.shape(), &[24, 0]);

    // Nothing to score: zero frames means zero annotated frames.
    let annotated = annotation_matrix("Ipanema", 0).unwrap();
    assert!(matches!(
        accuracy(&predicted, &annotated),
        Err(Error::NoAnnotatedFrames)
    ));
}

#[test]
fn wrong_row_counts_are_rejected_everywhere() {
    let tall = Array2::<f32>::zeros((13, 8));
    let templates = chord_templates(0.0).unwrap();

    assert!(matches!(
        temporal_smoothing(&tall, 4),
        Err(Error::ShapeMismatch { .. })
    ));
    assert!(matches!(
        log_compression(&tall, 1.0),
        Err(Error::ShapeMismatch { .. })
    ));
    assert!(matches!(
        chord_similarities(&tall, &templates),
        Err(Error::ShapeMismatch { .. })
    ));

    let short = Array2::<f32>::zeros((23, 8));
    assert!(matches!(
        predict_chords(&short),
        Err(Error::ShapeMismatch { .. })
    ));
    let ok = Array2::<f32>::zeros((24, 8));
    assert!(matches!(
        accuracy(&short, &ok),
        Err(Error::ShapeMismatch { .. })
    ));
}

#[test]
fn error_messages_name_the_parameter() {
    let err = chord_templates(1.5).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("alpha"), "got: {msg}");
    assert!(msg.contains("between 0 and 1"), "got: {msg}");

    let chroma = Array2::<f32>::zeros((12, 4));
    let err = temporal_smoothing(&chroma, 1).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains('l'), "got: {msg}");
    assert!(msg.contains("at least 2"), "got: {msg}");

    let err = annotation_matrix("Waterloo", 10).unwrap_err();
    assert!(err.to_string().contains("Waterloo"));
}

#[test]
fn recognize_on_silence_defaults_to_first_chord() {
    // All-zero similarity in every frame: the tie-break picks row 0.
    let chroma = Array2::<f32>::zeros((12, 5));
    let config = RecognitionConfig {
        alpha: 0.0,
        smoothing: None,
        gamma: None,
    };

    let predicted = recognize(&chroma, &config).unwrap();
    for t in 0..5 {
        assert_eq!(predicted[(0, t)], 1.0);
        assert_eq!(predicted.column(t).sum(), 1.0);
    }
}

#[test]
fn single_frame_resolution() {
    // One frame samples only t = 0, which no half-open interval contains.
    let annotated = annotation_matrix("HelterSkelter", 1).unwrap();
    assert_eq!(annotated.shape(), &[24, 1]);
    assert_eq!(annotated.column(0).sum(), 0.0);
}

#[test]
fn inputs_are_never_mutated() {
    let mut chroma = Array2::<f32>::zeros((12, 20));
    for t in 0..20 {
        chroma[(t % 12, t)] = 1.0;
    }
    let pristine = chroma.clone();

    let templates = chord_templates(0.3).unwrap();
    let pristine_templates = templates.clone();

    let smoothed = temporal_smoothing(&chroma, 6).unwrap();
    let compressed = log_compression(&smoothed, 2.0).unwrap();
    let sim = chord_similarities(&compressed, &templates).unwrap();
    let predicted = predict_chords(&sim).unwrap();
    let annotated = annotation_matrix("HoneyHoney", 20).unwrap();
    let _ = accuracy(&predicted, &annotated).unwrap();

    assert_eq!(chroma, pristine);
    assert_eq!(templates, pristine_templates);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let mut chroma = Array2::<f32>::zeros((12, 50));
    for t in 0..50 {
        for p in 0..12 {
            chroma[(p, t)] = ((p + t * 3) % 7) as f32 * 0.15;
        }
    }
    let config = RecognitionConfig {
        alpha: 0.8,
        smoothing: Some(10),
        gamma: Some(100.0),
    };

    let first = recognize(&chroma, &config).unwrap();
    let second = recognize(&chroma, &config).unwrap();
    assert_eq!(first, second);
}
