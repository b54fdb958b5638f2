//! Template-based chord recognition for Rust.
//!
//! Chordal estimates which of the 24 major and minor triads is sounding in
//! each frame of a chromagram, and scores the estimate against hand-authored
//! ground-truth annotations for three reference recordings.
//!
//! The crate operates entirely on in-memory [`ndarray::Array2<f32>`]
//! matrices: producing the chromagram from raw audio is the job of an
//! external feature extractor, and rendering heatmaps from the outputs is
//! the job of an external visualizer.
//!
//! # Pipeline
//!
//! ```text
//! chromagram ─► temporal_smoothing ─► log_compression ─► chord_similarities ─► predict_chords
//!                                                          ▲
//!                                          chord_templates ┘
//! annotation track ─► annotation_matrix ──────────────────────► accuracy ◄── prediction
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chordal::pipeline::{recognize, RecognitionConfig};
//! use chordal::annotations::annotation_matrix;
//! use chordal::score::accuracy;
//! use ndarray::Array2;
//!
//! // A 12 x N chromagram from your feature extractor
//! let chroma = Array2::<f32>::from_elem((12, 100), 0.1);
//!
//! let config = RecognitionConfig::default();
//! let predicted = recognize(&chroma, &config).unwrap();
//! assert_eq!(predicted.shape(), &[24, 100]);
//!
//! let annotated = annotation_matrix("HelterSkelter", 100).unwrap();
//! let acc = accuracy(&predicted, &annotated).unwrap();
//! assert!((0.0..=1.0).contains(&acc));
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`template`] | Harmonic chord template construction (24 x 12) |
//! | [`preprocess`] | Temporal smoothing and logarithmic compression |
//! | [`similarity`] | Chromagram-to-template similarity scoring |
//! | [`decode`] | Frame-wise arg-max chord decision |
//! | [`annotations`] | Ground-truth tracks and dense resolution |
//! | [`score`] | Accuracy against annotated matrices |
//! | [`labels`] | Pitch-class and chord label tables |
//! | [`timing`] | Frame/time axis helpers |
//! | [`pipeline`] | Configured end-to-end recognition |
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. Validation is fail-fast: shapes and
//! parameter domains are checked at entry before any computation.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod annotations;
pub mod decode;
pub mod labels;
pub mod pipeline;
pub mod preprocess;
pub mod score;
pub mod similarity;
pub mod template;
pub mod timing;

mod validate;
