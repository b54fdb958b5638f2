/// Crate-level error type for the chordal chord recognition library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter `{name}`: got {value}, {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Input array has incorrect shape for the operation.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// A required dimension or window size is invalid.
    #[error("invalid size for `{name}`: {value} ({reason})")]
    InvalidSize {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    /// Input matrix contains non-finite values (NaN or Inf).
    #[error("input contains non-finite values")]
    NonFiniteData,

    /// No annotation track is registered under the given title.
    #[error("unknown annotation track `{0}`")]
    UnknownTrack(String),

    /// Every frame of the annotated matrix carries the no-chord sentinel,
    /// so there is nothing to score against.
    #[error("no annotated frames to score")]
    NoAnnotatedFrames,
}

/// Convenience Result type for chordal operations.
pub type Result<T> = std::result::Result<T, Error>;
