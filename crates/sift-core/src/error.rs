/// All errors that can occur within sift.
///
/// Contract violations (a zero batch size, an out-of-range dataset index)
/// panic instead; this enum only covers inputs a caller can reasonably
/// recover from by retrying with a corrected value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A validation ratio outside the open interval `(0, 1)`, or NaN.
    #[error("invalid validation ratio: {ratio} (must lie strictly between 0.0 and 1.0)")]
    InvalidRatio { ratio: f64 },
}

impl Error {
    /// The offending ratio carried by an [`Error::InvalidRatio`].
    pub fn ratio(&self) -> f64 {
        match self {
            Error::InvalidRatio { ratio } => *ratio,
        }
    }
}

/// Convenience Result type used throughout sift.
pub type Result<T> = std::result::Result<T, Error>;
