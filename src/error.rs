use thiserror::Error;

/// Error type shared by every operation in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Two elements could not be ordered relative to each other.
    ///
    /// `left` and `right` are indices into the caller's input.
    #[error("elements at {left} and {right} are not mutually ordered")]
    Comparison { left: usize, right: usize },

    /// An operation that needs at least one element was given none.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A run count in encoded text does not fit in `usize`.
    #[error("run count starting at byte {offset} overflows")]
    CountOverflow { offset: usize },

    /// An arithmetic result exceeds the width of its return type.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    #[error("unknown checksum algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A strftime pattern contained an invalid specifier.
    #[error("invalid date format: {0:?}")]
    DateFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
