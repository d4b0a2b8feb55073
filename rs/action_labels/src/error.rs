//! Error types for label registries and label files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`crate::registry::LabelRegistry`] construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// Class index outside `[0, len)`.
    #[error("class index {index} is out of range for {len} labels")]
    OutOfRange { index: i64, len: usize },

    /// Reverse lookup of a name the registry does not hold.
    #[error("unknown label {0:?}")]
    UnknownLabel(String),

    /// The same label appears at two positions.
    #[error("duplicate label {label:?} at indices {first} and {second}")]
    DuplicateLabel {
        label: String,
        first: usize,
        second: usize,
    },

    #[error("label set is empty")]
    Empty,

    #[error("label at index {index} is invalid: {reason}")]
    InvalidLabel { index: usize, reason: &'static str },
}

/// Errors raised while reading a label file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read label file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON label list")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Label(#[from] LabelError),
}
