//! Error types for remold-path

use thiserror::Error;

/// Result type alias for path operations
pub type Result<T> = std::result::Result<T, PathError>;

/// Errors raised while normalizing a path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A dotted path contained an empty piece (leading, trailing, or doubled dot)
    #[error("empty segment in path '{path}'")]
    EmptySegment {
        /// The offending path as written
        path: String,
    },

    /// An explicit segment list contained an empty key
    #[error("empty key at segment {index}")]
    EmptyKey {
        /// Zero-based position of the offending segment
        index: usize,
    },

    /// An explicit segment list contained no segments
    #[error("path has no segments")]
    Empty,

    /// The root path addresses the container itself, not a location in it
    #[error("the root path does not address a location")]
    Root,
}
