//! Error types for remold-core

use thiserror::Error;

use remold_path::PathError;

use crate::instruction::Instruction;

/// Boxed error returned by user-supplied callbacks
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for remold-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying a mapping
#[derive(Error, Debug)]
pub enum Error {
    /// The source value is neither an object nor an array
    #[error("source must be an object or an array, got {found}")]
    InvalidSource {
        /// JSON type of the rejected value
        found: &'static str,
    },

    /// A path in an instruction's `from` could not be normalized
    #[error("in from of [{instruction}]: {source}")]
    FromPath {
        /// The instruction being applied
        instruction: Box<Instruction>,
        /// The underlying path failure
        source: PathError,
    },

    /// A path in an instruction's `to` could not be normalized
    #[error("in to of [{instruction}]: {source}")]
    ToPath {
        /// The instruction being applied
        instruction: Box<Instruction>,
        /// The underlying path failure
        source: PathError,
    },

    /// A merge target was handed a value that is not an object
    #[error("cannot merge {found} into the result; [{instruction}] must produce an object")]
    MergeNonObject {
        /// The instruction being applied
        instruction: Box<Instruction>,
        /// JSON type of the rejected value
        found: &'static str,
    },

    /// A user-supplied callback failed; the message is the callback's own
    #[error("{0}")]
    Callback(CallbackError),

    /// Failed to parse a mapping document
    #[error("failed to parse mapping document: {0}")]
    DocumentParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
