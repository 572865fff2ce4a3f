//! Error types for identifier parsing and decoding.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when parsing or decoding an [`IntHash`](crate::IntHash).
#[derive(Debug, Error)]
pub enum IntHashError {
    /// The parser was handed a value of a shape it does not understand.
    #[error("failed to parse type {type_name} into IntHash")]
    UnsupportedInputType { type_name: String },

    /// No `$` separator, or nothing in front of it.
    #[error("missing generation")]
    MissingGeneration,

    /// The separator is the last character.
    #[error("missing hash")]
    MissingHash,

    /// The text in front of the separator is not a base-10 i64.
    #[error("invalid generation: {0}")]
    InvalidGeneration(#[from] ParseIntError),

    /// JSON decoding was asked to write into an absent value.
    #[error("IntHash: JSON decode into absent value")]
    NilReceiver,

    /// The JSON token itself is malformed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl IntHashError {
    /// Returns true if one side of the `$` separator is empty.
    pub fn is_missing_segment(&self) -> bool {
        matches!(
            self,
            IntHashError::MissingGeneration | IntHashError::MissingHash
        )
    }

    /// Returns true if the error came from the JSON layer.
    pub fn is_json(&self) -> bool {
        matches!(self, IntHashError::Json(_))
    }

    pub(crate) fn unsupported(type_name: impl Into<String>) -> Self {
        IntHashError::UnsupportedInputType {
            type_name: type_name.into(),
        }
    }
}
