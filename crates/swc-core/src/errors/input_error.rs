//! Input errors: fatal problems with the record collection itself.

use super::error_code::{self, SwcErrorCode};

/// Where a record came from: a 1-based line in a text source, or a 0-based
/// index in an in-memory collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLocation {
    Line(usize),
    Index(usize),
}

impl std::fmt::Display for RecordLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(line) => write!(f, "line {line}"),
            Self::Index(index) => write!(f, "record {index}"),
        }
    }
}

/// Errors that abort a validation run before any rule is evaluated.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input contains no node records")]
    Empty,

    #[error("{location}: missing required field `{field}`")]
    MissingField {
        location: RecordLocation,
        field: &'static str,
    },

    #[error("{location}: field `{field}` has invalid value `{value}`")]
    InvalidField {
        location: RecordLocation,
        field: &'static str,
        value: String,
    },

    #[error("{location}: duplicate node_id {node_id} (first seen at {first})")]
    DuplicateNodeId {
        node_id: i64,
        location: RecordLocation,
        first: RecordLocation,
    },
}

impl SwcErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateNodeId { .. } => error_code::DUPLICATE_NODE,
            _ => error_code::INPUT_ERROR,
        }
    }
}
