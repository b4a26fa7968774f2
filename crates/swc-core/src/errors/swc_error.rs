use super::error_code::{self, SwcErrorCode};
use super::{ConfigError, InputError};

/// Umbrella error for the standardizer workspace.
#[derive(Debug, thiserror::Error)]
pub enum SwcError {
    #[error("input error: {0}")]
    InputError(#[from] InputError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{collaborator} failed: {reason}")]
    CollaboratorFailed { collaborator: String, reason: String },
}

impl SwcError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

impl SwcErrorCode for SwcError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InputError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
            Self::Io { .. } => error_code::IO_ERROR,
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
            Self::CollaboratorFailed { .. } => error_code::COLLABORATOR_ERROR,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type SwcResult<T> = Result<T, SwcError>;
