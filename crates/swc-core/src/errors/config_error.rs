//! Configuration errors.

use super::error_code::{self, SwcErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {message}")]
    ParseError { message: String },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl SwcErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
