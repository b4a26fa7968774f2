//! SwcErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured error code string
/// that batch drivers and report consumers can match on.
pub trait SwcErrorCode {
    /// Returns the error code string (e.g., "INPUT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const DUPLICATE_NODE: &str = "DUPLICATE_NODE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const COLLABORATOR_ERROR: &str = "COLLABORATOR_ERROR";
