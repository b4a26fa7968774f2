//! Standardizer configuration, loaded from TOML with every section optional.

pub mod defaults;
mod filename_config;
mod io_config;
mod observability_config;
mod qc_config;

pub use filename_config::{FilenameConfig, FilenameFormat};
pub use io_config::IoConfig;
pub use observability_config::ObservabilityConfig;
pub use qc_config::QcConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, SwcResult};

/// Top-level configuration. Missing sections and fields fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardizerConfig {
    pub qc: QcConfig,
    pub io: IoConfig,
    pub filename: FilenameConfig,
    pub observability: ObservabilityConfig,
}

impl StandardizerConfig {
    /// Parse a TOML document and validate the resulting values.
    pub fn from_toml(source: &str) -> SwcResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SwcResult<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|e| crate::errors::SwcError::io(path, e))?;
        Self::from_toml(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.qc.validate()?;
        self.io.validate()
    }
}
