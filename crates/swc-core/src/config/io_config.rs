use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// SWC text format settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    /// Column separator. Any whitespace separator splits on runs of whitespace.
    pub separator: String,
}

impl IoConfig {
    /// Whether columns are split on runs of whitespace rather than a literal.
    pub fn splits_on_whitespace(&self) -> bool {
        self.separator.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "io.separator".to_string(),
                message: "separator must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            separator: defaults::DEFAULT_SEPARATOR.to_string(),
        }
    }
}
