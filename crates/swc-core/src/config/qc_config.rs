use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Parameters consumed by the QC rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QcConfig {
    /// Maximum distance between the soma and any of its immediate children,
    /// in coordinate units.
    pub soma_children_distance_threshold: f64,
    /// When set, immediate soma children may branch.
    pub allow_soma_children_to_branch: bool,
}

impl QcConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.soma_children_distance_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "qc.soma_children_distance_threshold".to_string(),
                message: format!("must be a finite non-negative number, got {threshold}"),
            });
        }
        Ok(())
    }
}

impl Default for QcConfig {
    fn default() -> Self {
        Self {
            soma_children_distance_threshold: defaults::DEFAULT_SOMA_CHILDREN_DISTANCE_THRESHOLD,
            allow_soma_children_to_branch: defaults::DEFAULT_ALLOW_SOMA_CHILDREN_TO_BRANCH,
        }
    }
}
