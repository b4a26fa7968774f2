use serde::{Deserialize, Serialize};

use super::{Finding, QcTest};
use crate::constants::ENGINE_VERSION;

/// The accumulated non-empty findings for one tree plus source metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub tests: Vec<Finding>,
    pub input_source: String,
    pub engine_version: String,
    pub auxiliary_image_path: Option<String>,
    /// Tests that could not be evaluated because a precondition failed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inconclusive: Vec<QcTest>,
}

impl Report {
    pub fn new(input_source: impl Into<String>) -> Self {
        Self {
            tests: Vec::new(),
            input_source: input_source.into(),
            engine_version: ENGINE_VERSION.to_string(),
            auxiliary_image_path: None,
            inconclusive: Vec::new(),
        }
    }

    /// Append a finding, dropping it when it names no offenders.
    pub fn push(&mut self, finding: Finding) -> bool {
        if finding.has_offenders() {
            self.tests.push(finding);
            true
        } else {
            false
        }
    }

    pub fn finding(&self, test: QcTest) -> Option<&Finding> {
        self.tests.iter().find(|f| f.test == test)
    }

    pub fn is_clean(&self) -> bool {
        self.tests.is_empty()
    }
}
