//! SWC compartment (structure identifier) codes.

use serde::{Deserialize, Serialize};

/// Anatomical role of a node. Codes 1 to 4 are the standard SWC types; every
/// other code (undefined `0`, custom `5+`) lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Compartment {
    Soma,
    Axon,
    BasalDendrite,
    ApicalDendrite,
    Other(i64),
}

impl Compartment {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Soma,
            2 => Self::Axon,
            3 => Self::BasalDendrite,
            4 => Self::ApicalDendrite,
            other => Self::Other(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Soma => 1,
            Self::Axon => 2,
            Self::BasalDendrite => 3,
            Self::ApicalDendrite => 4,
            Self::Other(code) => *code,
        }
    }

    /// Basal or apical dendrite.
    pub fn is_dendrite(&self) -> bool {
        matches!(self, Self::BasalDendrite | Self::ApicalDendrite)
    }
}

impl From<i64> for Compartment {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<Compartment> for i64 {
    fn from(compartment: Compartment) -> Self {
        compartment.code()
    }
}

impl std::fmt::Display for Compartment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Soma => f.write_str("soma"),
            Self::Axon => f.write_str("axon"),
            Self::BasalDendrite => f.write_str("basal dendrite"),
            Self::ApicalDendrite => f.write_str("apical dendrite"),
            Self::Other(code) => write!(f, "type {code}"),
        }
    }
}
