//! Cycle detection and deterministic depth-first renumbering.

pub mod cycles;
pub mod dfs;
pub mod mapping;

pub use dfs::{canonicalize, CanonicalOutcome};
pub use mapping::{apply_mapping, CanonicalMapping};
