//! # swc-core
//!
//! Foundation crate for the SWC standardizer.
//! Defines node records, compartments, findings, reports, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::StandardizerConfig;
pub use errors::{InputError, SwcError, SwcResult};
pub use models::{Compartment, Finding, NodeRecord, NodeRef, QcTest, Report};
