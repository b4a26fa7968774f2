//! # swc-qc
//!
//! Structural and biological-plausibility checks for one SWC tree.
//!
//! ## Rules
//! 1. **NumberOfSomas**: exactly one soma at the root
//! 2. **SomaChildrenFurcation**: immediate soma children do not branch
//! 3. **SomaChildrenDistance**: immediate soma children sit near the soma
//! 4. **AxonOrigins**: one axon origin, on the soma or a basal dendrite
//! 5. **DendriteOrigins**: dendrites start on the soma
//! 6. **OrphanNodeCheck**: every parent id resolves
//!
//! Loop detection and unreachable-node reporting come from the
//! canonicalizer in `swc-graph`; the engine folds them into the same report.

pub mod aggregator;
pub mod engine;
pub mod filename;
pub mod rules;

pub use aggregator::{ReportAggregator, ValidationOutcome};
pub use engine::QcEngine;
pub use filename::FilenameFormatChecker;
pub use rules::RuleResult;
