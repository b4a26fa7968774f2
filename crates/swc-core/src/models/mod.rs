mod compartment;
mod finding;
mod node_record;
mod report;

pub use compartment::Compartment;
pub use finding::{Finding, NodeRef, RuleOutcome};
pub use node_record::{NodeRecord, RawNodeRecord};
pub use qc_test::QcTest;
pub use report::Report;
