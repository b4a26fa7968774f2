//! Independent QC rules.
//!
//! Each rule is a pure function of the graph and the QC config. Rules never
//! read each other's outcomes, so the evaluation order only fixes the order
//! of findings in the report.

pub mod axon_origins;
pub mod dendrite_origins;
pub mod orphans;
pub mod soma;

use swc_core::config::QcConfig;
use swc_core::models::{Finding, QcTest, RuleOutcome};
use swc_graph::MorphologyGraph;

/// Signature shared by every rule.
pub type RuleFn = fn(&MorphologyGraph, &QcConfig) -> RuleResult;

/// All structural rules in report order.
pub const RULES: [RuleFn; 6] = [
    soma::number_of_somas,
    soma::soma_children_furcation,
    soma::soma_children_distance,
    axon_origins::check,
    dendrite_origins::check,
    orphans::check,
];

/// One rule's outcome with the text that explains it.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleResult {
    pub test: QcTest,
    pub description: String,
    pub outcome: RuleOutcome,
}

impl RuleResult {
    pub fn new(test: QcTest, description: impl Into<String>, outcome: RuleOutcome) -> Self {
        Self {
            test,
            description: description.into(),
            outcome,
        }
    }

    pub fn is_inconclusive(&self) -> bool {
        matches!(self.outcome, RuleOutcome::Inconclusive { .. })
    }

    pub fn offender_ids(&self) -> Vec<i64> {
        self.outcome.offenders().iter().map(|n| n.node_id).collect()
    }

    pub fn to_finding(&self) -> Finding {
        Finding::new(self.test, self.description.clone(), &self.outcome)
    }
}

/// Run every structural rule against `graph`.
pub fn run_all(graph: &MorphologyGraph, config: &QcConfig) -> Vec<RuleResult> {
    RULES.iter().map(|rule| rule(graph, config)).collect()
}
