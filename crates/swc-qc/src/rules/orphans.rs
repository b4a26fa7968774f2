use swc_core::config::QcConfig;
use swc_core::models::{NodeRef, QcTest, RuleOutcome};
use swc_graph::MorphologyGraph;

use super::RuleResult;

const DESCRIPTION: &str = "Detect nodes with missing or incorrect parent assignments. \
     The returned nodes are orphaned nodes.";

/// Non-root nodes whose parent id does not resolve.
pub fn check(graph: &MorphologyGraph, _config: &QcConfig) -> RuleResult {
    let offenders = graph.orphans().into_iter().map(NodeRef::from).collect();
    RuleResult::new(
        QcTest::OrphanNodeCheck,
        DESCRIPTION,
        RuleOutcome::from_offenders(offenders),
    )
}
