//! Axon origin check: one entry point, on the soma or a basal dendrite.

use swc_core::config::QcConfig;
use swc_core::models::{Compartment, NodeRef, QcTest, RuleOutcome};
use swc_graph::MorphologyGraph;

use super::RuleResult;

const DESCRIPTION: &str = "Axon should originate from a single location and should stem from \
     the soma or a basal dendrite. Invalid axon origins are returned.";

/// Axon nodes whose parent is not an axon node, in input order.
pub fn entry_points(graph: &MorphologyGraph) -> Vec<NodeRef> {
    graph
        .nodes()
        .filter(|n| n.compartment == Compartment::Axon)
        .filter(|n| graph.parent_compartment(n.node_id) != Some(Compartment::Axon))
        .map(NodeRef::from)
        .collect()
}

pub fn check(graph: &MorphologyGraph, _config: &QcConfig) -> RuleResult {
    let entries = entry_points(graph);
    let single_valid_origin = match entries.as_slice() {
        [entry] => matches!(
            graph.parent_compartment(entry.node_id),
            Some(Compartment::Soma | Compartment::BasalDendrite)
        ),
        _ => false,
    };
    // Zero entries (no axon traced) collapses to a pass.
    let outcome = if single_valid_origin {
        RuleOutcome::Pass
    } else {
        RuleOutcome::from_offenders(entries)
    };
    RuleResult::new(QcTest::AxonOrigins, DESCRIPTION, outcome)
}
