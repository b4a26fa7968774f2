//! Dendrite origin check: every basal/apical branch starts on the soma.

use swc_core::config::QcConfig;
use swc_core::models::{Compartment, NodeRef, QcTest, RuleOutcome};
use swc_graph::MorphologyGraph;

use super::RuleResult;

const DESCRIPTION: &str = "Each apical/basal dendritic node should have a parent node with \
     type 1 (soma) or its respective dendrite type.";

/// Dendrite compartments in the order their violations are listed.
const DENDRITE_GROUPS: [Compartment; 2] = [Compartment::BasalDendrite, Compartment::ApicalDendrite];

pub fn check(graph: &MorphologyGraph, _config: &QcConfig) -> RuleResult {
    let offenders: Vec<NodeRef> = DENDRITE_GROUPS
        .iter()
        .flat_map(|&group| {
            graph.nodes().filter(move |n| {
                if n.compartment != group {
                    return false;
                }
                let parent = graph.parent_compartment(n.node_id);
                parent != Some(group) && parent != Some(Compartment::Soma)
            })
        })
        .map(NodeRef::from)
        .collect();
    RuleResult::new(
        QcTest::DendriteOrigins,
        DESCRIPTION,
        RuleOutcome::from_offenders(offenders),
    )
}
