//! Depth-first pre-order numbering with cycle detection.
//!
//! Roots are taken in ascending id order. Within a tree, a node's children
//! are visited in the order their records appeared in the input. The
//! traversal uses an explicit stack so arbitrarily deep trees cannot
//! overflow the call stack.

use std::collections::HashSet;

use tracing::{debug, warn};

use swc_core::models::{Finding, NodeRef, QcTest, RuleOutcome};

use super::cycles;
use super::mapping::CanonicalMapping;
use crate::graph::MorphologyGraph;

pub const LOOPS_DESCRIPTION: &str = "Will check if loops exist in reconstruction";
pub const UNREACHABLE_DESCRIPTION: &str =
    "Every node should be reachable from a root node. The returned nodes are not.";

/// Result of one canonicalization pass.
#[derive(Debug, Clone)]
pub struct CanonicalOutcome {
    /// `Fail` with exactly one offender when any cycle exists.
    pub loops: RuleOutcome,
    /// Complete old → new mapping, or empty when a cycle was found.
    pub mapping: CanonicalMapping,
    /// Nodes no root reaches, in input order.
    pub unreachable: Vec<i64>,
}

impl CanonicalOutcome {
    pub fn has_cycle(&self) -> bool {
        !self.loops.is_pass()
    }

    pub fn loops_finding(&self) -> Finding {
        Finding::new(QcTest::CheckForLoops, LOOPS_DESCRIPTION, &self.loops)
    }

    pub fn unreachable_finding(&self, graph: &MorphologyGraph) -> Finding {
        let offenders = self
            .unreachable
            .iter()
            .filter_map(|&id| graph.node_ref(id))
            .collect();
        Finding::new(
            QcTest::UnreachableNodes,
            UNREACHABLE_DESCRIPTION,
            &RuleOutcome::from_offenders(offenders),
        )
    }
}

/// Check the tree for cycles and, if there are none, number every node
/// reachable from a root in depth-first pre-order.
pub fn canonicalize(graph: &MorphologyGraph) -> CanonicalOutcome {
    let roots = graph.roots();
    let mut dequeued: HashSet<i64> = HashSet::with_capacity(graph.len());
    let mut order: Vec<i64> = Vec::with_capacity(graph.len());

    for root in roots {
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            if !dequeued.insert(current) {
                warn!(node_id = current, "node reached twice during traversal");
                return cycle_outcome(graph, current, &dequeued);
            }
            order.push(current);
            // Reverse push so the first-listed child is popped first.
            stack.extend(graph.children(current).iter().rev().copied());
        }
    }

    let unreachable = unvisited(graph, &dequeued);
    if !unreachable.is_empty() {
        if let Some(cycle) = cycles::find_cycles(graph).into_iter().next() {
            warn!(
                cycle_len = cycle.len(),
                first_node = cycle[0],
                "cycle in parent relation"
            );
            return cycle_outcome(graph, cycle[0], &dequeued);
        }
        warn!(count = unreachable.len(), "nodes unreachable from any root");
    }

    debug!(nodes = order.len(), "canonical numbering complete");
    CanonicalOutcome {
        loops: RuleOutcome::Pass,
        mapping: CanonicalMapping::from_visitation_order(order),
        unreachable,
    }
}

fn cycle_outcome(graph: &MorphologyGraph, node_id: i64, dequeued: &HashSet<i64>) -> CanonicalOutcome {
    let offender = graph.node_ref(node_id).unwrap_or(NodeRef::SYNTHETIC);
    CanonicalOutcome {
        loops: RuleOutcome::Fail(vec![offender]),
        mapping: CanonicalMapping::default(),
        unreachable: unvisited(graph, dequeued),
    }
}

fn unvisited(graph: &MorphologyGraph, dequeued: &HashSet<i64>) -> Vec<i64> {
    graph
        .ids()
        .iter()
        .copied()
        .filter(|id| !dequeued.contains(id))
        .collect()
}
