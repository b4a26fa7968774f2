//! Soma checks: a single root soma, and well-formed immediate children.

use swc_core::config::QcConfig;
use swc_core::models::{NodeRecord, NodeRef, QcTest, RuleOutcome};
use swc_graph::MorphologyGraph;

use super::RuleResult;

const NUMBER_OF_SOMAS: &str = "There should be exactly one node with type=1 and parent=-1. \
     The returned nodes do not meet this criterion.";
const NO_SOMA_FOUND: &str = "There should be exactly one node with type=1 and parent=-1. \
     No such node was found; the returned node (1, 0, 0, 0) is a placeholder \
     and may not refer to a node of this tree.";
const SOMA_CHILDREN_FURCATION: &str = "Children nodes of the soma should not branch. \
     The returned nodes are immediate children of the soma that branch.";

/// The single root soma, if there is exactly one.
fn unique_soma(graph: &MorphologyGraph) -> Option<&NodeRecord> {
    match graph.soma_roots().as_slice() {
        [soma] => Some(*soma),
        _ => None,
    }
}

fn no_unique_soma(graph: &MorphologyGraph) -> RuleOutcome {
    RuleOutcome::Inconclusive {
        reason: format!(
            "expected one root soma, found {}",
            graph.soma_roots().len()
        ),
    }
}

/// Exactly one node with compartment Soma and the root marker as parent.
pub fn number_of_somas(graph: &MorphologyGraph, _config: &QcConfig) -> RuleResult {
    let somas = graph.soma_roots();
    if somas.is_empty() {
        // No soma to point at; flag the tree as a whole.
        return RuleResult::new(
            QcTest::NumberOfSomas,
            NO_SOMA_FOUND,
            RuleOutcome::Fail(vec![NodeRef::SYNTHETIC]),
        );
    }
    let outcome = if somas.len() == 1 {
        RuleOutcome::Pass
    } else {
        RuleOutcome::Fail(somas.into_iter().map(NodeRef::from).collect())
    };
    RuleResult::new(QcTest::NumberOfSomas, NUMBER_OF_SOMAS, outcome)
}

/// Each immediate soma child has exactly one child of its own.
pub fn soma_children_furcation(graph: &MorphologyGraph, config: &QcConfig) -> RuleResult {
    let outcome = match unique_soma(graph) {
        None => no_unique_soma(graph),
        Some(_) if config.allow_soma_children_to_branch => RuleOutcome::Pass,
        Some(soma) => RuleOutcome::from_offenders(
            graph
                .children(soma.node_id)
                .iter()
                .filter(|&&child| graph.child_count(child) != 1)
                .filter_map(|&child| graph.node_ref(child))
                .collect(),
        ),
    };
    RuleResult::new(QcTest::SomaChildrenFurcation, SOMA_CHILDREN_FURCATION, outcome)
}

/// Each immediate soma child lies within the configured distance of the soma.
pub fn soma_children_distance(graph: &MorphologyGraph, config: &QcConfig) -> RuleResult {
    let threshold = config.soma_children_distance_threshold;
    let outcome = match unique_soma(graph) {
        None => no_unique_soma(graph),
        Some(soma) => RuleOutcome::from_offenders(
            graph
                .children(soma.node_id)
                .iter()
                .filter_map(|&child| graph.node(child))
                .filter(|child| soma.distance_to(child) > threshold)
                .map(NodeRef::from)
                .collect(),
        ),
    };
    RuleResult::new(
        QcTest::SomaChildrenDistance,
        format!(
            "Immediate children of the soma should be within {threshold} of the soma. \
             The returned nodes exceed that distance."
        ),
        outcome,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(records: &[(i64, i64, f64, i64)]) -> MorphologyGraph {
        MorphologyGraph::from_records(
            records
                .iter()
                .map(|&(id, compartment, x, parent)| {
                    NodeRecord::new(id, compartment, [x, 0.0, 0.0], 1.0, parent)
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn missing_soma_fails_with_synthetic_offender() {
        let g = graph(&[(1, 3, 0.0, -1), (2, 3, 1.0, 1)]);
        let result = number_of_somas(&g, &QcConfig::default());
        assert_eq!(result.outcome, RuleOutcome::Fail(vec![NodeRef::SYNTHETIC]));
        // Node 1 exists here and is not a soma, so the description must say
        // the offender is only a placeholder.
        assert_eq!(result.description, NO_SOMA_FOUND);
        assert!(result.description.contains("placeholder"));
    }

    #[test]
    fn two_somas_use_the_general_description() {
        let g = graph(&[(1, 1, 0.0, -1), (2, 1, 5.0, -1)]);
        let result = number_of_somas(&g, &QcConfig::default());
        assert_eq!(result.description, NUMBER_OF_SOMAS);
    }

    #[test]
    fn soma_with_non_root_parent_is_not_counted() {
        let g = graph(&[(1, 1, 0.0, -1), (2, 1, 1.0, 1), (3, 3, 2.0, 2)]);
        assert!(number_of_somas(&g, &QcConfig::default()).outcome.is_pass());
    }

    #[test]
    fn branching_allowed_by_config() {
        let g = graph(&[(1, 1, 0.0, -1), (2, 3, 1.0, 1), (3, 3, 2.0, 2), (4, 3, 2.0, 2)]);
        let strict = soma_children_furcation(&g, &QcConfig::default());
        assert_eq!(strict.offender_ids(), vec![2]);
        let relaxed = QcConfig {
            allow_soma_children_to_branch: true,
            ..QcConfig::default()
        };
        assert!(soma_children_furcation(&g, &relaxed).outcome.is_pass());
    }

    #[test]
    fn leaf_soma_child_counts_as_furcation_defect() {
        let g = graph(&[(1, 1, 0.0, -1), (2, 3, 1.0, 1)]);
        assert_eq!(
            soma_children_furcation(&g, &QcConfig::default()).offender_ids(),
            vec![2]
        );
    }

    #[test]
    fn child_exactly_at_threshold_passes() {
        let g = graph(&[(1, 1, 0.0, -1), (2, 3, 50.0, 1), (3, 3, 60.0, 2)]);
        assert!(soma_children_distance(&g, &QcConfig::default()).outcome.is_pass());
    }
}
