//! Property tests for canonical numbering and cycle detection.

use std::collections::HashSet;

use proptest::prelude::*;

use swc_core::models::NodeRecord;
use swc_graph::{canonicalize, MorphologyGraph};

/// Build a random forest: node `i` (1-based rank) hangs off an earlier rank,
/// or is a root. Ids are scrambled through `id_of` and the records are
/// presented in a shuffled order.
fn build_forest(parents: &[Option<usize>], id_offset: i64, order: &[usize]) -> Vec<NodeRecord> {
    let id_of = |rank: usize| (rank as i64) * 7 + id_offset;
    let mut records: Vec<NodeRecord> = (0..parents.len())
        .map(|rank| {
            let parent = match parents[rank] {
                Some(p) if rank > 0 => id_of(p % rank),
                _ => -1,
            };
            NodeRecord::new(id_of(rank), 3, [rank as f64, 0.0, 0.0], 1.0, parent)
        })
        .collect();
    let mut shuffled = Vec::with_capacity(records.len());
    let mut used = HashSet::new();
    for &i in order {
        let i = i % records.len();
        if used.insert(i) {
            shuffled.push(records[i].clone());
        }
    }
    for (i, r) in records.drain(..).enumerate() {
        if !used.contains(&i) {
            shuffled.push(r);
        }
    }
    shuffled
}

fn forest_strategy() -> impl Strategy<Value = (Vec<Option<usize>>, i64, Vec<usize>)> {
    (1_usize..60).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::option::weighted(0.9, 0_usize..1000), n),
            1_i64..1000,
            prop::collection::vec(0_usize..n, 0..n * 2),
        )
    })
}

proptest! {
    #[test]
    fn acyclic_forest_gets_a_bijection_onto_one_to_n(
        (parents, offset, order) in forest_strategy()
    ) {
        let records = build_forest(&parents, offset, &order);
        let graph = MorphologyGraph::from_records(records.clone()).unwrap();
        let outcome = canonicalize(&graph);

        prop_assert!(outcome.loops.is_pass());
        prop_assert!(outcome.unreachable.is_empty());
        let mut new_ids: Vec<i64> = records
            .iter()
            .map(|r| outcome.mapping.get(r.node_id).unwrap())
            .collect();
        new_ids.sort_unstable();
        let expected: Vec<i64> = (1..=records.len() as i64).collect();
        prop_assert_eq!(new_ids, expected);
    }

    #[test]
    fn canonicalization_is_deterministic(
        (parents, offset, order) in forest_strategy()
    ) {
        let graph = MorphologyGraph::from_records(build_forest(&parents, offset, &order)).unwrap();
        prop_assert_eq!(canonicalize(&graph).mapping, canonicalize(&graph).mapping);
    }

    #[test]
    fn relabeled_parents_match_relabeled_originals(
        (parents, offset, order) in forest_strategy()
    ) {
        let records = build_forest(&parents, offset, &order);
        let graph = MorphologyGraph::from_records(records.clone()).unwrap();
        let mapping = canonicalize(&graph).mapping;
        let relabeled = mapping.apply(&records);

        for original in &records {
            let new_id = mapping.get(original.node_id).unwrap();
            let out = relabeled.iter().find(|r| r.node_id == new_id).unwrap();
            if original.is_root() {
                prop_assert_eq!(out.parent, -1);
            } else {
                let new_parent = mapping.get(original.parent).unwrap();
                prop_assert_eq!(out.parent, new_parent);
                // Pre-order: a parent is always numbered before its children.
                prop_assert!(new_parent < new_id);
            }
        }
    }

    #[test]
    fn any_rootless_cycle_is_reported_once(
        (parents, offset, order) in forest_strategy(),
        cycle_len in 1_usize..6,
    ) {
        let mut records = build_forest(&parents, offset, &order);
        // Cycle ids sit far above the forest's id range.
        let base = 1_000_000_i64;
        for i in 0..cycle_len as i64 {
            let parent = base + (i + 1) % cycle_len as i64;
            records.push(NodeRecord::new(base + i, 3, [0.0, 0.0, 0.0], 1.0, parent));
        }
        let graph = MorphologyGraph::from_records(records).unwrap();
        let outcome = canonicalize(&graph);

        prop_assert!(outcome.has_cycle());
        prop_assert_eq!(outcome.loops.offenders().len(), 1);
        prop_assert!(outcome.mapping.is_empty());
        prop_assert_eq!(outcome.unreachable.len(), cycle_len);
    }
}
