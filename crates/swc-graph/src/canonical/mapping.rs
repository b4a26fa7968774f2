use std::collections::HashMap;

use swc_core::constants::ROOT_MARKER;
use swc_core::models::NodeRecord;

/// Old → new identifier relabeling produced by the depth-first pass.
/// New identifiers are dense and 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalMapping {
    old_to_new: HashMap<i64, i64>,
    /// Old ids in visitation order; position + 1 is the new id.
    order: Vec<i64>,
}

impl CanonicalMapping {
    /// Number the given old ids 1..=N in the order supplied.
    pub fn from_visitation_order(order: Vec<i64>) -> Self {
        let old_to_new = order
            .iter()
            .enumerate()
            .map(|(rank, &old)| (old, rank as i64 + 1))
            .collect();
        Self { old_to_new, order }
    }

    pub fn get(&self, old_id: i64) -> Option<i64> {
        self.old_to_new.get(&old_id).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Old ids in the order they were visited.
    pub fn visitation_order(&self) -> &[i64] {
        &self.order
    }

    /// `(old, new)` pairs in new-id order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(rank, &old)| (old, rank as i64 + 1))
    }

    pub fn as_map(&self) -> &HashMap<i64, i64> {
        &self.old_to_new
    }

    /// Relabel `records` (given in input order) with this mapping.
    ///
    /// - An empty mapping leaves the records untouched and in input order.
    /// - Records missing from a non-empty mapping are numbered after the
    ///   mapped ones (`N+1..`) in input order.
    /// - A parent that is the root marker, or that has no new id, becomes
    ///   the root marker.
    ///
    /// The result is sorted by new id.
    pub fn apply(&self, records: &[NodeRecord]) -> Vec<NodeRecord> {
        if self.is_empty() {
            return records.to_vec();
        }

        let mut extended = self.old_to_new.clone();
        let mut next = self.len() as i64 + 1;
        for record in records {
            if !extended.contains_key(&record.node_id) {
                extended.insert(record.node_id, next);
                next += 1;
            }
        }

        let mut relabeled: Vec<NodeRecord> = records
            .iter()
            .map(|record| {
                let parent = if record.parent == ROOT_MARKER {
                    ROOT_MARKER
                } else {
                    extended.get(&record.parent).copied().unwrap_or(ROOT_MARKER)
                };
                NodeRecord {
                    node_id: extended[&record.node_id],
                    parent,
                    ..record.clone()
                }
            })
            .collect();
        relabeled.sort_by_key(|r| r.node_id);
        relabeled
    }
}

/// Free-function form of [`CanonicalMapping::apply`].
pub fn apply_mapping(records: &[NodeRecord], mapping: &CanonicalMapping) -> Vec<NodeRecord> {
    mapping.apply(records)
}
