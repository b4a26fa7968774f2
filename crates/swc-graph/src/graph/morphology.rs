//! petgraph::StableGraph wrapper holding the node records of one tree.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

use swc_core::constants::ROOT_MARKER;
use swc_core::errors::{InputError, RecordLocation};
use swc_core::models::{Compartment, NodeRecord, NodeRef, RawNodeRecord};

/// The underlying directed graph type. Edges run parent → child.
pub type MorphologyStableGraph = StableGraph<NodeRecord, (), Directed>;

/// One reconstruction with its parent/child relations resolved.
///
/// Built once per validation run. Construction only rejects malformed input;
/// structural defects (extra somas, orphans, cycles) are left for the QC
/// rules and the canonicalizer to report.
#[derive(Debug, Clone)]
pub struct MorphologyGraph {
    /// The petgraph stable graph.
    pub graph: MorphologyStableGraph,
    /// Map from node_id → NodeIndex for O(1) lookup.
    node_index: HashMap<i64, NodeIndex>,
    /// Node ids in input order.
    order: Vec<i64>,
    /// Children per node, in the order the child records appeared in the input.
    children: HashMap<i64, Vec<i64>>,
    /// Compartment of each node's parent; `None` for roots and orphans.
    parent_compartment: HashMap<i64, Option<Compartment>>,
}

impl MorphologyGraph {
    /// Build the graph from an ordered record collection.
    pub fn from_records(records: Vec<NodeRecord>) -> Result<Self, InputError> {
        if records.is_empty() {
            return Err(InputError::Empty);
        }

        let mut graph = MorphologyStableGraph::with_capacity(records.len(), records.len());
        let mut node_index = HashMap::with_capacity(records.len());
        let mut first_seen: HashMap<i64, usize> = HashMap::with_capacity(records.len());
        let mut order = Vec::with_capacity(records.len());

        for (position, record) in records.into_iter().enumerate() {
            let location = RecordLocation::Index(position);
            record.check(location)?;
            if let Some(&first) = first_seen.get(&record.node_id) {
                return Err(InputError::DuplicateNodeId {
                    node_id: record.node_id,
                    location,
                    first: RecordLocation::Index(first),
                });
            }
            first_seen.insert(record.node_id, position);
            order.push(record.node_id);
            let id = record.node_id;
            node_index.insert(id, graph.add_node(record));
        }

        let mut children: HashMap<i64, Vec<i64>> = HashMap::with_capacity(order.len());
        let mut parent_compartment = HashMap::with_capacity(order.len());
        for &id in &order {
            let child_idx = node_index[&id];
            let parent = graph[child_idx].parent;
            let resolved = if parent == ROOT_MARKER {
                None
            } else {
                node_index.get(&parent).copied()
            };

            // Children are recorded even when the parent is missing so the
            // dangling subtree can still be traversed from its orphan head.
            if parent != ROOT_MARKER {
                children.entry(parent).or_default().push(id);
            }
            match resolved {
                Some(parent_idx) => {
                    graph.add_edge(parent_idx, child_idx, ());
                    parent_compartment.insert(id, Some(graph[parent_idx].compartment));
                }
                None => {
                    parent_compartment.insert(id, None);
                }
            }
        }

        Ok(Self {
            graph,
            node_index,
            order,
            children,
            parent_compartment,
        })
    }

    /// Build the graph from loosely-typed rows, rejecting any with missing fields.
    pub fn from_raw(rows: Vec<RawNodeRecord>) -> Result<Self, InputError> {
        if rows.is_empty() {
            return Err(InputError::Empty);
        }
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(position, row)| row.into_record(RecordLocation::Index(position)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false for a constructed graph; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, node_id: i64) -> bool {
        self.node_index.contains_key(&node_id)
    }

    /// Look up a node index by node id.
    pub fn index_of(&self, node_id: i64) -> Option<NodeIndex> {
        self.node_index.get(&node_id).copied()
    }

    pub fn node(&self, node_id: i64) -> Option<&NodeRecord> {
        self.index_of(node_id).map(|idx| &self.graph[idx])
    }

    pub fn node_ref(&self, node_id: i64) -> Option<NodeRef> {
        self.node(node_id).map(NodeRef::from)
    }

    /// Node ids in input order.
    pub fn ids(&self) -> &[i64] {
        &self.order
    }

    /// Node records in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeRecord> + '_ {
        self.order.iter().map(move |id| &self.graph[self.node_index[id]])
    }

    /// Copy of the records in input order.
    pub fn records(&self) -> Vec<NodeRecord> {
        self.nodes().cloned().collect()
    }

    /// Mapping from node id to declared parent id.
    pub fn parent_map(&self) -> HashMap<i64, i64> {
        self.nodes().map(|n| (n.node_id, n.parent)).collect()
    }

    pub fn parent_of(&self, node_id: i64) -> Option<i64> {
        self.node(node_id).map(|n| n.parent)
    }

    /// Children of `node_id` in input order. Empty for leaves and unknown ids.
    pub fn children(&self, node_id: i64) -> &[i64] {
        self.children.get(&node_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn child_count(&self, node_id: i64) -> usize {
        self.children(node_id).len()
    }

    /// Compartment of the node's parent. `None` when the node is a root or
    /// its parent id does not resolve within the tree.
    pub fn parent_compartment(&self, node_id: i64) -> Option<Compartment> {
        self.parent_compartment.get(&node_id).copied().flatten()
    }

    /// A non-root node whose parent id does not resolve.
    pub fn is_orphan(&self, node_id: i64) -> bool {
        self.node(node_id)
            .is_some_and(|n| !n.is_root() && !self.contains(n.parent))
    }

    /// Ids of nodes whose parent is the root marker, ascending.
    pub fn roots(&self) -> Vec<i64> {
        let mut roots: Vec<i64> = self.nodes().filter(|n| n.is_root()).map(|n| n.node_id).collect();
        roots.sort_unstable();
        roots
    }

    /// Soma nodes at the root, in input order. A valid tree has exactly one.
    pub fn soma_roots(&self) -> Vec<&NodeRecord> {
        self.nodes()
            .filter(|n| n.is_root() && n.compartment == Compartment::Soma)
            .collect()
    }

    /// Orphaned nodes in input order.
    pub fn orphans(&self) -> Vec<&NodeRecord> {
        self.nodes()
            .filter(|n| !n.is_root() && !self.contains(n.parent))
            .collect()
    }
}
