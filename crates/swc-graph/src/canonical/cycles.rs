//! Cycle detection over the parent relation.
//!
//! With unique node ids every node has at most one parent, so a cycle can
//! never hang off a root: it is always a closed loop of nodes that no root
//! reaches. The depth-first pass therefore cannot see it, and this module
//! inspects the whole graph instead.
//!
//! Each walk follows parent pointers upward with an explicit path, so depth
//! is bounded by the heap rather than the call stack.

use std::collections::HashMap;

use crate::graph::MorphologyGraph;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the parent chain currently being walked.
    OnPath,
    /// Fully walked; either reaches a root/orphan head or already reported.
    Done,
}

/// Every cycle in the parent relation, each as its node ids in ascending
/// order. Cycles are ordered by their smallest id. Self-parented nodes count
/// as single-node cycles.
pub fn find_cycles(graph: &MorphologyGraph) -> Vec<Vec<i64>> {
    let mut marks: HashMap<i64, Mark> = HashMap::with_capacity(graph.len());
    let mut cycles: Vec<Vec<i64>> = Vec::new();
    let mut path: Vec<i64> = Vec::new();

    for &start in graph.ids() {
        if marks.contains_key(&start) {
            continue;
        }

        let mut current = start;
        loop {
            marks.insert(current, Mark::OnPath);
            path.push(current);

            let Some(parent) = graph.parent_of(current).filter(|&p| graph.contains(p)) else {
                break;
            };
            match marks.get(&parent) {
                None => current = parent,
                Some(Mark::OnPath) => {
                    // The walk came back to itself: the tail of `path` from
                    // `parent` onward is the loop.
                    if let Some(pos) = path.iter().position(|&id| id == parent) {
                        let mut ids = path[pos..].to_vec();
                        ids.sort_unstable();
                        cycles.push(ids);
                    }
                    break;
                }
                Some(Mark::Done) => break,
            }
        }

        for id in path.drain(..) {
            marks.insert(id, Mark::Done);
        }
    }

    cycles.sort_unstable_by_key(|ids| ids[0]);
    cycles
}

/// Whether the parent relation contains any cycle.
pub fn has_cycle(graph: &MorphologyGraph) -> bool {
    !find_cycles(graph).is_empty()
}
