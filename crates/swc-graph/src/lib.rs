//! # swc-graph
//!
//! In-memory model of one SWC reconstruction. Nodes live in a
//! `petgraph::StableGraph` with parent→child edges, alongside the derived
//! relations the QC rules read (child lists in input order, child counts,
//! parent compartments). The canonicalizer checks the parent relation for
//! cycles and assigns dense depth-first identifiers.

pub mod canonical;
pub mod graph;

pub use canonical::{apply_mapping, canonicalize, CanonicalMapping, CanonicalOutcome};
pub use graph::MorphologyGraph;
