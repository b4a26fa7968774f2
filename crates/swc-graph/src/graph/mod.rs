//! Morphology graph: construction and derived relations.

pub mod morphology;

pub use morphology::{MorphologyGraph, MorphologyStableGraph};
