//! QcEngine: runs every structural rule and the canonicalizer over one tree
//! and aggregates the outcome.

use tracing::info;

use swc_core::config::QcConfig;
use swc_graph::{canonicalize, MorphologyGraph};

use crate::aggregator::{ReportAggregator, ValidationOutcome};
use crate::rules::{self, RuleResult};

/// Stateless apart from its configuration; one engine can validate any
/// number of trees.
#[derive(Debug, Clone, Default)]
pub struct QcEngine {
    config: QcConfig,
}

impl QcEngine {
    pub fn new(config: QcConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QcConfig {
        &self.config
    }

    /// Evaluate the structural rules only, in report order.
    pub fn run_rules(&self, graph: &MorphologyGraph) -> Vec<RuleResult> {
        rules::run_all(graph, &self.config)
    }

    /// Run all rules, then canonicalize, and collect the non-empty findings.
    ///
    /// A cycle only suppresses the canonical mapping; every rule still runs.
    pub fn validate(&self, graph: &MorphologyGraph, input_source: &str) -> ValidationOutcome {
        info!(source = input_source, nodes = graph.len(), "validating tree");

        let mut aggregator = self.aggregate(graph, input_source);
        let canonical = canonicalize(graph);
        aggregator.add_canonical(&canonical, graph);

        let outcome = aggregator.finish(canonical);
        info!(
            source = input_source,
            findings = outcome.report.tests.len(),
            inconclusive = outcome.report.inconclusive.len(),
            cycle = outcome.has_cycle(),
            "validation complete"
        );
        outcome
    }

    /// An aggregator already holding the structural rule outcomes, for
    /// callers that append their own findings before canonicalizing.
    pub fn aggregate(&self, graph: &MorphologyGraph, input_source: &str) -> ReportAggregator {
        let mut aggregator = ReportAggregator::new(input_source);
        for result in self.run_rules(graph) {
            aggregator.add_rule(&result);
        }
        aggregator
    }
}
