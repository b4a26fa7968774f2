//! Collects rule outcomes and the canonicalization result into one report.

use tracing::{debug, warn};

use swc_core::models::{Finding, Report, RuleOutcome};
use swc_graph::{CanonicalMapping, CanonicalOutcome, MorphologyGraph};

use crate::rules::RuleResult;

/// Everything one validation run produces.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub report: Report,
    pub canonical: CanonicalOutcome,
}

impl ValidationOutcome {
    /// The old → new relabeling for the writer. Empty when a cycle was found.
    pub fn mapping(&self) -> &CanonicalMapping {
        &self.canonical.mapping
    }

    pub fn has_cycle(&self) -> bool {
        self.canonical.has_cycle()
    }
}

/// Builds a [`Report`] in rule order, dropping findings with no offenders.
#[derive(Debug, Clone)]
pub struct ReportAggregator {
    report: Report,
}

impl ReportAggregator {
    pub fn new(input_source: impl Into<String>) -> Self {
        Self {
            report: Report::new(input_source),
        }
    }

    /// Record one rule's outcome. Inconclusive rules are listed by name and
    /// never contribute a finding.
    pub fn add_rule(&mut self, result: &RuleResult) {
        match &result.outcome {
            RuleOutcome::Inconclusive { reason } => {
                warn!(test = %result.test, %reason, "rule skipped");
                self.report.inconclusive.push(result.test);
            }
            outcome => {
                debug!(
                    test = %result.test,
                    offenders = outcome.offenders().len(),
                    "rule evaluated"
                );
                self.report.push(result.to_finding());
            }
        }
    }

    /// Append a finding produced outside the rule set (e.g. peripheral checks).
    pub fn add_finding(&mut self, finding: Finding) -> bool {
        self.report.push(finding)
    }

    /// Append the loop and unreachable-node findings.
    pub fn add_canonical(&mut self, canonical: &CanonicalOutcome, graph: &MorphologyGraph) {
        self.report.push(canonical.loops_finding());
        self.report.push(canonical.unreachable_finding(graph));
    }

    pub fn set_auxiliary_image_path(&mut self, path: impl Into<String>) {
        self.report.auxiliary_image_path = Some(path.into());
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn finish(self, canonical: CanonicalOutcome) -> ValidationOutcome {
        ValidationOutcome {
            report: self.report,
            canonical,
        }
    }
}
