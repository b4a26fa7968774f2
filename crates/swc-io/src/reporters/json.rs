//! JSON reporter: the report structure, pretty-printed.

use swc_core::errors::SwcResult;
use swc_core::models::Report;

use super::Reporter;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, report: &Report) -> SwcResult<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    /// A JSON array with one object per report.
    fn render_batch(&self, reports: &[Report]) -> SwcResult<String> {
        Ok(serde_json::to_string_pretty(reports)?)
    }
}
