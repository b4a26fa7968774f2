//! Output formats for validation reports.

pub mod html;
pub mod json;

use swc_core::errors::SwcResult;
use swc_core::models::Report;

/// Renders one or more reports into a document.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    /// Render a single tree's report.
    fn render(&self, report: &Report) -> SwcResult<String>;
    /// Render reports for many trees into one document.
    fn render_batch(&self, reports: &[Report]) -> SwcResult<String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "json" => Some(Box::new(json::JsonReporter)),
        "html" => Some(Box::new(html::HtmlReporter::new())),
        _ => None,
    }
}

pub fn available_formats() -> &'static [&'static str] {
    &["json", "html"]
}

/// Base name of a report's input source, used as the neuron name.
pub(crate) fn neuron_name(report: &Report) -> &str {
    let source = report.input_source.as_str();
    source
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(source)
}
