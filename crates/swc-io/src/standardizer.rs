//! Standardizer: load one reconstruction, validate it, and write the
//! canonical SWC and its report.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use swc_core::config::StandardizerConfig;
use swc_core::errors::{SwcError, SwcResult};
use swc_core::models::{NodeRecord, NodeRef, Report};
use swc_core::traits::IImageProvider;
use swc_graph::MorphologyGraph;
use swc_qc::filename::check_filename;
use swc_qc::{FilenameFormatChecker, QcEngine, ValidationOutcome};

use crate::reader::read_swc_path;
use crate::reporters::html::HtmlReporter;
use crate::reporters::json::JsonReporter;
use crate::reporters::Reporter;
use crate::writer::write_swc_path;

/// One tree moving through the standardization pipeline.
///
/// Validation runs at most once; the writers trigger it when it has not
/// run yet.
pub struct Standardizer {
    input_source: String,
    config: StandardizerConfig,
    graph: MorphologyGraph,
    engine: QcEngine,
    image_provider: Option<Arc<dyn IImageProvider>>,
    outcome: Option<ValidationOutcome>,
}

impl Standardizer {
    /// Read and model an SWC file.
    pub fn from_path(path: impl AsRef<Path>, config: StandardizerConfig) -> SwcResult<Self> {
        let path = path.as_ref();
        config.validate()?;
        let records = read_swc_path(path, &config.io)?;
        Self::from_records(path.display().to_string(), records, config)
    }

    /// Model an already-parsed record collection. `input_source` names it in
    /// the report and supplies the filename for the filename check.
    pub fn from_records(
        input_source: impl Into<String>,
        records: Vec<NodeRecord>,
        config: StandardizerConfig,
    ) -> SwcResult<Self> {
        config.validate()?;
        let graph = MorphologyGraph::from_records(records)?;
        Ok(Self {
            input_source: input_source.into(),
            engine: QcEngine::new(config.qc.clone()),
            config,
            graph,
            image_provider: None,
            outcome: None,
        })
    }

    /// Attach a soma image provider; without one no image is produced.
    pub fn with_image_provider(mut self, provider: Arc<dyn IImageProvider>) -> Self {
        self.image_provider = Some(provider);
        self
    }

    pub fn input_source(&self) -> &str {
        &self.input_source
    }

    pub fn graph(&self) -> &MorphologyGraph {
        &self.graph
    }

    /// Run every check and return the report.
    pub fn validate(&mut self) -> &Report {
        &self.ensure_validated().report
    }

    /// The report, if validation has run.
    pub fn report(&self) -> Option<&Report> {
        self.outcome.as_ref().map(|o| &o.report)
    }

    pub fn outcome(&self) -> Option<&ValidationOutcome> {
        self.outcome.as_ref()
    }

    /// Records relabeled with the canonical mapping, sorted by new id.
    pub fn canonical_records(&mut self) -> Vec<NodeRecord> {
        let records = self.graph.records();
        self.ensure_validated().mapping().apply(&records)
    }

    pub fn write_swc(&mut self, path: impl AsRef<Path>) -> SwcResult<()> {
        let records = self.graph.records();
        let io = self.config.io.clone();
        write_swc_path(path, &records, self.ensure_validated().mapping(), &io)
    }

    pub fn write_report_json(&mut self, path: impl AsRef<Path>) -> SwcResult<()> {
        let body = JsonReporter.render(&self.ensure_validated().report)?;
        write_file(path.as_ref(), &body)
    }

    pub fn write_report_html(&mut self, path: impl AsRef<Path>) -> SwcResult<()> {
        let body = HtmlReporter::new().render(&self.ensure_validated().report)?;
        write_file(path.as_ref(), &body)
    }

    fn ensure_validated(&mut self) -> &ValidationOutcome {
        let outcome = match self.outcome.take() {
            Some(outcome) => outcome,
            None => self.run(),
        };
        self.outcome.insert(outcome)
    }

    fn run(&self) -> ValidationOutcome {
        let mut outcome = self.engine.validate(&self.graph, &self.input_source);

        let format = self.config.filename.format;
        if format.is_enabled() {
            let checker = FilenameFormatChecker::new(format);
            let finding = checker.check_path(Path::new(&self.input_source));
            outcome.report.push(finding);
        }

        if let Some(provider) = &self.image_provider {
            if let Some(path) = self.soma_image(provider.as_ref()) {
                outcome.report.auxiliary_image_path = Some(path.display().to_string());
            }
        }

        info!(
            source = %self.input_source,
            findings = outcome.report.tests.len(),
            "standardization complete"
        );
        outcome
    }

    /// Ask the provider for an image of the soma. Failures are logged and
    /// leave the report without an image.
    fn soma_image(&self, provider: &dyn IImageProvider) -> Option<PathBuf> {
        let somas = self.graph.soma_roots();
        let soma = match somas.as_slice() {
            [] => {
                warn!(source = %self.input_source, "no soma; skipping soma image");
                return None;
            }
            [soma] => NodeRef::from(*soma),
            [first, ..] => {
                warn!(
                    source = %self.input_source,
                    somas = somas.len(),
                    node_id = first.node_id,
                    "several somas; imaging the first"
                );
                NodeRef::from(*first)
            }
        };

        match provider.soma_image(&soma) {
            Ok(path) => path,
            Err(e) => {
                warn!(source = %self.input_source, error = %e, "soma image failed");
                None
            }
        }
    }
}

impl std::fmt::Debug for Standardizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Standardizer")
            .field("input_source", &self.input_source)
            .field("nodes", &self.graph.len())
            .field("validated", &self.outcome.is_some())
            .finish()
    }
}

fn write_file(path: &Path, body: &str) -> SwcResult<()> {
    std::fs::write(path, body).map_err(|e| SwcError::io(path, e))?;
    info!(path = %path.display(), "report written");
    Ok(())
}
