//! Sequential batch driver. A file that fails to load or write is recorded
//! and skipped; the rest of the batch still runs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use swc_core::config::StandardizerConfig;
use swc_core::errors::{SwcError, SwcErrorCode, SwcResult};
use swc_core::models::Report;
use swc_core::traits::IImageProvider;

use crate::reporters::html::HtmlReporter;
use crate::reporters::json::JsonReporter;
use crate::reporters::Reporter;
use crate::standardizer::Standardizer;

/// Outcome for one input file.
#[derive(Debug)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub result: Result<Report, SwcError>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// All entries of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub entries: Vec<BatchEntry>,
}

impl BatchSummary {
    pub fn reports(&self) -> Vec<&Report> {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().ok())
            .collect()
    }

    pub fn failures(&self) -> Vec<(&Path, &SwcError)> {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().err().map(|err| (e.path.as_path(), err)))
            .collect()
    }

    /// Files whose report names at least one finding.
    pub fn flagged(&self) -> usize {
        self.reports().iter().filter(|r| !r.is_clean()).count()
    }

    fn owned_reports(&self) -> Vec<Report> {
        self.reports().into_iter().cloned().collect()
    }

    /// One HTML table over every successful report.
    pub fn write_html(&self, path: impl AsRef<Path>) -> SwcResult<()> {
        let path = path.as_ref();
        let body = HtmlReporter::new().render_batch(&self.owned_reports())?;
        std::fs::write(path, body).map_err(|e| SwcError::io(path, e))
    }

    /// A JSON array of every successful report.
    pub fn write_json(&self, path: impl AsRef<Path>) -> SwcResult<()> {
        let path = path.as_ref();
        let body = JsonReporter.render_batch(&self.owned_reports())?;
        std::fs::write(path, body).map_err(|e| SwcError::io(path, e))
    }
}

/// Runs the standardizer over many files with shared settings.
#[derive(Default)]
pub struct BatchRunner {
    config: StandardizerConfig,
    output_dir: Option<PathBuf>,
    image_provider: Option<Arc<dyn IImageProvider>>,
}

impl BatchRunner {
    pub fn new(config: StandardizerConfig) -> Self {
        Self {
            config,
            output_dir: None,
            image_provider: None,
        }
    }

    /// Write each canonical SWC into `dir` under its original file name.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_image_provider(mut self, provider: Arc<dyn IImageProvider>) -> Self {
        self.image_provider = Some(provider);
        self
    }

    pub fn run<P: AsRef<Path>>(&self, paths: &[P]) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for path in paths {
            let path = path.as_ref();
            let result = self.run_one(path);
            if let Err(e) = &result {
                warn!(
                    path = %path.display(),
                    code = e.error_code(),
                    error = %e,
                    "file failed; continuing batch"
                );
            }
            summary.entries.push(BatchEntry {
                path: path.to_path_buf(),
                result,
            });
        }
        info!(
            files = summary.entries.len(),
            failed = summary.failures().len(),
            flagged = summary.flagged(),
            "batch complete"
        );
        summary
    }

    fn run_one(&self, path: &Path) -> SwcResult<Report> {
        let mut standardizer = Standardizer::from_path(path, self.config.clone())?;
        if let Some(provider) = &self.image_provider {
            standardizer = standardizer.with_image_provider(Arc::clone(provider));
        }
        let report = standardizer.validate().clone();

        if let (Some(dir), Some(name)) = (&self.output_dir, path.file_name()) {
            standardizer.write_swc(dir.join(name))?;
        }
        Ok(report)
    }
}
