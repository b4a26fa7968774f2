//! Filename-convention check, reported as a `FileNameFormat` finding.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use swc_core::config::FilenameFormat;
use swc_core::models::{Finding, NodeRef, QcTest, RuleOutcome};
use swc_core::traits::IFilenameChecker;

pub const DESCRIPTION: &str = "Check if file is named correctly";

/// `N<id>-<6 digits>-<axon|dendrite|dendrites>-<initials|consensus>.swc`,
/// with `-` or `_` as separators.
static AIND_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^N\d+(-|_)\d{6}(-|_)(axon|dendrite|dendrites)(-|_)([A-Za-z]{2,3}|consensus)\.swc$",
    )
    .ok()
});

/// Checks filenames against one of the known conventions.
#[derive(Debug, Clone, Copy)]
pub struct FilenameFormatChecker {
    format: FilenameFormat,
}

impl FilenameFormatChecker {
    pub fn new(format: FilenameFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> FilenameFormat {
        self.format
    }

    /// Check the base name of `path` and build the finding.
    pub fn check_path(&self, path: &Path) -> Finding {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        check_filename(self, &name)
    }
}

impl IFilenameChecker for FilenameFormatChecker {
    fn is_valid(&self, filename: &str) -> bool {
        match self.format {
            FilenameFormat::None => true,
            FilenameFormat::Aind => AIND_RE
                .as_ref()
                .is_some_and(|re| re.is_match(filename)),
            // No published pattern for AIBS names; any SWC file is accepted.
            FilenameFormat::Aibs => filename.to_ascii_lowercase().ends_with(".swc"),
        }
    }
}

/// Run `checker` on `filename`. A bad name yields the synthetic offender.
pub fn check_filename(checker: &dyn IFilenameChecker, filename: &str) -> Finding {
    let valid = checker.is_valid(filename);
    debug!(filename, valid, "filename checked");
    let outcome = if valid {
        RuleOutcome::Pass
    } else {
        RuleOutcome::Fail(vec![NodeRef::SYNTHETIC])
    };
    Finding::new(QcTest::FileNameFormat, DESCRIPTION, &outcome)
}
