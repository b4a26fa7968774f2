//! Facade and batch driver tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use swc_core::config::{FilenameFormat, StandardizerConfig};
use swc_core::errors::{SwcError, SwcResult};
use swc_core::models::{NodeRef, QcTest, Report};
use swc_core::traits::IImageProvider;
use swc_io::reporters::{create_reporter, html::HtmlReporter, Reporter};
use swc_io::{read_swc_path, BatchRunner, Standardizer};
use test_fixtures::{fixture_path, load_tree};

// ─── Helpers ─────────────────────────────────────────────────────────────────

struct FixedImage {
    calls: AtomicUsize,
    last_soma: std::sync::Mutex<Option<NodeRef>>,
}

impl FixedImage {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_soma: std::sync::Mutex::new(None),
        }
    }
}

impl IImageProvider for FixedImage {
    fn soma_image(&self, soma: &NodeRef) -> SwcResult<Option<PathBuf>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_soma.lock().unwrap() = Some(*soma);
        Ok(Some(PathBuf::from("/images/soma.png")))
    }
}

struct FailingImage;

impl IImageProvider for FailingImage {
    fn soma_image(&self, _soma: &NodeRef) -> SwcResult<Option<PathBuf>> {
        Err(SwcError::CollaboratorFailed {
            collaborator: "image".to_string(),
            reason: "store unreachable".to_string(),
        })
    }
}

fn tree(name: &str) -> Standardizer {
    Standardizer::from_records(
        format!("{name}.swc"),
        load_tree(name).records,
        StandardizerConfig::default(),
    )
    .unwrap()
}

// ─── Facade ──────────────────────────────────────────────────────────────────

#[test]
fn valid_file_produces_clean_report() {
    let mut s = Standardizer::from_path(
        fixture_path("swc/valid_neuron.swc"),
        StandardizerConfig::default(),
    )
    .unwrap();
    assert!(s.report().is_none());
    let report = s.validate();
    assert!(report.is_clean());
    assert!(report.input_source.ends_with("valid_neuron.swc"));
    assert_eq!(report.engine_version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let mut config = StandardizerConfig::default();
    config.qc.soma_children_distance_threshold = -1.0;
    let err = Standardizer::from_records("t.swc", load_tree("valid_neuron").records, config)
        .unwrap_err();
    assert!(matches!(err, SwcError::ConfigError(_)));
}

#[test]
fn filename_check_runs_only_when_configured() {
    let mut unchecked = tree("valid_neuron");
    assert!(unchecked.validate().finding(QcTest::FileNameFormat).is_none());

    let mut config = StandardizerConfig::default();
    config.filename.format = FilenameFormat::Aind;
    let mut checked =
        Standardizer::from_records("/data/valid_neuron.swc", load_tree("valid_neuron").records, config)
            .unwrap();
    let report = checked.validate();
    let finding = report.finding(QcTest::FileNameFormat).unwrap();
    assert_eq!(finding.offenders, Some(vec![NodeRef::SYNTHETIC]));
    // Peripheral findings come after the structural ones.
    assert_eq!(report.tests.last().unwrap().test, QcTest::FileNameFormat);
}

#[test]
fn image_provider_receives_the_soma() {
    let provider = Arc::new(FixedImage::new());
    let mut s = tree("valid_neuron").with_image_provider(provider.clone());
    let report = s.validate().clone();
    let _ = s.validate();

    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.last_soma.lock().unwrap().unwrap().node_id, 1);
    assert_eq!(report.auxiliary_image_path.as_deref(), Some("/images/soma.png"));
}

#[test]
fn image_provider_uses_first_of_several_somas() {
    let provider = Arc::new(FixedImage::new());
    let mut s = tree("two_somas").with_image_provider(provider.clone());
    s.validate();
    assert_eq!(provider.last_soma.lock().unwrap().unwrap().node_id, 1);
}

#[test]
fn failing_image_provider_does_not_abort_validation() {
    let mut s = tree("two_somas").with_image_provider(Arc::new(FailingImage));
    let report = s.validate();
    assert!(report.auxiliary_image_path.is_none());
    assert!(report.finding(QcTest::NumberOfSomas).is_some());
}

#[test]
fn canonical_records_follow_depth_first_numbering() {
    let mut s = tree("dfs_order");
    let pairs: Vec<(i64, i64)> = s
        .canonical_records()
        .iter()
        .map(|r| (r.node_id, r.parent))
        .collect();
    assert_eq!(pairs, vec![(1, -1), (2, 1), (3, 2), (4, 1), (5, 4)]);
}

#[test]
fn writes_swc_json_and_html() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = tree("orphan_subtree");
    s.write_swc(dir.path().join("out.swc")).unwrap();
    s.write_report_json(dir.path().join("report.json")).unwrap();
    s.write_report_html(dir.path().join("report.html")).unwrap();

    let swc = read_swc_path(dir.path().join("out.swc"), &Default::default()).unwrap();
    let ids: Vec<i64> = swc.iter().map(|r| r.node_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    // The orphan head becomes a root; its child keeps pointing at it.
    assert_eq!(swc[3].parent, -1);
    assert_eq!(swc[4].parent, 4);

    let json = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    let report: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(report.tests.len(), 3);
    assert_eq!(report.finding(QcTest::OrphanNodeCheck).unwrap().offender_ids(), vec![4]);

    let html = std::fs::read_to_string(dir.path().join("report.html")).unwrap();
    assert!(html.contains("<title>QC Report for orphan_subtree.swc</title>"));
    assert!(html.contains("<b>OrphanNodeCheck:</b>"));
    assert!(html.contains("(Nodes: 4)"));
    assert!(html.contains("No Image Available"));
}

// ─── Reporters ───────────────────────────────────────────────────────────────

#[test]
fn reporter_lookup_by_name() {
    assert_eq!(create_reporter("json").unwrap().name(), "json");
    assert_eq!(create_reporter("html").unwrap().name(), "html");
    assert!(create_reporter("pdf").is_none());
}

#[test]
fn html_escapes_report_values() {
    let mut report = Report::new("dir/<script>.swc");
    report.auxiliary_image_path = Some("a\"b.png".to_string());
    let html = HtmlReporter::new().render(&report).unwrap();
    assert!(html.contains("&lt;script&gt;.swc"));
    assert!(html.contains("a&quot;b.png"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("No errors found"));
}

// ─── Batch ───────────────────────────────────────────────────────────────────

#[test]
fn batch_isolates_failing_files() {
    let out = tempfile::tempdir().unwrap();
    let paths = vec![
        fixture_path("swc/valid_neuron.swc"),
        fixture_path("swc/missing_column.swc"),
        fixture_path("swc/horta.swc"),
    ];
    let summary = BatchRunner::new(StandardizerConfig::default())
        .with_output_dir(out.path())
        .run(&paths);

    assert_eq!(summary.entries.len(), 3);
    assert!(summary.entries[0].is_ok());
    assert!(!summary.entries[1].is_ok());
    assert!(summary.entries[2].is_ok());
    assert_eq!(summary.failures().len(), 1);
    assert_eq!(summary.reports().len(), 2);
    assert!(out.path().join("valid_neuron.swc").exists());
    assert!(out.path().join("horta.swc").exists());
    assert!(!out.path().join("missing_column.swc").exists());
}

#[test]
fn batch_renders_one_table() {
    let out = tempfile::tempdir().unwrap();
    let paths = vec![
        fixture_path("swc/valid_neuron.swc"),
        fixture_path("swc/horta.swc"),
    ];
    let summary = BatchRunner::new(StandardizerConfig::default()).run(&paths);
    summary.write_html(out.path().join("batch.html")).unwrap();
    summary.write_json(out.path().join("batch.json")).unwrap();

    let html = std::fs::read_to_string(out.path().join("batch.html")).unwrap();
    assert!(html.contains("<title>SWC QC Report</title>"));
    assert_eq!(html.matches("<tr>").count(), 3);

    let json = std::fs::read_to_string(out.path().join("batch.json")).unwrap();
    let reports: Vec<Report> = serde_json::from_str(&json).unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports[0].is_clean());
}
