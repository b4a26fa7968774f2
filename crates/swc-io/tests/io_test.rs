//! Reader and writer tests over the shared SWC fixtures.

use swc_core::config::IoConfig;
use swc_core::errors::{InputError, RecordLocation, SwcError};
use swc_core::models::Compartment;
use swc_graph::{canonicalize, CanonicalMapping, MorphologyGraph};
use swc_io::{read_swc, read_swc_from, read_swc_path, write_swc, write_swc_path};
use test_fixtures::{fixture_path, load_tree};

// ─── Reader ──────────────────────────────────────────────────────────────────

#[test]
fn reads_valid_neuron_file() {
    let records = read_swc_path(fixture_path("swc/valid_neuron.swc"), &IoConfig::default()).unwrap();
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].compartment, Compartment::Soma);
    assert!(records[0].is_root());
    assert_eq!(records[9].node_id, 10);
    assert_eq!(records[9].parent, 9);
}

#[test]
fn header_comments_do_not_shift_coordinates() {
    let records = read_swc_path(fixture_path("swc/horta.swc"), &IoConfig::default()).unwrap();
    let xs: Vec<f64> = records.iter().map(|r| r.x).collect();
    assert_eq!(xs, vec![50.0, 60.0, 70.0]);
    assert_eq!(records[2].position(), [70.0, 70.0, 70.0]);
}

#[test]
fn missing_column_reports_its_line() {
    let err = read_swc_path(fixture_path("swc/missing_column.swc"), &IoConfig::default())
        .unwrap_err();
    match err {
        SwcError::InputError(InputError::MissingField { location, field }) => {
            assert_eq!(location, RecordLocation::Line(3));
            assert_eq!(field, "parent");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_swc_path("/nonexistent/tree.swc", &IoConfig::default()).unwrap_err();
    assert!(matches!(err, SwcError::Io { .. }));
}

#[test]
fn negative_radius_is_rejected_with_line() {
    let err = read_swc("1 1 0 0 0 5 -1\n2 3 1 0 0 -1 1\n", &IoConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        InputError::InvalidField {
            location: RecordLocation::Line(2),
            field: "r",
            ..
        }
    ));
}

#[test]
fn comment_only_input_yields_no_records() {
    let records = read_swc("# nothing here\n\n", &IoConfig::default()).unwrap();
    assert!(records.is_empty());
    assert!(matches!(
        MorphologyGraph::from_records(records),
        Err(InputError::Empty)
    ));
}

#[test]
fn reads_from_buffered_reader() {
    let text = b"1 1 0 0 0 5 -1\n2 2 0 -1 0 1 1\n";
    let records = read_swc_from(&text[..], &IoConfig::default()).unwrap();
    assert_eq!(records[1].compartment, Compartment::Axon);
}

// ─── Writer ──────────────────────────────────────────────────────────────────

fn data_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| !l.starts_with('#')).collect()
}

#[test]
fn writer_relabels_in_depth_first_order() {
    let records = load_tree("dfs_order").records;
    let graph = MorphologyGraph::from_records(records.clone()).unwrap();
    let mapping = canonicalize(&graph).mapping;

    let mut out = Vec::new();
    write_swc(&mut out, &records, &mapping, &IoConfig::default()).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("# Standardized by swc-standardizer "));
    let rows: Vec<(i64, i64)> = data_lines(&text)
        .iter()
        .map(|line| {
            let cols: Vec<&str> = line.split(' ').collect();
            (cols[0].parse().unwrap(), cols[6].parse().unwrap())
        })
        .collect();
    assert_eq!(rows, vec![(1, -1), (2, 1), (3, 2), (4, 1), (5, 4)]);
}

#[test]
fn empty_mapping_writes_input_unchanged() {
    let records = load_tree("rootless_cycle").records;
    let mut out = Vec::new();
    write_swc(&mut out, &records, &CanonicalMapping::default(), &IoConfig::default()).unwrap();
    let text = String::from_utf8(out).unwrap();
    let ids: Vec<&str> = data_lines(&text)
        .iter()
        .map(|l| l.split(' ').next().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    assert!(data_lines(&text)[3].ends_with(" 6"));
}

#[test]
fn literal_separator_is_used_for_output() {
    let records = load_tree("soma_child_far").records;
    let config = IoConfig {
        separator: ",".to_string(),
    };
    let mut out = Vec::new();
    write_swc(&mut out, &records, &CanonicalMapping::default(), &config).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(data_lines(&text)[1], "2,3,60,0,0,1,1");
}

#[test]
fn written_file_reads_back_as_canonical_tree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.swc");
    let records = read_swc_path(fixture_path("swc/valid_neuron.swc"), &IoConfig::default()).unwrap();
    let graph = MorphologyGraph::from_records(records.clone()).unwrap();
    let mapping = canonicalize(&graph).mapping;

    write_swc_path(&path, &records, &mapping, &IoConfig::default()).unwrap();
    let back = read_swc_path(&path, &IoConfig::default()).unwrap();

    assert_eq!(back.len(), records.len());
    for (i, record) in back.iter().enumerate() {
        assert_eq!(record.node_id, i as i64 + 1);
        assert!(record.is_root() || record.parent < record.node_id);
    }
    assert_eq!(back[0].compartment, Compartment::Soma);
}
