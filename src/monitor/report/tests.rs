//! Tests for the drift report module.

use super::*;
use crate::frame::Frame;
use approx::assert_relative_eq;
use std::fs;

fn write_csv(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write csv");
    path
}

fn csv_column(name: &str, values: &[f64]) -> String {
    let mut out = format!("{name}\n");
    for v in values {
        out.push_str(&format!("{v}\n"));
    }
    out
}

#[test]
fn test_rows_sorted_by_psi_then_ks_descending() {
    let rows = vec![
        DriftRow { feature: "a".into(), psi: 0.05, ks_stat: 0.9, ref_mean: 0.0, cur_mean: 0.0 },
        DriftRow { feature: "b".into(), psi: 0.5, ks_stat: 0.1, ref_mean: 0.0, cur_mean: 0.0 },
        DriftRow { feature: "c".into(), psi: 0.2, ks_stat: 0.5, ref_mean: 0.0, cur_mean: 0.0 },
    ];

    let report = DriftReport::from_rows(rows, 3, 3);
    let order: Vec<&str> = report.rows().iter().map(|r| r.feature.as_str()).collect();
    assert_eq!(order, vec!["b", "c", "a"]);
}

#[test]
fn test_ks_breaks_psi_ties() {
    let rows = vec![
        DriftRow { feature: "a".into(), psi: 0.2, ks_stat: 0.1, ref_mean: 0.0, cur_mean: 0.0 },
        DriftRow { feature: "b".into(), psi: 0.2, ks_stat: 0.4, ref_mean: 0.0, cur_mean: 0.0 },
    ];

    let report = DriftReport::from_rows(rows, 2, 2);
    assert_eq!(report.rows()[0].feature, "b");
}

#[test]
fn test_exact_ties_keep_requested_order() {
    let rows = vec![
        DriftRow { feature: "x".into(), psi: 0.2, ks_stat: 0.2, ref_mean: 0.0, cur_mean: 0.0 },
        DriftRow { feature: "y".into(), psi: 0.2, ks_stat: 0.2, ref_mean: 0.0, cur_mean: 0.0 },
        DriftRow { feature: "z".into(), psi: 0.2, ks_stat: 0.2, ref_mean: 0.0, cur_mean: 0.0 },
    ];

    let report = DriftReport::from_rows(rows, 3, 3);
    let order: Vec<&str> = report.rows().iter().map(|r| r.feature.as_str()).collect();
    assert_eq!(order, vec!["x", "y", "z"]);
}

#[test]
fn test_analyze_identical_datasets() {
    let values: Vec<f64> = (1..=10).map(f64::from).collect();
    let csv = csv_column("f", &values);
    let dir = tempfile::tempdir().expect("tempdir");
    let frame = Frame::from_csv_path(write_csv(dir.path(), "d.csv", &csv)).expect("frame");

    let report =
        DriftAnalyzer::new().analyze(&frame, &frame, &["f".to_string()]).expect("analyze");

    assert_eq!(report.rows().len(), 1);
    let row = &report.rows()[0];
    assert_relative_eq!(row.psi, 0.0, epsilon = 1e-12);
    assert_eq!(row.ks_stat, 0.0);
    assert_relative_eq!(row.ref_mean, 5.5);
    assert_relative_eq!(row.cur_mean, 5.5);
    assert_eq!(report.rows_ref, 10);
    assert_eq!(report.rows_cur, 10);
}

#[test]
fn test_analyze_shifted_dataset() {
    let reference = vec![1.0; 50];
    let mut current = vec![1.0; 40];
    current.extend(vec![100.0; 10]);

    let dir = tempfile::tempdir().expect("tempdir");
    let ref_frame = Frame::from_csv_path(write_csv(
        dir.path(),
        "ref.csv",
        &csv_column("f", &reference),
    ))
    .expect("frame");
    let cur_frame =
        Frame::from_csv_path(write_csv(dir.path(), "cur.csv", &csv_column("f", &current)))
            .expect("frame");

    let report =
        DriftAnalyzer::new().analyze(&ref_frame, &cur_frame, &["f".to_string()]).expect("analyze");

    let row = &report.rows()[0];
    assert!(row.psi > 0.0);
    assert!(row.ks_stat > 0.0);
    assert_relative_eq!(row.ref_mean, 1.0);
    assert_relative_eq!(row.cur_mean, 20.8);
    assert!(row.cur_mean > row.ref_mean);
}

#[test]
fn test_analyze_missing_column_names_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ref_frame =
        Frame::from_csv_path(write_csv(dir.path(), "ref.csv", "f,ghost\n1,2\n")).expect("frame");
    let cur_frame =
        Frame::from_csv_path(write_csv(dir.path(), "cur.csv", "f\n1\n")).expect("frame");

    let err = DriftAnalyzer::new()
        .analyze(&ref_frame, &cur_frame, &["f".to_string(), "ghost".to_string()])
        .expect_err("ghost is absent from current");

    match err {
        crate::error::DerivaError::MissingColumns { columns } => {
            assert_eq!(columns, vec!["ghost".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_analyze_zero_bins_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let frame =
        Frame::from_csv_path(write_csv(dir.path(), "d.csv", "f\n1\n2\n3\n")).expect("frame");

    let err = DriftAnalyzer::with_bins(0)
        .analyze(&frame, &frame, &["f".to_string()])
        .expect_err("zero buckets cannot be analyzed");

    match err {
        crate::error::DerivaError::InvalidBins { bins } => assert_eq!(bins, 0),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_render_html_contains_rows_in_order() {
    let rows = vec![
        DriftRow { feature: "low".into(), psi: 0.05, ks_stat: 0.1, ref_mean: 1.0, cur_mean: 1.0 },
        DriftRow { feature: "high".into(), psi: 0.5, ks_stat: 0.4, ref_mean: 1.0, cur_mean: 9.0 },
        DriftRow { feature: "mid".into(), psi: 0.2, ks_stat: 0.2, ref_mean: 1.0, cur_mean: 3.0 },
    ];
    let report = DriftReport::from_rows(rows, 3, 3);

    let html = render_html(&report);
    assert!(html.contains("<title>Drift Report</title>"));
    assert!(html.contains("~0.1 small, ~0.2 moderate, &gt;0.3 large"));

    let high = html.find("<td>high</td>").expect("high row rendered");
    let mid = html.find("<td>mid</td>").expect("mid row rendered");
    let low = html.find("<td>low</td>").expect("low row rendered");
    assert!(high < mid && mid < low);
}

#[test]
fn test_render_html_escapes_feature_names() {
    let rows = vec![DriftRow {
        feature: "a<b>&c".into(),
        psi: 0.0,
        ks_stat: 0.0,
        ref_mean: 0.0,
        cur_mean: 0.0,
    }];
    let report = DriftReport::from_rows(rows, 1, 1);

    let html = render_html(&report);
    assert!(html.contains("a&lt;b&gt;&amp;c"));
    assert!(!html.contains("a<b>&c"));
}

#[test]
fn test_write_html_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("reports").join("nested").join("drift.html");

    let report = DriftReport::from_rows(Vec::new(), 0, 0);
    write_html(&report, &out).expect("write should create parents");

    assert!(out.exists());
}

#[test]
fn test_write_html_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("drift.html");

    let rows = vec![DriftRow {
        feature: "f".into(),
        psi: 0.1,
        ks_stat: 0.2,
        ref_mean: 1.5,
        cur_mean: 2.5,
    }];
    let report = DriftReport::from_rows(rows, 4, 4);

    write_html(&report, &out).expect("first write");
    let first = fs::read_to_string(&out).expect("read report");
    write_html(&report, &out).expect("second write");
    let second = fs::read_to_string(&out).expect("read report");

    assert_eq!(first, second);
}
