//! Monitor command implementation

use crate::cli::args::MonitorArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::MonitorSpec;
use crate::frame::{read_feature_names, Frame};
use crate::monitor::{write_html, DriftAnalyzer, DriftSummary};

pub fn run_monitor(args: MonitorArgs, level: LogLevel) -> Result<(), String> {
    let mut spec = MonitorSpec::from_path(&args.spec).map_err(|e| e.to_string())?;

    if let Some(reference) = args.reference {
        spec.data.reference = reference;
    }
    if let Some(current) = args.current {
        spec.data.current = current;
    }
    if let Some(features) = args.features {
        spec.data.feature_names = features;
    }
    if let Some(output) = args.output {
        spec.report.output = output;
    }
    if let Some(bins) = args.bins {
        spec.report.bins = bins;
    }

    log(level, LogLevel::Normal, &format!("Reference: {}", spec.data.reference.display()));
    log(level, LogLevel::Normal, &format!("Current:   {}", spec.data.current.display()));

    let features = read_feature_names(&spec.data.feature_names).map_err(|e| e.to_string())?;
    let reference = Frame::from_csv_path(&spec.data.reference).map_err(|e| e.to_string())?;
    let current = Frame::from_csv_path(&spec.data.current).map_err(|e| e.to_string())?;

    let report = DriftAnalyzer::with_bins(spec.report.bins)
        .analyze(&reference, &current, &features)
        .map_err(|e| e.to_string())?;
    write_html(&report, &spec.report.output).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, "Drift report:");
    for row in report.rows() {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "  {}: psi={:.4} ks={:.4} ref_mean={:.4} cur_mean={:.4}",
                row.feature, row.psi, row.ks_stat, row.ref_mean, row.cur_mean
            ),
        );
    }
    log(
        level,
        LogLevel::Normal,
        &format!(
            "  {} features, {} reference rows, {} current rows",
            report.rows().len(),
            report.rows_ref,
            report.rows_cur
        ),
    );
    log(level, LogLevel::Normal, &format!("  Written to {}", spec.report.output.display()));

    if args.json {
        let summary = DriftSummary {
            report_path: spec.report.output.clone(),
            rows_ref: report.rows_ref,
            rows_cur: report.rows_cur,
        };
        let json = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{json}");
    }

    Ok(())
}
