//! Validate command implementation

use crate::cli::args::ValidateArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::MonitorSpec;
use crate::frame::{read_feature_names, Frame};
use crate::validate::validate_frame;

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let spec = MonitorSpec::from_path(&args.spec).map_err(|e| e.to_string())?;
    let features = read_feature_names(&spec.data.feature_names).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, &format!("Validating {} feature columns", features.len()));

    for (role, path) in
        [("reference", &spec.data.reference), ("current", &spec.data.current)]
    {
        let frame = Frame::from_csv_path(path).map_err(|e| e.to_string())?;
        validate_frame(&frame, &features)
            .map_err(|e| format!("{role} dataset {}: {e}", path.display()))?;
        log(
            level,
            LogLevel::Normal,
            &format!("  ✓ {role} dataset ok ({} rows)", frame.n_rows()),
        );
    }

    Ok(())
}
