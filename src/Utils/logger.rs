//! Logger set-up and saving of mesh samples into CSV files.
use crate::numerical::ODE_errors::OdeError;
use chrono::Local;
use csv::Writer;
use log::{LevelFilter, debug};
use nalgebra::DVector;
use simplelog::*;
use std::fs::File;
use std::path::Path;

/// Maps "debug" | "info" | "warn" | "error" | "off" to a level filter.
pub fn parse_level(level: &str) -> Result<LevelFilter, OdeError> {
    match level.trim().to_lowercase().as_str() {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        other => Err(OdeError::InvalidConfig(format!(
            "loglevel must be debug, info, warn, error or off, got '{}'",
            other
        ))),
    }
}

/// Terminal logger plus, if `log_file` is set, a copy of the log in
/// `log_<date>_<time>.txt`. A logger that is already installed is kept and
/// no log file is created then.
pub fn init_logger(level: &str, log_file: bool) -> Result<(), OdeError> {
    let log_option = parse_level(level)?;
    if log::max_level() != LevelFilter::Off {
        debug!("a logger is already installed, keeping it");
        return Ok(());
    }
    let mut log_name = None;
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if log_file {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let name = format!("log_{}.txt", date_and_time);
        let file = File::create(&name)
            .map_err(|e| OdeError::InvalidConfig(format!("cannot create {}: {}", name, e)))?;
        loggers.push(WriteLogger::new(log_option, Config::default(), file));
        log_name = Some(name);
    }
    if CombinedLogger::init(loggers).is_err() {
        // lost the race against another logger, which stays
        if let Some(name) = log_name {
            let _ = std::fs::remove_file(name);
        }
    }
    Ok(())
}

/// Writes `x` and every named column into a CSV file: one header row, then
/// one row per mesh point.
pub fn save_samples_to_csv(
    path: &Path,
    x_name: &str,
    x_mesh: &DVector<f64>,
    columns: &[(&str, &DVector<f64>)],
) -> Result<(), Box<dyn std::error::Error>> {
    for (name, column) in columns {
        if column.len() != x_mesh.len() {
            return Err(Box::new(OdeError::InvalidConfig(format!(
                "column '{}' has {} values for {} mesh points",
                name,
                column.len(),
                x_mesh.len()
            ))));
        }
    }
    let mut writer = Writer::from_path(path)?;

    let mut headers = vec![x_name.to_string()];
    headers.extend(columns.iter().map(|(name, _)| name.to_string()));
    writer.write_record(&headers)?;

    for (i, x) in x_mesh.iter().enumerate() {
        let mut row_data = vec![x.to_string()];
        row_data.extend(columns.iter().map(|(_, column)| column[i].to_string()));
        writer.write_record(&row_data)?;
    }
    writer.flush()?;
    Ok(())
}
