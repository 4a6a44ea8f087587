//! Write the forecast document as pretty-printed JSON.
//!
//! The file is written in place (no temp-file rename), matching what the
//! dashboard import step expects to pick up.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::TickerForecast;
use crate::error::AppError;

/// Write the full ordered forecast list to `path`.
pub fn write_forecasts_json(path: &Path, forecasts: &[TickerForecast]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::runtime(format!("Failed to create forecast JSON '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, forecasts)
        .map_err(|e| AppError::runtime(format!("Failed to write forecast JSON: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::runtime(format!("Failed to write forecast JSON: {e}")))?;

    Ok(())
}

/// Read a forecast document back (used by tests and tooling).
pub fn read_forecasts_json(path: &Path) -> Result<Vec<TickerForecast>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::runtime(format!("Failed to open forecast JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::runtime(format!("Invalid forecast JSON: {e}")))
}
