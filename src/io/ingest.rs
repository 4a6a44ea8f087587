//! CSV ingest.
//!
//! Turns an ESG score export into `ScoreRow`s keyed by the resolved columns.
//! Only two failures are "expected" (exit code 1): the file is missing, or
//! the header lacks a required field. Anything else (unreadable file, a row
//! with more cells than the header, a score cell that is neither a number
//! nor an NA marker) is a runtime fault with exit code 2.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::domain::ScoreRow;
use crate::error::AppError;
use crate::io::columns::{Column, ResolvedColumns, resolve_columns};

/// Ingest output: header, resolved columns, and parsed rows in file order.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    pub headers: Vec<String>,
    pub columns: ResolvedColumns,
    pub rows: Vec<ScoreRow>,
    /// Data records read (excluding the header).
    pub rows_read: usize,
    /// Records dropped because the ticker cell was empty.
    pub rows_skipped: usize,
}

/// Load an ESG CSV from disk.
pub fn load_scores(path: &Path) -> Result<ScoreTable, AppError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::input_missing(path),
        _ => AppError::runtime(format!("Failed to open CSV '{}': {e}", path.display())),
    })?;
    read_scores(file)
}

/// Parse an ESG CSV from any reader.
pub fn read_scores<R: std::io::Read>(reader: R) -> Result<ScoreTable, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::runtime(format!("Failed to read CSV headers: {e}")))?
        .iter()
        .map(normalize_header_name)
        .collect();

    let columns = resolve_columns(&headers)?;

    let mut rows = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        rows_read += 1;

        let record = result.map_err(|e| AppError::runtime(format!("CSV parse error on line {line}: {e}")))?;

        // Short rows are padded with blanks; long rows are malformed.
        if record.len() > headers.len() {
            return Err(AppError::runtime(format!(
                "CSV parse error on line {line}: expected {} fields, saw {}",
                headers.len(),
                record.len()
            )));
        }

        match parse_row(&record, &columns)
            .map_err(|cell| AppError::runtime(format!("Invalid score on line {line}: '{cell}'")))?
        {
            Some(row) => rows.push(row),
            None => {
                debug!(line, "skipping row with empty ticker");
                rows_skipped += 1;
            }
        }
    }

    Ok(ScoreTable {
        headers,
        columns,
        rows,
        rows_read,
        rows_skipped,
    })
}

fn normalize_header_name(name: &str) -> String {
    // Excel likes to prefix the first header with a BOM.
    name.trim().trim_start_matches('\u{feff}').to_string()
}

/// `Ok(None)` for a row without a ticker; `Err(cell)` for an unparseable score.
fn parse_row(record: &StringRecord, columns: &ResolvedColumns) -> Result<Option<ScoreRow>, String> {
    let Some(ticker) = get_cell(record, Some(&columns.ticker)) else {
        return Ok(None);
    };

    Ok(Some(ScoreRow {
        ticker: ticker.to_string(),
        name: get_cell(record, columns.name.as_ref()).map(str::to_string),
        environmental: parse_score(get_cell(record, Some(&columns.environmental)))?,
        social: parse_score(get_cell(record, Some(&columns.social)))?,
        governance: parse_score(get_cell(record, Some(&columns.governance)))?,
        // Informational only, so a bad cell here is not fatal.
        total: parse_score(get_cell(record, columns.total.as_ref())).ok().flatten(),
    }))
}

fn get_cell<'a>(record: &'a StringRecord, column: Option<&Column>) -> Option<&'a str> {
    let column = column?;
    record.get(column.index).map(str::trim).filter(|s| !s.is_empty())
}

/// Cell text read as "no value" (the usual dataframe NA markers).
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>", "N/A",
    "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Blank cells and NA markers are missing; any other non-numeric text is an error.
fn parse_score(s: Option<&str>) -> Result<Option<f64>, String> {
    let Some(s) = s else { return Ok(None) };
    if NA_TOKENS.contains(&s) {
        return Ok(None);
    }
    let v = s.parse::<f64>().map_err(|_| s.to_string())?;
    Ok(if v.is_nan() { None } else { Some(v) })
}
