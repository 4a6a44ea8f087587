//! Input/output helpers.
//!
//! - header alias resolution (`columns`)
//! - CSV ingest (`ingest`)
//! - forecast JSON export (`export`)

pub mod columns;
pub mod export;
pub mod ingest;

pub use columns::*;
pub use export::*;
pub use ingest::*;

/// Dataset read when no `--input` is given.
pub const DEFAULT_INPUT: &str = "sp500_esg_data.csv";
/// Document written when no `--output` is given.
pub const DEFAULT_OUTPUT: &str = "esg_forecasts.json";
