//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw and normalized score rows (`ScoreRow`, `NormalizedRow`)
//! - growth assumptions (`GrowthProfile`)
//! - forecast outputs (`QuarterlyForecast`, `TickerForecast`)
//! - run configuration (`ForecastConfig`)

pub mod types;

pub use types::*;
