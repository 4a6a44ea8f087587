//! Shared domain types.
//!
//! Output records derive `Serialize` with the exact field names the dashboard
//! reads (`E`, `S`, `G`, `Total`), so the JSON export is a plain
//! `serde_json::to_writer_pretty` over `Vec<TickerForecast>`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One of the three ESG sub-score dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Environmental,
    Social,
    Governance,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::Environmental,
        Dimension::Social,
        Dimension::Governance,
    ];
}

/// A parsed CSV row before normalization.
///
/// Scores are `None` when the cell is blank or an NA marker.
#[derive(Debug, Clone, Default)]
pub struct ScoreRow {
    pub ticker: String,
    pub name: Option<String>,
    pub environmental: Option<f64>,
    pub social: Option<f64>,
    pub governance: Option<f64>,
    /// Reported total, when the dataset has one. Not used for projection.
    pub total: Option<f64>,
}

/// Sub-scores after mapping onto a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub e: f64,
    pub s: f64,
    pub g: f64,
}

impl SubScores {
    pub fn get(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Environmental => self.e,
            Dimension::Social => self.s,
            Dimension::Governance => self.g,
        }
    }
}

/// A row with every sub-score on the 0-100 scale.
#[derive(Debug, Clone)]
pub struct NormalizedRow {
    pub ticker: String,
    pub name: Option<String>,
    pub scores: SubScores,
}

/// Assumed per-quarter linear growth rate for each dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthProfile {
    pub e: f64,
    pub s: f64,
    pub g: f64,
}

impl GrowthProfile {
    pub const fn new(e: f64, s: f64, g: f64) -> Self {
        Self { e, s, g }
    }

    pub fn rate(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Environmental => self.e,
            Dimension::Social => self.s,
            Dimension::Governance => self.g,
        }
    }
}

/// A single projected quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyForecast {
    /// e.g. `Q1 2027`
    pub period: String,
    /// e.g. `Q1`
    pub quarter: String,
    /// e.g. `Jan 2027`
    pub month: String,
    #[serde(rename = "E")]
    pub e: f64,
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "G")]
    pub g: f64,
    #[serde(rename = "Total")]
    pub total: f64,
    pub confidence: u32,
}

/// All projections for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerForecast {
    pub ticker: String,
    pub company_name: String,
    pub forecasts: Vec<QuarterlyForecast>,
}

/// Resolved configuration for one run.
///
/// This is derived from CLI flags (plus env/defaults).
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// `None` means seed from OS entropy (non-reproducible output).
    pub seed: Option<u64>,
    pub quiet: bool,
}
