//! Quarterly projection of ESG scores.
//!
//! Each sub-score grows linearly from its latest observed value:
//!
//! `X_q = min(95, base_X * (1 + rate_X * q) + v_q)`
//!
//! where `v_q ~ U[-0.5, 0.5)` is drawn once per quarter and shared by E, S and G.
//! Quarters are independent apart from the shared rate and increasing `q`.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use tracing::{info, warn};

use crate::domain::{Dimension, GrowthProfile, NormalizedRow, QuarterlyForecast, SubScores, TickerForecast};
use crate::forecast::profiles::{FALLBACK_SCORES, growth_profile};

/// Number of quarters projected per company.
pub const HORIZON_QUARTERS: u32 = 4;
/// Calendar days per projected quarter.
pub const DAYS_PER_QUARTER: i64 = 90;
/// Upper bound for any projected sub-score.
pub const SCORE_CEILING: f64 = 95.0;
/// Half-width of the per-quarter perturbation.
pub const PERTURBATION: f64 = 0.5;

const CONFIDENCE_START: u32 = 92;
const CONFIDENCE_STEP: u32 = 2;
const CONFIDENCE_FLOOR: u32 = 82;

/// Where a company's base scores came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyBase {
    pub ticker: String,
    pub company_name: String,
    pub scores: SubScores,
    /// `false` when the ticker was absent and fallback scores were used.
    pub observed: bool,
}

/// Resolve base scores for `ticker` from the last matching row.
pub fn company_base(rows: &[NormalizedRow], ticker: &str) -> CompanyBase {
    match rows.iter().rev().find(|r| r.ticker == ticker) {
        Some(row) => CompanyBase {
            ticker: ticker.to_string(),
            company_name: row.name.clone().unwrap_or_else(|| ticker.to_string()),
            scores: row.scores,
            observed: true,
        },
        None => CompanyBase {
            ticker: ticker.to_string(),
            company_name: ticker.to_string(),
            scores: FALLBACK_SCORES,
            observed: false,
        },
    }
}

/// Confidence for quarter `q`: starts at 90 for Q1 and drops 2 per quarter, floored at 82.
pub fn confidence(quarter: u32) -> u32 {
    CONFIDENCE_START
        .saturating_sub(CONFIDENCE_STEP.saturating_mul(quarter))
        .max(CONFIDENCE_FLOOR)
}

/// Round to one decimal place.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn project_score(base: f64, rate: f64, quarter: u32, perturbation: f64) -> f64 {
    (base * (1.0 + rate * f64::from(quarter)) + perturbation).min(SCORE_CEILING)
}

/// Build the record for one quarter given an already-drawn perturbation.
pub fn project_quarter(
    base: SubScores,
    growth: GrowthProfile,
    quarter: u32,
    as_of: NaiveDate,
    perturbation: f64,
) -> QuarterlyForecast {
    let date = as_of + Duration::days(DAYS_PER_QUARTER * i64::from(quarter));

    let [e, s, g] = Dimension::ALL.map(|dim| {
        round1(project_score(base.get(dim), growth.rate(dim), quarter, perturbation))
    });
    // Total is taken over the recorded values so it always agrees with them.
    let total = round1((e + s + g) / 3.0);

    QuarterlyForecast {
        period: format!("Q{quarter} {}", date.format("%Y")),
        quarter: format!("Q{quarter}"),
        month: date.format("%b %Y").to_string(),
        e,
        s,
        g,
        total,
        confidence: confidence(quarter),
    }
}

/// Project `HORIZON_QUARTERS` quarters for one company.
pub fn forecast_company<R: Rng + ?Sized>(base: &CompanyBase, as_of: NaiveDate, rng: &mut R) -> TickerForecast {
    let growth = growth_profile(&base.ticker);
    let forecasts = (1..=HORIZON_QUARTERS)
        .map(|quarter| {
            let v = rng.gen_range(-PERTURBATION..PERTURBATION);
            project_quarter(base.scores, growth, quarter, as_of, v)
        })
        .collect();

    TickerForecast {
        ticker: base.ticker.clone(),
        company_name: base.company_name.clone(),
        forecasts,
    }
}

/// Forecast every ticker in `tickers`, preserving order.
pub fn generate_forecasts<R: Rng + ?Sized>(
    rows: &[NormalizedRow],
    tickers: &[&str],
    as_of: NaiveDate,
    rng: &mut R,
) -> Vec<TickerForecast> {
    tickers
        .iter()
        .map(|ticker| {
            let base = company_base(rows, ticker);
            if base.observed {
                info!(
                    "{}: E={:.1}, S={:.1}, G={:.1}",
                    base.ticker, base.scores.e, base.scores.s, base.scores.g
                );
            } else {
                warn!("{} not in dataset, using industry averages", base.ticker);
            }
            forecast_company(&base, as_of, rng)
        })
        .collect()
}
