//! Forecast core: score normalization, growth assumptions, quarterly projection.

pub mod generator;
pub mod normalize;
pub mod profiles;

pub use generator::{CompanyBase, company_base, confidence, forecast_company, generate_forecasts, round1};
pub use normalize::{normalize_row, normalize_rows, normalize_score};
pub use profiles::{DEFAULT_GROWTH, TARGET_TICKERS, growth_profile};
