//! The forecast pipeline:
//! load CSV -> resolve columns -> normalize -> project -> write JSON.
//!
//! The clock and the random source are parameters so runs can be pinned in tests.

use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

use crate::domain::{ForecastConfig, TickerForecast};
use crate::error::AppError;
use crate::forecast::{TARGET_TICKERS, generate_forecasts, normalize_rows};
use crate::io::ingest::ScoreTable;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub table: ScoreTable,
    pub forecasts: Vec<TickerForecast>,
}

/// Execute every stage, writing `config.output` on success.
pub fn run_forecast<R: Rng + ?Sized>(
    config: &ForecastConfig,
    as_of: NaiveDate,
    rng: &mut R,
) -> Result<RunOutput, AppError> {
    info!("[1/5] Loading ESG dataset from {}", config.input.display());
    let table = crate::io::ingest::load_scores(&config.input)?;
    info!("Dataset loaded: {} companies", table.rows.len());
    info!("Columns: {:?}", table.headers);

    info!("[2/5] Detecting column structure");
    for (label, column) in table.columns.describe() {
        info!("{label}: {column}");
    }

    info!("[3/5] Normalizing scores to 0-100");
    let normalized = normalize_rows(&table.rows);

    info!(
        "[4/5] Generating forecasts ({} quarters) for {} companies",
        crate::forecast::generator::HORIZON_QUARTERS,
        TARGET_TICKERS.len()
    );
    let forecasts = generate_forecasts(&normalized, &TARGET_TICKERS, as_of, rng);

    info!("[5/5] Exporting forecasts to {}", config.output.display());
    crate::io::export::write_forecasts_json(&config.output, &forecasts)?;

    Ok(RunOutput { table, forecasts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::round1;
    use crate::io::export::read_forecasts_json;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config_in(dir: &std::path::Path) -> ForecastConfig {
        ForecastConfig {
            input: dir.join("sp500_esg_data.csv"),
            output: dir.join("esg_forecasts.json"),
            seed: Some(1),
            quiet: true,
        }
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn end_to_end_writes_ten_companies() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(
            &config.input,
            "Symbol,Full Name,environmentScore,socialScore,governanceScore\n\
             AAPL,Apple Inc.,82,78,90\n\
             TSLA,\"Tesla, Inc.\",18,,10\n",
        )
        .unwrap();

        let run = run_forecast(&config, as_of(), &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(run.table.rows.len(), 2);

        let written = read_forecasts_json(&config.output).unwrap();
        assert_eq!(written, run.forecasts);
        assert_eq!(written.len(), 10);

        let aapl = &written[0];
        assert_eq!(aapl.ticker, "AAPL");
        assert_eq!(aapl.company_name, "Apple Inc.");
        let q1 = &aapl.forecasts[0];
        assert!((q1.e - 82.0 * 1.006).abs() <= 0.55);
        assert!((q1.s - 78.0 * 1.007).abs() <= 0.55);
        assert!((q1.g - 90.0 * 1.006).abs() <= 0.55);
        assert_eq!(q1.confidence, 90);

        // TSLA: 18 -> 90, missing -> 70, 10 -> 50.
        let tsla = written.iter().find(|t| t.ticker == "TSLA").unwrap();
        assert_eq!(tsla.company_name, "Tesla, Inc.");
        let q1 = &tsla.forecasts[0];
        assert!((q1.e - 90.0 * 1.008).abs() <= 0.55);
        assert!((q1.s - 70.0 * 1.006).abs() <= 0.55);
        assert!((q1.g - 50.0 * 1.005).abs() <= 0.55);

        let msft = written.iter().find(|t| t.ticker == "MSFT").unwrap();
        assert_eq!(msft.company_name, "MSFT");

        for entry in &written {
            assert_eq!(entry.forecasts.len(), 4);
            for f in &entry.forecasts {
                assert_eq!(f.total, round1((f.e + f.s + f.g) / 3.0));
            }
        }
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let err = run_forecast(&config, as_of(), &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(!config.output.exists());
    }

    #[test]
    fn non_numeric_score_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(
            &config.input,
            "Symbol,Full Name,environmentScore,socialScore,governanceScore\nAAPL,Apple Inc.,abc,78,90\n",
        )
        .unwrap();

        let err = run_forecast(&config, as_of(), &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(!config.output.exists());
    }

    #[test]
    fn missing_columns_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.input, "Symbol,esg\nAAPL,80\n").unwrap();

        let err = run_forecast(&config, as_of(), &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(!config.output.exists());
    }
}
