//! Command-line parsing.
//!
//! Every option has a default, so a bare `esg-forecast` reads
//! `sp500_esg_data.csv` and writes `esg_forecasts.json` in the working directory.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::ForecastConfig;
use crate::io::{DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "esg-forecast",
    version,
    about = "Project ESG scores four quarters forward and export them as JSON"
)]
pub struct Cli {
    /// ESG score CSV to read.
    #[arg(long, value_name = "CSV", env = "ESG_FORECAST_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Forecast JSON to write.
    #[arg(long, value_name = "JSON", env = "ESG_FORECAST_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Seed for the per-quarter perturbation. Unseeded runs are not reproducible.
    #[arg(long, env = "ESG_FORECAST_SEED")]
    pub seed: Option<u64>,

    /// Suppress the banner and summary (log output is still controlled by RUST_LOG).
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn into_config(self) -> ForecastConfig {
        ForecastConfig {
            input: self.input,
            output: self.output,
            seed: self.seed,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_working_directory_files() {
        let cli = Cli::try_parse_from(["esg-forecast"]).unwrap();
        let config = cli.into_config();
        assert_eq!(config.input, PathBuf::from("sp500_esg_data.csv"));
        assert_eq!(config.output, PathBuf::from("esg_forecasts.json"));
        assert!(!config.quiet);
    }

    #[test]
    fn explicit_flags() {
        let cli = Cli::try_parse_from([
            "esg-forecast",
            "--input",
            "data/esg.csv",
            "--output",
            "out.json",
            "--seed",
            "42",
            "-q",
        ])
        .unwrap();
        let config = cli.into_config();
        assert_eq!(config.input, PathBuf::from("data/esg.csv"));
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert_eq!(config.seed, Some(42));
        assert!(config.quiet);
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Cli::try_parse_from(["esg-forecast", "--seed", "abc"]).is_err());
    }
}
