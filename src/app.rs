//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - installs logging
//! - seeds the random source and pins the clock
//! - runs the forecast pipeline
//! - prints the banner and summary

use chrono::Local;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::cli::Cli;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `esg-forecast` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Cli::parse().into_config();
    crate::logging::init();

    if !config.quiet {
        println!("{}", crate::report::format_banner());
    }

    let mut rng = match config.seed {
        Some(seed) => {
            debug!(seed, "seeding perturbation source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let as_of = Local::now().date_naive();

    let run = pipeline::run_forecast(&config, as_of, &mut rng)?;

    if !config.quiet {
        println!("{}", crate::report::format_run_summary(&run, &config.output));
    }

    Ok(())
}
