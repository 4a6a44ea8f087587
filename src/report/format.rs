use std::path::Path;

use crate::app::pipeline::RunOutput;
use crate::domain::TickerForecast;
use crate::forecast::generator::{HORIZON_QUARTERS, PERTURBATION};

const RULE_WIDTH: usize = 70;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn format_banner() -> String {
    format!("{}\nESG FORECASTING - 1 YEAR HORIZON\n{}", rule(), rule())
}

/// `(min, max)` confidence across every record, or `None` if there are none.
pub fn confidence_range(forecasts: &[TickerForecast]) -> Option<(u32, u32)> {
    let mut it = forecasts.iter().flat_map(|t| t.forecasts.iter().map(|f| f.confidence));
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c))))
}

/// Closing summary printed after the JSON has been written.
pub fn format_run_summary(run: &RunOutput, output: &Path) -> String {
    let mut out = String::new();

    out.push_str(&format!("Forecasts saved: {}\n", output.display()));
    out.push_str(&format!("Companies forecasted: {}\n", run.forecasts.len()));
    out.push_str(&format!(
        "Rows read: {} ({} skipped without ticker)\n",
        run.table.rows_read, run.table.rows_skipped
    ));
    out.push('\n');
    out.push_str(&rule());
    out.push_str("\nFORECAST SUMMARY\n");
    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format!(
        "Forecast Horizon: 1 Year ({HORIZON_QUARTERS} Quarters)\n"
    ));
    if let Some((lo, hi)) = confidence_range(&run.forecasts) {
        out.push_str(&format!("Confidence Range: {lo}-{hi}%\n"));
    }
    out.push_str("Model: Linear growth with fixed per-company rates\n");
    out.push_str(&format!("Variance: ±{PERTURBATION} points\n"));
    out.push_str(&rule());

    out
}
