//! Fixed forecast universe and per-company growth assumptions.

use crate::domain::{GrowthProfile, SubScores};

/// Companies forecast on every run, in output order.
pub const TARGET_TICKERS: [&str; 10] = [
    "AAPL", "MSFT", "TSLA", "GOOGL", "AMZN", "META", "NVDA", "NFLX", "INTC", "AMD",
];

/// Growth used for any ticker without an explicit profile.
pub const DEFAULT_GROWTH: GrowthProfile = GrowthProfile::new(0.005, 0.005, 0.005);

/// Base scores for a target that is absent from the dataset.
pub const FALLBACK_SCORES: SubScores = SubScores { e: 70.0, s: 72.0, g: 75.0 };

const GROWTH_PROFILES: [(&str, GrowthProfile); 10] = [
    ("TSLA", GrowthProfile::new(0.008, 0.006, 0.005)),
    ("AAPL", GrowthProfile::new(0.006, 0.007, 0.006)),
    ("GOOGL", GrowthProfile::new(0.007, 0.006, 0.007)),
    ("MSFT", GrowthProfile::new(0.006, 0.008, 0.006)),
    ("NVDA", GrowthProfile::new(0.009, 0.005, 0.006)),
    ("META", GrowthProfile::new(0.005, 0.008, 0.005)),
    ("AMZN", GrowthProfile::new(0.007, 0.006, 0.005)),
    ("NFLX", GrowthProfile::new(0.006, 0.006, 0.006)),
    ("INTC", GrowthProfile::new(0.007, 0.005, 0.006)),
    ("AMD", GrowthProfile::new(0.008, 0.006, 0.005)),
];

/// Growth profile for `ticker`, or `DEFAULT_GROWTH`.
pub fn growth_profile(ticker: &str) -> GrowthProfile {
    GROWTH_PROFILES
        .iter()
        .find(|(t, _)| *t == ticker)
        .map(|(_, p)| *p)
        .unwrap_or(DEFAULT_GROWTH)
}
