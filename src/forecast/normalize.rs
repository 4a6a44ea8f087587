//! Score normalization onto a common 0-100 scale.

use crate::domain::{NormalizedRow, ScoreRow, SubScores};

/// Score assumed when a cell is missing.
pub const MISSING_SCORE: f64 = 70.0;

/// Scores at or below this are treated as being on a 0-20 scale.
const SMALL_SCALE_MAX: f64 = 20.0;

/// Map a raw sub-score onto 0-100.
///
/// - missing -> 70
/// - `s <= 20` -> `s * 5` (0-20 scale)
/// - otherwise clamp to `[0, 100]`
pub fn normalize_score(score: Option<f64>) -> f64 {
    match score {
        None => MISSING_SCORE,
        Some(s) if s <= SMALL_SCALE_MAX => s * 5.0,
        Some(s) => s.clamp(0.0, 100.0),
    }
}

pub fn normalize_row(row: &ScoreRow) -> NormalizedRow {
    NormalizedRow {
        ticker: row.ticker.clone(),
        name: row.name.clone(),
        scores: SubScores {
            e: normalize_score(row.environmental),
            s: normalize_score(row.social),
            g: normalize_score(row.governance),
        },
    }
}

pub fn normalize_rows(rows: &[ScoreRow]) -> Vec<NormalizedRow> {
    rows.iter().map(normalize_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_scale_is_multiplied_by_five() {
        assert_eq!(normalize_score(Some(18.0)), 90.0);
        assert_eq!(normalize_score(Some(20.0)), 100.0);
        assert_eq!(normalize_score(Some(0.0)), 0.0);
        assert_eq!(normalize_score(Some(3.5)), 17.5);
    }

    #[test]
    fn hundred_scale_passes_through_and_clamps() {
        assert_eq!(normalize_score(Some(20.5)), 20.5);
        assert_eq!(normalize_score(Some(82.0)), 82.0);
        assert_eq!(normalize_score(Some(100.0)), 100.0);
        assert_eq!(normalize_score(Some(140.0)), 100.0);
        assert_eq!(normalize_score(Some(f64::INFINITY)), 100.0);
    }

    #[test]
    fn missing_defaults_to_seventy() {
        assert_eq!(normalize_score(None), 70.0);
    }

    #[test]
    fn property_holds_across_the_range() {
        for tenths in 0..=2000 {
            let s = tenths as f64 / 10.0;
            let n = normalize_score(Some(s));
            if s <= 20.0 {
                assert_eq!(n, s * 5.0);
            } else if s <= 100.0 {
                assert_eq!(n, s);
            } else {
                assert_eq!(n, 100.0);
            }
        }
    }

    #[test]
    fn rows_normalize_each_dimension_independently() {
        let row = ScoreRow {
            ticker: "TSLA".to_string(),
            name: None,
            environmental: Some(12.0),
            social: None,
            governance: Some(65.0),
            total: None,
        };
        let n = normalize_row(&row);
        assert_eq!(n.ticker, "TSLA");
        assert_eq!(n.scores, SubScores { e: 60.0, s: 70.0, g: 65.0 });
    }
}
