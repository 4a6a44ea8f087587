//! Header probing: map logical fields onto whatever column names the dataset uses.
//!
//! ESG exports disagree on naming (`environmentScore`, `env_score`,
//! `Environmental Score`, ...). Each logical field has an ordered alias list and
//! the first alias present in the header wins. Matching is exact after trimming.

use crate::error::AppError;

pub const TICKER_ALIASES: &[&str] = &["Symbol", "ticker", "Ticker", "symbol"];
pub const NAME_ALIASES: &[&str] = &["Full Name", "Company Name", "company_name", "name", "Name"];
pub const ENVIRONMENTAL_ALIASES: &[&str] = &[
    "environmentScore",
    "environmental_score",
    "env_score",
    "Environmental Score",
];
pub const SOCIAL_ALIASES: &[&str] = &["socialScore", "social_score", "soc_score", "Social Score"];
pub const GOVERNANCE_ALIASES: &[&str] = &[
    "governanceScore",
    "governance_score",
    "gov_score",
    "Governance Score",
];
pub const TOTAL_ALIASES: &[&str] = &["totalEsg", "total_esg_score", "esg_score", "Total ESG Score"];

/// A header column that matched one of the aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub index: usize,
}

/// Columns resolved for a dataset. `name` and `total` are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub ticker: Column,
    pub name: Option<Column>,
    pub environmental: Column,
    pub social: Column,
    pub governance: Column,
    pub total: Option<Column>,
}

impl ResolvedColumns {
    /// `(label, column name or "None")` pairs for the detection report.
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        fn show(c: Option<&Column>) -> String {
            c.map(|c| c.name.clone()).unwrap_or_else(|| "None".to_string())
        }
        vec![
            ("Ticker", self.ticker.name.clone()),
            ("Company", show(self.name.as_ref())),
            ("Environmental", self.environmental.name.clone()),
            ("Social", self.social.name.clone()),
            ("Governance", self.governance.name.clone()),
            ("Total ESG", show(self.total.as_ref())),
        ]
    }
}

/// Return the first alias that appears in `headers`, or `None`.
pub fn find_column(headers: &[String], aliases: &[&str]) -> Option<Column> {
    aliases.iter().find_map(|alias| {
        headers
            .iter()
            .position(|h| h == alias)
            .map(|index| Column {
                name: (*alias).to_string(),
                index,
            })
    })
}

/// Resolve every logical field, failing if any required one is absent.
///
/// All missing required fields are reported together.
pub fn resolve_columns(headers: &[String]) -> Result<ResolvedColumns, AppError> {
    let ticker = find_column(headers, TICKER_ALIASES);
    let environmental = find_column(headers, ENVIRONMENTAL_ALIASES);
    let social = find_column(headers, SOCIAL_ALIASES);
    let governance = find_column(headers, GOVERNANCE_ALIASES);

    let (Some(ticker), Some(environmental), Some(social), Some(governance)) =
        (ticker.clone(), environmental.clone(), social.clone(), governance.clone())
    else {
        let missing: Vec<&str> = [
            ("ticker", ticker.is_none()),
            ("environmental", environmental.is_none()),
            ("social", social.is_none()),
            ("governance", governance.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();
        return Err(AppError::columns_missing(&missing));
    };

    Ok(ResolvedColumns {
        ticker,
        name: find_column(headers, NAME_ALIASES),
        environmental,
        social,
        governance,
        total: find_column(headers, TOTAL_ALIASES),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_alias_in_list_order_wins() {
        // `ticker` precedes `Symbol` in the header, but `Symbol` is earlier in the alias list.
        let h = headers(&["ticker", "Symbol"]);
        let col = find_column(&h, TICKER_ALIASES).unwrap();
        assert_eq!(col.name, "Symbol");
        assert_eq!(col.index, 1);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let h = headers(&["SYMBOL"]);
        assert!(find_column(&h, TICKER_ALIASES).is_none());
    }

    #[test]
    fn resolves_yahoo_style_headers() {
        let h = headers(&[
            "Symbol",
            "Full Name",
            "environmentScore",
            "socialScore",
            "governanceScore",
            "totalEsg",
        ]);
        let cols = resolve_columns(&h).unwrap();
        assert_eq!(cols.ticker.index, 0);
        assert_eq!(cols.name.as_ref().map(|c| c.index), Some(1));
        assert_eq!(cols.environmental.name, "environmentScore");
        assert_eq!(cols.social.index, 3);
        assert_eq!(cols.governance.index, 4);
        assert_eq!(cols.total.map(|c| c.index), Some(5));
    }

    #[test]
    fn name_and_total_are_optional() {
        let h = headers(&["ticker", "env_score", "soc_score", "gov_score"]);
        let cols = resolve_columns(&h).unwrap();
        assert!(cols.name.is_none());
        assert!(cols.total.is_none());

        let report = cols.describe();
        assert_eq!(report[1], ("Company", "None".to_string()));
        assert_eq!(report[5], ("Total ESG", "None".to_string()));
    }

    #[test]
    fn missing_required_columns_are_all_reported() {
        let h = headers(&["Symbol", "environmentScore"]);
        let err = resolve_columns(&h).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.message().contains("required columns: social, governance\n"));
    }
}
