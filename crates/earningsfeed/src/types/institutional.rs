use super::null_as_default;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A position reported by an institutional manager on Form 13F.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionalHolding {
    /// 9-character CUSIP of the security.
    pub cusip: String,
    /// Issuer name as reported.
    pub issuer_name: Option<String>,
    /// Class of the security (e.g. `COM`).
    pub class_title: Option<String>,
    /// Issuer CIK, when resolved.
    pub company_cik: Option<u64>,
    /// Issuer ticker, when resolved.
    pub ticker: Option<String>,
    /// Market value in dollars.
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: u64,
    /// Number of shares or principal amount.
    #[serde(default, deserialize_with = "null_as_default")]
    pub shares: u64,
    /// `SH` shares or `PRN` principal.
    pub shares_type: Option<String>,
    /// `Put` or `Call` for option positions.
    pub put_call: Option<String>,
    /// `SOLE`, `DFND` or `OTR`.
    pub investment_discretion: Option<String>,
    /// Other manager sequence numbers.
    pub other_manager: Option<String>,
    /// Shares with sole voting authority.
    #[serde(default, deserialize_with = "null_as_default")]
    pub voting_sole: u64,
    /// Shares with shared voting authority.
    #[serde(default, deserialize_with = "null_as_default")]
    pub voting_shared: u64,
    /// Shares with no voting authority.
    #[serde(default, deserialize_with = "null_as_default")]
    pub voting_none: u64,
    /// Reporting manager CIK.
    pub manager_cik: Option<u64>,
    /// Reporting manager name.
    pub manager_name: Option<String>,
    /// Quarter end the report covers.
    pub report_period_date: Option<NaiveDate>,
    /// When the 13F was filed.
    pub filed_at: Option<DateTime<Utc>>,
    /// Accession number of the 13F.
    pub accession_number: Option<String>,
}

impl InstitutionalHolding {
    /// Total shares across all voting authority buckets, saturating at `u64::MAX`.
    #[must_use]
    pub const fn voting_total(&self) -> u64 {
        self.voting_sole
            .saturating_add(self.voting_shared)
            .saturating_add(self.voting_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_holding_decoding() {
        let holding: InstitutionalHolding = serde_json::from_value(json!({
            "cusip": "037833100",
            "issuerName": "APPLE INC",
            "classTitle": "COM",
            "companyCik": 320193,
            "ticker": "AAPL",
            "value": 69900000000u64,
            "shares": 400000000,
            "sharesType": "SH",
            "putCall": null,
            "investmentDiscretion": "SOLE",
            "otherManager": null,
            "votingSole": 400000000,
            "votingShared": 0,
            "votingNone": 0,
            "managerCik": 1067983,
            "managerName": "Berkshire Hathaway",
            "reportPeriodDate": "2024-09-30",
            "filedAt": "2024-11-14T12:00:00.000Z",
            "accessionNumber": "0001067983-24-000123"
        }))
        .unwrap();

        assert_eq!(holding.issuer_name.as_deref(), Some("APPLE INC"));
        assert_eq!(holding.manager_name.as_deref(), Some("Berkshire Hathaway"));
        assert_eq!(holding.shares, 400_000_000);
        assert_eq!(holding.value, 69_900_000_000);
        assert_eq!(holding.voting_total(), 400_000_000);
        assert_eq!(
            holding.report_period_date,
            NaiveDate::from_ymd_opt(2024, 9, 30)
        );
        assert!(holding.put_call.is_none());
    }

    #[test]
    fn test_voting_total_saturates() {
        let holding: InstitutionalHolding = serde_json::from_value(json!({
            "cusip": "037833100",
            "votingSole": u64::MAX,
            "votingShared": 1,
            "votingNone": 5
        }))
        .unwrap();
        assert_eq!(holding.voting_total(), u64::MAX);
    }

    #[test]
    fn test_null_counts() {
        let holding: InstitutionalHolding = serde_json::from_value(json!({
            "cusip": "037833100",
            "value": null,
            "votingShared": null
        }))
        .unwrap();
        assert_eq!(holding.value, 0);
        assert_eq!(holding.voting_shared, 0);
    }
}
