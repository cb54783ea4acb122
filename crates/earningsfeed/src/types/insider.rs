use super::null_as_default;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single insider transaction reported on Form 3, 4 or 5.
///
/// Share counts and prices are decimal strings exactly as reported
/// (e.g. `"10000.0000"`), so no precision is lost in decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsiderTransaction {
    /// Accession number of the source filing.
    pub accession_number: String,
    /// When the source filing was submitted.
    pub filed_at: Option<DateTime<Utc>>,
    /// Form type (`3`, `4`, `5`, ...).
    pub form_type: Option<String>,
    /// Reporting person CIK.
    pub person_cik: Option<u64>,
    /// Reporting person name.
    pub person_name: Option<String>,
    /// Issuer CIK.
    pub company_cik: Option<u64>,
    /// Issuer name.
    pub company_name: Option<String>,
    /// Issuer ticker.
    pub ticker: Option<String>,
    /// Person is a director.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_director: bool,
    /// Person is an officer.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_officer: bool,
    /// Person owns ten percent or more.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_ten_percent_owner: bool,
    /// Some other relationship.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_other: bool,
    /// Officer title, when `is_officer`.
    pub officer_title: Option<String>,
    /// Title of the security traded.
    pub security_title: Option<String>,
    /// Derivative (Table II) rather than non-derivative (Table I).
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_derivative: bool,
    /// Trade date.
    pub transaction_date: Option<NaiveDate>,
    /// SEC transaction code (`P` purchase, `S` sale, `A` award, ...).
    pub transaction_code: Option<String>,
    /// Whether an equity swap was involved.
    #[serde(default, deserialize_with = "null_as_default")]
    pub equity_swap_involved: bool,
    /// Shares traded.
    pub shares: Option<String>,
    /// Price per share.
    pub price_per_share: Option<String>,
    /// `A` acquired or `D` disposed.
    pub acquired_disposed: Option<String>,
    /// Shares owned after the transaction.
    pub shares_after: Option<String>,
    /// `D` direct or `I` indirect ownership.
    pub direct_indirect: Option<String>,
    /// Nature of indirect ownership.
    pub ownership_nature: Option<String>,
    /// Conversion or exercise price of a derivative.
    pub conversion_or_exercise_price: Option<String>,
    /// Derivative exercise date.
    pub exercise_date: Option<NaiveDate>,
    /// Derivative expiration date.
    pub expiration_date: Option<NaiveDate>,
    /// Underlying security of a derivative.
    pub underlying_security_title: Option<String>,
    /// Underlying shares of a derivative.
    pub underlying_shares: Option<String>,
    /// Shares times price, in dollars.
    pub transaction_value: Option<f64>,
}

impl InsiderTransaction {
    /// Whether the shares were acquired.
    #[must_use]
    pub fn is_acquisition(&self) -> bool {
        self.acquired_disposed.as_deref() == Some("A")
    }

    /// Whether the shares were disposed of.
    #[must_use]
    pub fn is_disposition(&self) -> bool {
        self.acquired_disposed.as_deref() == Some("D")
    }
}
