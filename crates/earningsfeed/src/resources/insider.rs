use crate::{
    Result,
    http::Http,
    pager::Pager,
    query::comma_joined,
    types::{InsiderTransaction, Page},
};
use chrono::NaiveDate;
use futures::stream::BoxStream;
use serde::Serialize;

const TRANSACTIONS_PATH: &str = "/api/v1/insider/transactions";

/// Side of an insider trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Acquisitions.
    Buy,
    /// Dispositions.
    Sell,
}

/// Filters for listing insider transactions. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsiderParams {
    /// Issuer ticker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// Issuer CIK.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cik: Option<u64>,
    /// Reporting person CIK.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_cik: Option<u64>,
    /// Buys or sells only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Transaction codes, sent as one comma-joined value.
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub codes: Vec<String>,
    /// Minimum transaction value in dollars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    /// Maximum transaction value in dollars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    /// Earliest filing date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Latest filing date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl_cursor_params!(InsiderParams);

/// Insider transactions from Forms 3, 4 and 5.
#[derive(Debug, Clone)]
pub struct Insider {
    http: Http,
}

impl Insider {
    pub(crate) const fn new(http: Http) -> Self {
        Self { http }
    }

    /// List one page of insider transactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn list(&self, params: &InsiderParams) -> Result<Page<InsiderTransaction>> {
        self.http.get(TRANSACTIONS_PATH, params).await
    }

    /// Page-level walk over every transaction matching `params`.
    #[must_use]
    pub fn pager(&self, params: InsiderParams) -> Pager<InsiderTransaction, InsiderParams> {
        Pager::new(self.http.clone(), TRANSACTIONS_PATH, params)
    }

    /// Stream every transaction matching `params`.
    #[must_use]
    pub fn iter(&self, params: InsiderParams) -> BoxStream<'static, Result<InsiderTransaction>> {
        self.pager(params).into_items()
    }
}
