use crate::{
    Result,
    http::Http,
    pager::Pager,
    types::{InstitutionalHolding, Page},
};
use chrono::NaiveDate;
use futures::stream::BoxStream;
use serde::Serialize;

const HOLDINGS_PATH: &str = "/api/v1/institutional/holdings";

/// Option type of a 13F position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PutCall {
    /// Put options.
    Put,
    /// Call options.
    Call,
}

/// Filters for listing institutional holdings. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionalParams {
    /// Issuer ticker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// Security CUSIP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cusip: Option<String>,
    /// Reporting manager CIK.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_cik: Option<u64>,
    /// Quarter end of the report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_period: Option<NaiveDate>,
    /// Minimum position value in dollars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<u64>,
    /// Minimum share count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_shares: Option<u64>,
    /// Option positions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_call: Option<PutCall>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl_cursor_params!(InstitutionalParams);

/// 13F institutional holdings.
#[derive(Debug, Clone)]
pub struct Institutional {
    http: Http,
}

impl Institutional {
    pub(crate) const fn new(http: Http) -> Self {
        Self { http }
    }

    /// List one page of holdings.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn list(&self, params: &InstitutionalParams) -> Result<Page<InstitutionalHolding>> {
        self.http.get(HOLDINGS_PATH, params).await
    }

    /// Page-level walk over every holding matching `params`.
    #[must_use]
    pub fn pager(
        &self,
        params: InstitutionalParams,
    ) -> Pager<InstitutionalHolding, InstitutionalParams> {
        Pager::new(self.http.clone(), HOLDINGS_PATH, params)
    }

    /// Stream every holding matching `params`.
    #[must_use]
    pub fn iter(
        &self,
        params: InstitutionalParams,
    ) -> BoxStream<'static, Result<InstitutionalHolding>> {
        self.pager(params).into_items()
    }
}
