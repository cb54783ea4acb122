use crate::{
    Error, Result,
    http::{Http, NO_QUERY, segment},
    pager::Pager,
    query::comma_joined,
    types::{Filing, Page},
};
use chrono::NaiveDate;
use futures::stream::BoxStream;
use serde::Serialize;

const FILINGS_PATH: &str = "/api/v1/filings";

/// Filters for listing filings. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingsParams {
    /// Form types, sent as one comma-joined value.
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub forms: Vec<String>,
    /// Ticker symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// Filer CIK.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cik: Option<u64>,
    /// Feed status (e.g. `live`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Earliest filing date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Latest filing date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Free-text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl FilingsParams {
    /// Restrict to the given form types.
    #[must_use]
    pub fn forms<I, S>(mut self, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forms = forms.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to a ticker.
    #[must_use]
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Set the page size.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl_cursor_params!(FilingsParams);

/// SEC filings.
#[derive(Debug, Clone)]
pub struct Filings {
    http: Http,
}

impl Filings {
    pub(crate) const fn new(http: Http) -> Self {
        Self { http }
    }

    /// List one page of filings.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn list(&self, params: &FilingsParams) -> Result<Page<Filing>> {
        self.http.get(FILINGS_PATH, params).await
    }

    /// Get a single filing, including its documents and roles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a blank accession number without
    /// sending a request, [`Error::NotFound`] for an unknown one, or any other
    /// request error.
    pub async fn get(&self, accession_number: &str) -> Result<Filing> {
        if accession_number.trim().is_empty() {
            return Err(Error::Validation {
                message: "accession number must not be empty".into(),
            });
        }
        let path = format!("{FILINGS_PATH}/{}", segment(accession_number));
        self.http.get(&path, NO_QUERY).await
    }

    /// Page-level walk over every filing matching `params`.
    #[must_use]
    pub fn pager(&self, params: FilingsParams) -> Pager<Filing, FilingsParams> {
        Pager::new(self.http.clone(), FILINGS_PATH, params)
    }

    /// Stream every filing matching `params`, following cursors lazily.
    #[must_use]
    pub fn iter(&self, params: FilingsParams) -> BoxStream<'static, Result<Filing>> {
        self.pager(params).into_items()
    }
}
