use crate::{
    Result,
    http::{Http, NO_QUERY},
    pager::Pager,
    types::{Company, CompanySearchResult, Page},
};
use futures::stream::BoxStream;
use serde::Serialize;

const COMPANIES_PATH: &str = "/api/v1/companies";
const SEARCH_PATH: &str = "/api/v1/companies/search";

/// Company search query and filters. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySearchParams {
    /// Free-text query matched against names and tickers.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub q: String,
    /// Exact ticker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// State code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// SIC code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sic_code: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Continuation token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl CompanySearchParams {
    /// Search for `q` with no other filters.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }
}

impl_cursor_params!(CompanySearchParams);

/// Company profiles and search.
#[derive(Debug, Clone)]
pub struct Companies {
    http: Http,
}

impl Companies {
    pub(crate) const fn new(http: Http) -> Self {
        Self { http }
    }

    /// Get a company profile by CIK.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) for an unknown CIK,
    /// or any other request error.
    pub async fn get(&self, cik: u64) -> Result<Company> {
        self.http.get(&format!("{COMPANIES_PATH}/{cik}"), NO_QUERY).await
    }

    /// Search companies, returning one page of hits.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn search(&self, params: &CompanySearchParams) -> Result<Page<CompanySearchResult>> {
        self.http.get(SEARCH_PATH, params).await
    }

    /// Page-level walk over every search hit.
    #[must_use]
    pub fn search_pager(
        &self,
        params: CompanySearchParams,
    ) -> Pager<CompanySearchResult, CompanySearchParams> {
        Pager::new(self.http.clone(), SEARCH_PATH, params)
    }

    /// Stream every search hit.
    #[must_use]
    pub fn search_iter(
        &self,
        params: CompanySearchParams,
    ) -> BoxStream<'static, Result<CompanySearchResult>> {
        self.search_pager(params).into_items()
    }
}
