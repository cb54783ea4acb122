use super::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company CIK.
    pub cik: u64,
    /// Registered name.
    pub name: String,
    /// Entity type (e.g. `Corporation`).
    pub entity_type: Option<String>,
    /// Filer category (e.g. `Large Accelerated Filer`).
    pub category: Option<String>,
    /// Business description.
    pub description: Option<String>,
    /// Listed tickers, in response order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tickers: Vec<Ticker>,
    /// Primary ticker symbol.
    pub primary_ticker: Option<String>,
    /// Standard Industrial Classification codes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sic_codes: Vec<SicCode>,
    /// Employer Identification Number.
    pub ein: Option<String>,
    /// Fiscal year end as `MMDD`.
    pub fiscal_year_end: Option<String>,
    /// State of incorporation code.
    pub state_of_incorporation: Option<String>,
    /// State of incorporation name.
    pub state_of_incorporation_description: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Corporate website.
    pub website: Option<String>,
    /// Investor relations website.
    pub investor_website: Option<String>,
    /// Business and mailing addresses.
    #[serde(default, deserialize_with = "null_as_default")]
    pub addresses: Vec<Address>,
    /// Logo URL.
    pub logo_url: Option<String>,
    /// Whether insider transactions exist for this issuer.
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_insider_transactions: bool,
    /// Whether this entity files as an insider.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_insider: bool,
    /// Last update of the profile.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Company {
    /// The ticker flagged as primary.
    #[must_use]
    pub fn primary(&self) -> Option<&Ticker> {
        self.tickers.iter().find(|t| t.is_primary)
    }
}

/// A listed ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Ticker symbol.
    pub symbol: String,
    /// Listing exchange.
    pub exchange: Option<String>,
    /// Whether this is the primary listing.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_primary: bool,
}

/// A Standard Industrial Classification code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SicCode {
    /// Four digit code.
    pub code: u32,
    /// Industry description.
    pub description: Option<String>,
}

/// A company address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// `business` or `mailing`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Street line 1.
    pub street1: Option<String>,
    /// Street line 2.
    pub street2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or country code.
    pub state_or_country: Option<String>,
    /// State or country name.
    pub state_or_country_description: Option<String>,
    /// Postal code.
    pub zip_code: Option<String>,
}

/// A company search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySearchResult {
    /// Company CIK.
    pub cik: u64,
    /// Registered name.
    pub name: String,
    /// Primary ticker.
    pub ticker: Option<String>,
    /// Listing exchange.
    pub exchange: Option<String>,
    /// Entity type.
    pub entity_type: Option<String>,
    /// Filer category.
    pub category: Option<String>,
    /// Primary SIC code.
    pub sic_code: Option<u32>,
    /// SIC description.
    pub sic_description: Option<String>,
    /// Logo URL.
    pub logo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company_decoding() {
        let company: Company = serde_json::from_value(json!({
            "cik": 320193,
            "name": "Apple Inc.",
            "entityType": "Corporation",
            "category": "Large Accelerated Filer",
            "tickers": [{"symbol": "AAPL", "exchange": "NASDAQ", "isPrimary": true}],
            "primaryTicker": "AAPL",
            "sicCodes": [{"code": 3571, "description": "Electronic Computers"}],
            "fiscalYearEnd": "0930",
            "addresses": [{
                "type": "business",
                "street1": "One Apple Park Way",
                "street2": null,
                "city": "Cupertino",
                "stateOrCountry": "CA",
                "stateOrCountryDescription": "California",
                "zipCode": "95014"
            }],
            "hasInsiderTransactions": true,
            "isInsider": false,
            "updatedAt": "2024-11-01T12:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(company.tickers.len(), 1);
        assert!(company.tickers[0].is_primary);
        assert_eq!(company.primary().map(|t| t.symbol.as_str()), Some("AAPL"));
        assert_eq!(company.sic_codes[0].code, 3571);
        assert_eq!(company.addresses[0].kind.as_deref(), Some("business"));
        assert!(company.addresses[0].street2.is_none());
        assert!(company.has_insider_transactions);
        assert!(company.website.is_none());
    }

    #[test]
    fn test_search_result_decoding() {
        let hit: CompanySearchResult = serde_json::from_value(json!({
            "cik": 320193,
            "name": "Apple Inc.",
            "ticker": "AAPL",
            "exchange": "NASDAQ",
            "sicCode": 3571,
            "logoUrl": null
        }))
        .unwrap();
        assert_eq!(hit.sic_code, Some(3571));
        assert!(hit.sic_description.is_none());
    }
}
