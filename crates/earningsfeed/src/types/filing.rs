use super::null_as_default;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An SEC filing.
///
/// List responses carry feed metadata (`status`, `sorted_at`, ...); single
/// filing fetches add `documents`, `roles` and `sec_relative_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filing {
    /// Accession number, `NNNNNNNNNN-YY-NNNNNN`.
    pub accession_number: String,
    /// Accession number without dashes.
    pub accession_no_dashes: Option<String>,
    /// Filer CIK.
    pub cik: u64,
    /// Filer name.
    pub company_name: Option<String>,
    /// Form type (e.g. `10-K`, `8-K`, `4`).
    pub form_type: String,
    /// When the filing was submitted.
    pub filed_at: DateTime<Utc>,
    /// When EDGAR accepted the filing.
    pub accept_ts: Option<DateTime<Utc>>,
    /// Whether the record is still provisional.
    #[serde(default, deserialize_with = "null_as_default")]
    pub provisional: bool,
    /// Feed day the filing belongs to.
    pub feed_day: Option<NaiveDate>,
    /// Total size in bytes.
    pub size_bytes: Option<u64>,
    /// Link to the filing on EDGAR.
    pub url: Option<String>,
    /// Human readable title.
    pub title: Option<String>,
    /// Feed status (e.g. `live`).
    pub status: Option<String>,
    /// Last update of the record.
    pub updated_at: Option<DateTime<Utc>>,
    /// Timestamp the feed sorts on.
    pub sorted_at: Option<DateTime<Utc>>,
    /// Primary ticker of the filer.
    pub primary_ticker: Option<String>,
    /// Exchange of the primary ticker.
    pub primary_exchange: Option<String>,
    /// Embedded company summary.
    pub company: Option<FilingCompany>,
    /// Filer logo.
    pub logo_url: Option<String>,
    /// Entity classification (e.g. `company`, `individual`).
    pub entity_class: Option<String>,
    /// EDGAR directory relative to the archive root.
    pub sec_relative_dir: Option<String>,
    /// Documents and exhibits, in sequence order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<FilingDocument>,
    /// Entities attached to the filing and their roles.
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<FilingRole>,
}

impl Filing {
    /// The primary document, if the filing lists one.
    #[must_use]
    pub fn primary_document(&self) -> Option<&FilingDocument> {
        self.documents.iter().find(|d| d.is_primary)
    }
}

/// Company summary embedded in a filing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingCompany {
    /// Company CIK.
    pub cik: Option<u64>,
    /// Company name.
    pub name: Option<String>,
    /// Primary ticker.
    pub primary_ticker: Option<String>,
    /// Logo URL.
    pub logo_url: Option<String>,
}

/// A document or exhibit within a filing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingDocument {
    /// Position within the filing.
    pub seq: u32,
    /// File name on EDGAR.
    pub filename: String,
    /// Document type (e.g. `10-K`, `EX-21.1`).
    pub doc_type: Option<String>,
    /// Description from the filing index.
    pub description: Option<String>,
    /// Whether this is the main document.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_primary: bool,
}

/// An entity's relationship to a filing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingRole {
    /// Entity CIK.
    pub cik: u64,
    /// Role (e.g. `filer`, `reporting`, `subject`).
    pub role: String,
    /// Entity name.
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_item_decoding() {
        let filing: Filing = serde_json::from_value(json!({
            "accessionNumber": "0000320193-24-000126",
            "accessionNoDashes": "000032019324000126",
            "cik": 320193,
            "companyName": "Apple Inc.",
            "formType": "10-K",
            "filedAt": "2024-10-30T16:05:00.000Z",
            "acceptTs": "2024-10-30T16:05:12.000Z",
            "provisional": false,
            "feedDay": "2024-10-30",
            "sizeBytes": 1234567,
            "url": "https://sec.gov/...",
            "title": "Form 10-K",
            "status": "live",
            "updatedAt": "2024-10-30T18:00:00.000Z",
            "primaryTicker": "AAPL",
            "primaryExchange": "Nasdaq",
            "company": null,
            "sortedAt": "2024-10-30T16:05:12.000Z",
            "logoUrl": null,
            "entityClass": "company"
        }))
        .unwrap();

        assert_eq!(filing.form_type, "10-K");
        assert_eq!(filing.company_name.as_deref(), Some("Apple Inc."));
        assert_eq!(filing.feed_day, NaiveDate::from_ymd_opt(2024, 10, 30));
        assert_eq!(filing.size_bytes, Some(1_234_567));
        assert!(filing.company.is_none());
        assert!(filing.logo_url.is_none());
        assert!(filing.documents.is_empty());
        assert!(filing.roles.is_empty());
        assert!(filing.primary_document().is_none());
    }

    #[test]
    fn test_detail_decoding() {
        let filing: Filing = serde_json::from_value(json!({
            "accessionNumber": "0000320193-24-000126",
            "cik": 320193,
            "formType": "10-K",
            "filedAt": "2024-10-30T16:05:00.000Z",
            "secRelativeDir": "edgar/data/320193/000032019324000126",
            "documents": [
                {"seq": 2, "filename": "ex21.htm", "docType": "EX-21.1", "description": null, "isPrimary": false},
                {"seq": 1, "filename": "aapl-20241030.htm", "docType": "10-K", "description": "Annual Report", "isPrimary": true}
            ],
            "roles": [{"cik": 320193, "role": "filer"}]
        }))
        .unwrap();

        assert_eq!(filing.documents.len(), 2);
        // Response order is kept.
        assert_eq!(filing.documents[0].seq, 2);
        let primary = filing.primary_document().unwrap();
        assert_eq!(primary.filename, "aapl-20241030.htm");
        assert_eq!(filing.roles[0].role, "filer");
        assert!(filing.roles[0].name.is_none());
        assert!(!filing.provisional);
    }

    #[test]
    fn test_null_collections() {
        let filing: Filing = serde_json::from_value(json!({
            "accessionNumber": "0000000001-24-000001",
            "cik": 1,
            "formType": "8-K",
            "filedAt": "2024-10-30T16:05:00Z",
            "documents": null,
            "roles": null,
            "provisional": null
        }))
        .unwrap();
        assert!(filing.documents.is_empty());
        assert!(filing.roles.is_empty());
    }
}
