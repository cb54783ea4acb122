#![allow(dead_code)]

use earningsfeed::{Client, Config};
use httpmock::MockServer;
use serde_json::{Value, json};

pub const API_KEY: &str = "test_api_key";

pub fn client(server: &MockServer) -> Client {
    Client::with_config(Config::new(API_KEY).with_base_url(server.base_url()))
        .expect("valid test client")
}

/// A filing as it appears in list responses.
pub fn filing_json(n: u64, form_type: &str) -> Value {
    json!({
        "accessionNumber": format!("{n:010}-24-{n:06}"),
        "accessionNoDashes": format!("{n:010}24{n:06}"),
        "cik": n,
        "companyName": format!("Company {n}"),
        "formType": form_type,
        "filedAt": "2024-10-30T16:05:00.000Z",
        "acceptTs": "2024-10-30T16:05:12.000Z",
        "provisional": false,
        "feedDay": "2024-10-30",
        "sizeBytes": n * 100,
        "url": format!("https://sec.gov/{n}"),
        "title": format!("Filing {n}"),
        "status": "live",
        "updatedAt": "2024-10-30T18:00:00.000Z",
        "primaryTicker": format!("C{n}"),
        "primaryExchange": "NYSE",
        "company": null,
        "sortedAt": "2024-10-30T16:05:12.000Z",
        "logoUrl": null,
        "entityClass": "company"
    })
}

pub fn page_json(items: Vec<Value>, next_cursor: Option<&str>, has_more: bool) -> Value {
    json!({
        "items": items,
        "nextCursor": next_cursor,
        "hasMore": has_more
    })
}
