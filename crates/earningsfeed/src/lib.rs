#![doc(issue_tracker_base_url = "https://github.com/earningsfeed/earningsfeed-rust/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Client for the [Earnings Feed](https://earningsfeed.com/) API.
//!
//! SEC filings, insider transactions (Forms 3/4/5), institutional holdings
//! (13F) and company profiles, decoded into typed records.
//!
//! # Usage
//!
//! ```rust,ignore
//! use earningsfeed::{Client, FilingsParams};
//! use futures::TryStreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::from_env()?;
//!
//!     // One page of 10-K and 10-Q filings
//!     let params = FilingsParams::default().forms(["10-K", "10-Q"]).ticker("AAPL");
//!     let page = client.filings().list(&params).await?;
//!
//!     // Every matching filing, following cursors as needed
//!     let all: Vec<_> = client.filings().iter(params).try_collect().await?;
//!
//!     // A single company
//!     let apple = client.companies().get(320193).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `EARNINGSFEED_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! EARNINGSFEED_API_KEY=your_api_key_here
//! ```
//!
//! `EARNINGSFEED_BASE_URL` overrides the API host.

/// The version of the earningsfeed crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod client;
mod config;
mod error;
mod http;
mod pager;
mod query;
mod resources;
mod types;

pub use client::Client;
pub use config::{API_KEY_ENV, BASE_URL_ENV, Config, DEFAULT_BASE_URL};
pub use error::Error;
pub use pager::{CursorParams, Pager};
pub use resources::*;
pub use types::*;

/// Result type for Earnings Feed operations.
pub type Result<T> = std::result::Result<T, Error>;
