//! Data types for Earnings Feed API responses.
//!
//! Every record decodes from the API's camelCase JSON. Keys that are absent or
//! `null` become `None`, an empty `Vec` or `false`; they never fail decoding.

mod company;
mod filing;
mod insider;
mod institutional;
mod page;

pub use company::{Address, Company, CompanySearchResult, SicCode, Ticker};
pub use filing::{Filing, FilingCompany, FilingDocument, FilingRole};
pub use insider::InsiderTransaction;
pub use institutional::InstitutionalHolding;
pub use page::Page;

use serde::{Deserialize, Deserializer};

/// Decode `null` the same way as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
