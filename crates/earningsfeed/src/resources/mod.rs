//! Resource clients, one per API area.

/// Implement [`CursorParams`](crate::CursorParams) for a params struct with a
/// `cursor: Option<String>` field.
macro_rules! impl_cursor_params {
    ($ty:ty) => {
        impl $crate::pager::CursorParams for $ty {
            fn set_cursor(&mut self, cursor: Option<String>) {
                self.cursor = cursor;
            }
        }
    };
}

mod companies;
mod filings;
mod insider;
mod institutional;

pub use companies::{Companies, CompanySearchParams};
pub use filings::{Filings, FilingsParams};
pub use insider::{Direction, Insider, InsiderParams};
pub use institutional::{Institutional, InstitutionalParams, PutCall};
