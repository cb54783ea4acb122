use super::null_as_default;
use serde::{Deserialize, Serialize};

/// One page of a cursor-paginated list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records on this page, in response order.
    #[serde(
        default = "Vec::new",
        deserialize_with = "null_as_default",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub items: Vec<T>,
    /// Opaque token for the next page.
    #[serde(default)]
    pub next_cursor: Option<String>,
    /// Whether another page follows. This, not the cursor, ends pagination.
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
