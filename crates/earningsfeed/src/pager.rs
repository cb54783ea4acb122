//! Cursor pagination.
//!
//! A [`Pager`] walks a list endpoint page by page. It starts without a cursor,
//! sends the previous page's `nextCursor` on every following request and stops
//! as soon as a page reports `hasMore: false`. Nothing else ends it: a missing
//! cursor on a page that still claims `hasMore` is sent as "no cursor".

use crate::{Result, http::Http, types::Page};
use futures::stream::{self, BoxStream, StreamExt};
use serde::{Serialize, de::DeserializeOwned};
use std::{collections::VecDeque, fmt, marker::PhantomData};
use tracing::{debug, warn};

/// List parameters that carry a pagination cursor.
pub trait CursorParams: Serialize + Clone {
    /// Replace the cursor sent with the next request.
    fn set_cursor(&mut self, cursor: Option<String>);
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    HasNext(Option<String>),
    Done,
}

impl State {
    fn after<T>(page: &Page<T>) -> Self {
        if page.has_more {
            if page.next_cursor.is_none() {
                warn!("page has more results but no cursor");
            }
            Self::HasNext(page.next_cursor.clone())
        } else {
            Self::Done
        }
    }
}

/// Lazy, single-pass walk over a paginated list endpoint.
///
/// Each call to [`next_page`](Self::next_page) issues at most one request.
/// Once finished (or after an error) the pager makes no further requests.
pub struct Pager<T, P> {
    http: Http,
    path: &'static str,
    params: P,
    state: State,
    _item: PhantomData<fn() -> T>,
}

impl<T, P: fmt::Debug> fmt::Debug for Pager<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("path", &self.path)
            .field("params", &self.params)
            .field("state", &self.state)
            .finish()
    }
}

impl<T, P> Pager<T, P>
where
    T: DeserializeOwned + Send + 'static,
    P: CursorParams + Send + Sync + 'static,
{
    pub(crate) fn new(http: Http, path: &'static str, mut params: P) -> Self {
        params.set_cursor(None);
        Self {
            http,
            path,
            params,
            state: State::HasNext(None),
            _item: PhantomData,
        }
    }

    /// Whether the last page has been seen.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// Fetch the next page, or `None` once pagination has finished.
    ///
    /// # Errors
    ///
    /// Returns the request error. The pager is finished afterwards.
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>> {
        let State::HasNext(cursor) = &self.state else {
            return Ok(None);
        };

        let mut params = self.params.clone();
        params.set_cursor(cursor.clone());
        debug!(path = self.path, cursor = ?cursor, "fetching page");

        match self.http.get::<Page<T>, _>(self.path, &params).await {
            Ok(page) => {
                self.state = State::after(&page);
                Ok(Some(page))
            }
            Err(err) => {
                self.state = State::Done;
                Err(err)
            }
        }
    }

    /// Flatten the remaining pages into a stream of records, in order.
    ///
    /// A request error is yielded once and ends the stream.
    pub fn into_items(self) -> BoxStream<'static, Result<T>> {
        stream::try_unfold(
            (self, VecDeque::<T>::new()),
            |(mut pager, mut buffer)| async move {
                loop {
                    if let Some(item) = buffer.pop_front() {
                        return Ok(Some((item, (pager, buffer))));
                    }
                    match pager.next_page().await {
                        Ok(Some(page)) => buffer.extend(page.items),
                        Ok(None) => return Ok(None),
                        Err(err) => return Err(err),
                    }
                }
            },
        )
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(has_more: bool, cursor: Option<&str>) -> Page<u32> {
        Page {
            items: vec![1],
            next_cursor: cursor.map(str::to_owned),
            has_more,
        }
    }

    #[test]
    fn test_has_more_follows_cursor() {
        assert_eq!(
            State::after(&page(true, Some("page2"))),
            State::HasNext(Some("page2".into()))
        );
    }

    #[test]
    fn test_has_more_false_is_terminal() {
        assert_eq!(State::after(&page(false, None)), State::Done);
        // A stray cursor does not keep the pager going.
        assert_eq!(State::after(&page(false, Some("ignored"))), State::Done);
    }

    #[test]
    fn test_has_more_without_cursor_continues() {
        assert_eq!(State::after(&page(true, None)), State::HasNext(None));
    }
}
