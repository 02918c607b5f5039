//! Cursor pagination
//!
//! List endpoints answer with `{"data": [...], "meta": {"next_id": ..}}`.
//! `next_id` is opaque: it is only ever sent back verbatim as `from_id`.

use std::marker::PhantomData;

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{Error, Result};
use super::http::{Params, Requester};

/// Query parameter carrying the cursor of the page to fetch
pub const FROM_ID: &str = "from_id";

/// Pagination metadata as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub next_id: Option<String>,
    #[serde(default)]
    pub next_page: Option<String>,
}

/// Where a page sits in its sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// Last page
    Done,
    /// More pages; the token is the next `from_id`
    Continue(String),
}

impl Cursor {
    fn from_next_id(next_id: Option<&str>) -> Self {
        match next_id {
            Some(id) if !id.is_empty() => Cursor::Continue(id.to_string()),
            _ => Cursor::Done,
        }
    }
}

#[derive(Deserialize)]
struct RawPage<T> {
    data: Vec<T>,
    #[serde(default)]
    meta: Option<PageMeta>,
}

/// One page of a list response
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
    pub cursor: Cursor,
}

impl<T: DeserializeOwned> Page<T> {
    pub(crate) fn from_response(response: Value) -> Result<Self> {
        let raw: RawPage<T> = serde_json::from_value(response)?;
        let meta = raw.meta.unwrap_or_default();
        let cursor = Cursor::from_next_id(meta.next_id.as_deref());
        Ok(Self {
            items: raw.data,
            meta,
            cursor,
        })
    }
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        matches!(self.cursor, Cursor::Continue(_))
    }

    pub fn next_id(&self) -> Option<&str> {
        match &self.cursor {
            Cursor::Continue(id) => Some(id),
            Cursor::Done => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Start,
    Next(String),
    Finished,
}

/// Forward-only sequence of pages for one list query.
///
/// Each [`next_page`](Paginator::next_page) performs exactly one request.
/// A failed fetch ends the sequence; [`restart`](Paginator::restart) goes
/// back to the first page.
pub struct Paginator<'a, T> {
    requester: &'a Requester,
    path: String,
    query: Params,
    state: State,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Paginator<'a, T> {
    pub(crate) fn new(requester: &'a Requester, path: &str, query: Params) -> Self {
        Self {
            requester,
            path: path.to_string(),
            query,
            state: State::Start,
            _marker: PhantomData,
        }
    }

    /// Fetch the next page, or `None` once the last page has been returned
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>> {
        let query = match &self.state {
            State::Finished => return Ok(None),
            State::Start => self.query.clone(),
            State::Next(cursor) => {
                let mut query = self.query.clone();
                query.insert(FROM_ID.to_string(), Value::String(cursor.clone()));
                query
            }
        };

        match self.requester.list::<T>(&self.path, Some(query)).await {
            Ok(page) => {
                self.state = match &page.cursor {
                    Cursor::Continue(next) => State::Next(next.clone()),
                    Cursor::Done => State::Finished,
                };
                Ok(Some(page))
            }
            Err(e) => {
                tracing::debug!("Pagination of {} stopped: {}", self.path, e);
                self.state = State::Finished;
                Err(e)
            }
        }
    }

    /// Rewind to the first page; the original query is replayed
    pub fn restart(&mut self) {
        self.state = State::Start;
    }

    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    /// Fetch all remaining pages (auto-paginate)
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        while let Some(page) = self.next_page().await? {
            all_items.extend(page.items);
        }
        Ok(all_items)
    }

    /// Items of all remaining pages as a stream; pages are fetched on demand
    pub fn into_stream(self) -> BoxStream<'a, Result<T>>
    where
        T: Send + 'a,
    {
        stream::try_unfold(self, |mut pager| async move {
            let page = pager.next_page().await?;
            Ok::<_, Error>(page.map(|page| (page.items, pager)))
        })
        .map_ok(|items| stream::iter(items.into_iter().map(Ok)))
        .try_flatten()
        .boxed()
    }
}
