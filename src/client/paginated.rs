//! Paginated stream for lazy iteration over API results.
//!
//! Amplify list endpoints page with `limit`/`offset` query parameters and
//! wrap each page's items in a named envelope key. [`PaginatedStream`]
//! walks such an endpoint one page at a time:
//!
//! - the first request uses `offset=0`;
//! - a page's items are yielded in order, then `offset` advances by the
//!   number of items the page actually contained;
//! - the first empty page (or a page without the envelope key) ends the
//!   stream.
//!
//! The stream trusts the backend to eventually return an empty page. An
//! endpoint that keeps returning items keeps the stream going.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::{Stream, TryStreamExt};
use serde::{de::DeserializeOwned, Serialize};

use super::http::envelope_items;
use super::ClientInner;
use crate::Result;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type FetchPage<T> = Box<dyn Fn(u32) -> BoxFuture<'static, Result<Vec<T>>> + Send + Sync>;

/// A stream that lazily fetches pages from a paginated API endpoint.
///
/// This stream yields individual items from each page, automatically
/// fetching the next page when the current one is exhausted. Each call to
/// a `*_stream` method builds a fresh stream starting at offset 0.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use amplify_rs::{api::PromotedLinksQuery, CampaignId};
///
/// # async fn example(client: amplify_rs::AmplifyClient) -> amplify_rs::Result<()> {
/// let campaign = CampaignId::new("00f4b02153ee75f3c9dc4fc128ab0419ab");
///
/// let mut stream = client
///     .promoted_links()
///     .for_campaign_stream(&campaign, PromotedLinksQuery::default());
///
/// while let Some(result) = stream.next().await {
///     let link = result?;
///     println!("{:?}", link.get_str("url"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch a page by offset.
    fetch_page: FetchPage<T>,
    /// Remaining items of the current page.
    current_items: std::vec::IntoIter<T>,
    /// Offset of the next page to fetch, None once exhausted.
    next_offset: Option<u32>,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<Vec<T>>>>,
}

impl<T> PaginatedStream<T>
where
    T: Send + 'static,
{
    /// Create a new paginated stream from a page fetcher.
    ///
    /// The fetcher receives the offset to request and returns that page's
    /// items.
    pub fn new<F>(fetch_page: F) -> Self
    where
        F: Fn(u32) -> BoxFuture<'static, Result<Vec<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: Vec::new().into_iter(),
            next_offset: Some(0),
            pending_fetch: None,
        }
    }

    /// Drain the stream into a vector, stopping at the first error.
    pub async fn collect_all(self) -> Result<Vec<T>> {
        self.try_collect().await
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.next() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(items)) => {
                        this.pending_fetch = None;

                        if items.is_empty() {
                            this.next_offset = None;
                            return Poll::Ready(None);
                        }

                        let fetched = u32::try_from(items.len()).unwrap_or(u32::MAX);
                        this.next_offset = this
                            .next_offset
                            .map(|offset| offset.saturating_add(fetched));
                        this.current_items = items.into_iter();
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_offset = None; // Stop on error
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => {
                        return Poll::Pending;
                    }
                }
            }

            if let Some(offset) = this.next_offset {
                this.pending_fetch = Some((this.fetch_page)(offset));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

impl<T> std::fmt::Debug for PaginatedStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedStream")
            .field("buffered", &self.current_items.len())
            .field("next_offset", &self.next_offset)
            .field("in_flight", &self.pending_fetch.is_some())
            .finish()
    }
}

/// Builder for paginated streams over an envelope key.
pub(crate) struct PaginatedStreamBuilder<T> {
    inner: Arc<ClientInner>,
    path: String,
    envelope_key: &'static str,
    limit: u32,
    _marker: std::marker::PhantomData<T>,
}

impl<T: DeserializeOwned + Send + 'static> PaginatedStreamBuilder<T> {
    /// Create a new builder using the client's configured page size.
    pub(crate) fn new(
        inner: Arc<ClientInner>,
        path: impl Into<String>,
        envelope_key: &'static str,
    ) -> Self {
        let limit = inner.config.page_size;
        Self {
            inner,
            path: path.into(),
            envelope_key,
            limit,
            _marker: std::marker::PhantomData,
        }
    }

    /// Build the stream with additional query parameters sent on every page.
    pub(crate) fn build_with_query<Q>(self, query: Option<Q>) -> PaginatedStream<T>
    where
        Q: Serialize + Clone + Send + Sync + 'static,
    {
        let inner = self.inner;
        let path = self.path;
        let envelope_key = self.envelope_key;
        let limit = self.limit;

        PaginatedStream::new(move |offset: u32| {
            let inner = inner.clone();
            let path = path.clone();
            let query = query.clone();

            Box::pin(async move {
                #[derive(Serialize)]
                struct PaginationQuery<Q> {
                    limit: u32,
                    offset: u32,
                    #[serde(flatten)]
                    extra: Option<Q>,
                }

                let pagination_query = PaginationQuery {
                    limit,
                    offset,
                    extra: query,
                };

                let body = inner.get_with_query(&path, &pagination_query).await?;
                let items = envelope_items(body, envelope_key)?.unwrap_or_default();

                tracing::debug!(path = %path, offset, count = items.len(), "fetched page");

                Ok::<_, crate::Error>(items)
            })
        })
    }
}
