//! Pull-mode stream over a paginated listing
//!
//! `ItemStream` owns the drive loop shared by both exposure modes:
//! check cancellation, fetch the next page, advance the cursor, buffer
//! the deliverable items. Fetches are strictly sequential and at most
//! one page is buffered, which makes the ordering guarantee trivial.

use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::types::{Page, PagedResponse, PaginationCursor};
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::{FutureExt, Stream};
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio_util::sync::CancellationToken;

/// Page size requested from the remote (Discogs allows up to 100)
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Capability to fetch one page of a listing
///
/// Owned by the transport layer; the stream core only ever sees pages
/// through this seam, which is what the unit tests fake.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// The item type of the listing
    type Item: Send + 'static;

    /// Fetch the given 1-based page
    async fn fetch_page(&self, page: u32) -> Result<Page<Self::Item>>;
}

/// Generic JSON page fetcher over the HTTP layer
///
/// One instance per listing call: endpoint path plus the fixed query
/// parameters of that call (search criteria, sort). Covers every
/// paginated Discogs endpoint via the envelope's [`PagedResponse`]
/// impl.
pub struct JsonPageFetcher<R> {
    http: HttpClient,
    path: String,
    query: Vec<(String, String)>,
    per_page: u32,
    _kind: PhantomData<fn() -> R>,
}

impl<R: PagedResponse> JsonPageFetcher<R> {
    /// Create a fetcher for an endpoint path and its fixed parameters
    pub fn new(http: HttpClient, path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            http,
            path: path.into(),
            query,
            per_page: DEFAULT_PER_PAGE,
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<R: PagedResponse> PageFetcher for JsonPageFetcher<R> {
    type Item = R::Item;

    async fn fetch_page(&self, page: u32) -> Result<Page<Self::Item>> {
        let mut query = self.query.clone();
        query.push(("page".to_string(), page.to_string()));
        query.push(("per_page".to_string(), self.per_page.to_string()));

        let envelope: R = self.http.get_json(&self.path, &query).await?;
        Ok(envelope.into_page())
    }
}

/// Outcome of an awaited fetch; `None` means the token fired first
/// and the in-flight request was abandoned.
type FetchOutcome<T> = Option<Result<Page<T>>>;

enum Phase<T> {
    Idle,
    Fetching(BoxFuture<'static, FetchOutcome<T>>),
    Terminal,
}

/// Lazy pull-mode stream of listing items
///
/// Yields `Ok(item)` in strict remote order, then either ends or
/// yields exactly one `Err` carrying the failed page fetch. Fused:
/// once terminal, every further poll returns `None` and no page is
/// ever refetched. Dropping the stream (or cancelling its token)
/// prevents any further fetch from being issued.
pub struct ItemStream<T> {
    fetcher: Arc<dyn PageFetcher<Item = T>>,
    cursor: PaginationCursor,
    buffer: VecDeque<T>,
    phase: Phase<T>,
    token: CancellationToken,
}

impl<T: Send + 'static> ItemStream<T> {
    pub(crate) fn new(
        fetcher: Arc<dyn PageFetcher<Item = T>>,
        cap: Option<u64>,
        token: CancellationToken,
    ) -> Self {
        Self {
            fetcher,
            cursor: PaginationCursor::new(cap),
            buffer: VecDeque::new(),
            phase: Phase::Idle,
            token,
        }
    }

    /// The cancellation token governing this stream
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }

    /// Items delivered so far
    pub fn emitted(&self) -> u64 {
        self.cursor.emitted()
    }

    fn begin_fetch(&mut self) {
        let page = self.cursor.next_page();
        let fetcher = Arc::clone(&self.fetcher);
        let token = self.token.clone();
        let fut = async move {
            tokio::select! {
                biased;
                () = token.cancelled() => None,
                result = fetcher.fetch_page(page) => Some(result),
            }
        }
        .boxed();
        self.phase = Phase::Fetching(fut);
    }
}

// No field is structurally pinned: `poll_next` only ever takes `&mut`
// access and the in-flight future is already boxed.
impl<T> Unpin for ItemStream<T> {}

impl<T: Send + 'static> Stream for ItemStream<T> {
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            if let Some(item) = this.buffer.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            match &mut this.phase {
                Phase::Terminal => return Poll::Ready(None),
                Phase::Idle => {
                    // Cancellation is checked before every fetch.
                    if this.cursor.is_terminal() || this.token.is_cancelled() {
                        this.phase = Phase::Terminal;
                        return Poll::Ready(None);
                    }
                    this.begin_fetch();
                }
                Phase::Fetching(fut) => match fut.poll_unpin(cx) {
                    Poll::Pending => return Poll::Pending,
                    Poll::Ready(None) => {
                        this.cursor.mark_terminal();
                        this.phase = Phase::Terminal;
                        return Poll::Ready(None);
                    }
                    Poll::Ready(Some(Ok(page))) => {
                        let advance = this.cursor.advance(page);
                        this.buffer.extend(advance.items);
                        this.phase = Phase::Idle;
                    }
                    Poll::Ready(Some(Err(err))) => {
                        this.cursor.mark_terminal();
                        this.phase = Phase::Terminal;
                        return Poll::Ready(Some(Err(err)));
                    }
                },
            }
        }
    }
}

impl<T> Drop for ItemStream<T> {
    fn drop(&mut self) {
        // Disposing the pull handle is a cancellation.
        self.token.cancel();
    }
}
