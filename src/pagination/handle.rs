//! Dual-mode handle for one paginated listing call
//!
//! Every listing method on the client returns a [`Paginated`], which
//! carries the page-fetch capability and the optional item cap. The
//! handle is consumed by choosing a consumption mode, so each handle
//! is exactly one traversal: not restartable, and two handles from two
//! calls share no state.

use crate::error::Result;
use crate::pagination::stream::{ItemStream, PageFetcher};
use crate::pagination::subscribe::{self, Subscriber, Subscription};
use futures::TryStreamExt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// One paginated listing call, ready to be consumed in either mode
pub struct Paginated<T> {
    fetcher: Arc<dyn PageFetcher<Item = T>>,
    cap: Option<u64>,
}

impl<T: Send + 'static> Paginated<T> {
    pub(crate) fn new(fetcher: Arc<dyn PageFetcher<Item = T>>) -> Self {
        Self { fetcher, cap: None }
    }

    /// Cap the total number of items retrieved across all pages
    ///
    /// A cap of zero completes immediately without any fetch.
    #[must_use]
    pub fn max(mut self, cap: u64) -> Self {
        self.cap = Some(cap);
        self
    }

    /// Consume as a pull-mode stream
    ///
    /// Nothing is fetched until the stream is polled; dropping the
    /// stream cancels the traversal.
    pub fn stream(self) -> ItemStream<T> {
        ItemStream::new(self.fetcher, self.cap, CancellationToken::new())
    }

    /// Consume in push mode, forwarding every item to the subscriber
    pub fn subscribe<S: Subscriber<T>>(self, subscriber: S) -> Subscription {
        subscribe::subscribe(self.stream(), subscriber)
    }

    /// Drive the traversal to completion and collect the items
    pub async fn collect(self) -> Result<Vec<T>> {
        self.stream().try_collect().await
    }
}

impl<T> std::fmt::Debug for Paginated<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginated")
            .field("cap", &self.cap)
            .finish_non_exhaustive()
    }
}
