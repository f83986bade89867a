//! Pagination types
//!
//! Defines the page shapes returned by the remote and the cursor that
//! tracks progress through them.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Pagination metadata from a Discogs list response
///
/// Totals are tolerated as absent; some endpoints do not report them
/// reliably, and the cursor never trusts them over observed page sizes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageInfo {
    /// Page number of this batch (1-based)
    pub page: u32,
    /// Total number of pages, as reported by the remote
    #[serde(default)]
    pub pages: Option<u32>,
    /// Page size the remote used for this listing
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Total number of items, as reported by the remote
    #[serde(default)]
    pub items: Option<u64>,
}

/// One fetched batch of items from a paginated listing
///
/// Immutable once produced by the fetcher; ordering is exactly the
/// order the remote listed the items.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The items of this page, in remote order
    pub items: Vec<T>,
    /// Pagination metadata for this page
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Create a page from items and metadata
    pub fn new(items: Vec<T>, info: PageInfo) -> Self {
        Self { items, info }
    }

    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A deserialized list response that can be unpacked into a [`Page`]
///
/// Discogs wraps every listing in an envelope holding a `pagination`
/// member plus an endpoint-specific list member (`versions`,
/// `releases`, `results`). Each envelope type implements this trait so
/// one generic fetcher covers all listing endpoints.
pub trait PagedResponse: DeserializeOwned + Send + 'static {
    /// The item type carried by the list member
    type Item: Send + 'static;

    /// Unpack the envelope into a page
    fn into_page(self) -> Page<Self::Item>;
}

/// Result of advancing the cursor over a fetched page
#[derive(Debug)]
pub struct Advance<T> {
    /// The items to deliver, truncated to the remaining capacity
    pub items: Vec<T>,
    /// Whether another page fetch is needed
    pub more: bool,
}

/// Tracks progress through a paginated listing
///
/// Created once per stream instance and mutated only by the drive
/// loop, once per page. Terminal exactly when the data ran out, the
/// cap was reached, a fetch failed, or the consumer cancelled.
#[derive(Debug)]
pub struct PaginationCursor {
    next_page: u32,
    emitted: u64,
    cap: Option<u64>,
    expected_page_size: Option<u64>,
    terminal: bool,
}

impl PaginationCursor {
    /// Create a cursor starting at page 1
    ///
    /// A cap of zero is terminal from the start: no fetch will occur.
    pub fn new(cap: Option<u64>) -> Self {
        Self {
            next_page: 1,
            emitted: 0,
            cap,
            expected_page_size: None,
            terminal: cap == Some(0),
        }
    }

    /// The page number the next fetch should request
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Items delivered so far across all pages
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Whether the traversal has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Force the cursor terminal (fetch failure or cancellation)
    pub fn mark_terminal(&mut self) {
        self.terminal = true;
    }

    /// Items still allowed under the cap; `None` when unbounded
    fn remaining(&self) -> Option<u64> {
        self.cap.map(|cap| cap.saturating_sub(self.emitted))
    }

    /// Advance over a fetched page
    ///
    /// Returns the cap-truncated items to deliver and whether a
    /// further fetch is needed. A page shorter than a full page is
    /// authoritative end-of-data: observed counts win over whatever
    /// total the remote reported. The reported page count is only
    /// honored as a stop signal, never as a reason to keep fetching
    /// past observed exhaustion.
    pub fn advance<T>(&mut self, page: Page<T>) -> Advance<T> {
        let fetched = page.items.len() as u64;

        // The full-page size is learned from metadata when present,
        // otherwise from the first page observed.
        let expected = *self
            .expected_page_size
            .get_or_insert_with(|| page.info.per_page.map_or(fetched, u64::from));

        let short_page = fetched < expected;
        let reported_last = match (page.info.pages, page.info.page) {
            (Some(pages), current) => current >= pages,
            (None, _) => false,
        };

        let mut items = page.items;
        if let Some(remaining) = self.remaining() {
            if fetched > remaining {
                items.truncate(remaining as usize);
            }
        }
        self.emitted += items.len() as u64;
        self.next_page += 1;

        let cap_reached = self.remaining() == Some(0);
        let more = !cap_reached && !short_page && !reported_last && fetched > 0;
        self.terminal = !more;

        Advance { items, more }
    }
}
