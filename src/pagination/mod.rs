//! Pagination-to-stream core
//!
//! Turns the page-at-a-time Discogs listing endpoints into a single
//! lazy sequence of typed items.
//!
//! # Overview
//!
//! - [`PaginationCursor`] tracks page position, the item cap, and the
//!   terminal condition.
//! - [`ItemStream`] drives fetch → advance → deliver, one page at a
//!   time, and is the pull-mode exposure.
//! - [`Subscriber`]/[`Subscription`] re-expose the same drive loop in
//!   push mode on a spawned task.
//! - [`Paginated`] is the per-call handle from which the caller picks
//!   a mode; one handle, one traversal.
//!
//! Fetches are strictly sequential, items arrive in remote order, a
//! failed fetch terminates the stream with its error after whatever
//! was already delivered, and cancellation is checked before every
//! fetch.

mod handle;
mod stream;
mod subscribe;
mod types;

pub use handle::Paginated;
pub use stream::{ItemStream, JsonPageFetcher, PageFetcher, DEFAULT_PER_PAGE};
pub use subscribe::{Subscriber, Subscription};
pub use types::{Advance, Page, PageInfo, PagedResponse, PaginationCursor};
