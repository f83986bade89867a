//! Push-mode exposure over the pull stream
//!
//! Subscribing spawns a task that drives the same `ItemStream` and
//! forwards every item to the subscriber's callbacks. Exactly one of
//! `on_error`/`on_complete` fires; after cancellation, neither does.

use crate::error::Error;
use crate::pagination::stream::ItemStream;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Callback surface for push-mode consumption
pub trait Subscriber<T>: Send + 'static {
    /// Called once per delivered item, in remote order
    fn on_item(&mut self, item: T);

    /// Called at most once when a page fetch fails; terminal
    fn on_error(&mut self, error: Error);

    /// Called at most once on normal exhaustion; terminal
    fn on_complete(&mut self);
}

/// Handle to a running push-mode subscription
///
/// Dropping the handle unsubscribes: the drive task stops before
/// issuing its next fetch and an in-flight fetch is abandoned. Call
/// [`Subscription::detach`] to let the traversal run to completion
/// unattended.
#[derive(Debug)]
pub struct Subscription {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
    detached: bool,
}

impl Subscription {
    /// Stop the subscription; returns promptly without waiting for
    /// any in-flight fetch
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the drive task has finished
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Let the traversal run to completion without this handle
    pub fn detach(mut self) {
        self.detached = true;
        self.handle = None;
    }

    /// Wait for the drive task to finish
    pub async fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
        self.detached = true;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if !self.detached {
            self.token.cancel();
        }
    }
}

/// Drive a stream on a spawned task, forwarding to the subscriber
pub(crate) fn subscribe<T, S>(mut stream: ItemStream<T>, mut subscriber: S) -> Subscription
where
    T: Send + 'static,
    S: Subscriber<T>,
{
    let token = stream.cancellation_token().clone();
    let task_token = token.clone();

    let handle = tokio::spawn(async move {
        while let Some(next) = stream.next().await {
            match next {
                Ok(item) => subscriber.on_item(item),
                Err(err) => {
                    subscriber.on_error(err);
                    return;
                }
            }
        }
        // A cancelled traversal ends silently; completion is only
        // signalled when the data actually ran out.
        if !task_token.is_cancelled() {
            subscriber.on_complete();
        }
    });

    Subscription {
        token,
        handle: Some(handle),
        detached: false,
    }
}
