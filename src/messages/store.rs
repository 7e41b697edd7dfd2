//! The message store.
//!
//! Holds the current [`MessageList`] in a `tokio::sync::watch` channel, so
//! every subscriber sees the latest list immediately and on every change.
//! Mutations replace the list wholesale and publish synchronously: once
//! [`MessageStore::report`] or [`MessageStore::clear`] returns, every
//! receiver observes the new list.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use futures::stream::{Stream, StreamExt};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::navigation::combine_route_args;
use super::replay::replay_latest;
use super::types::{IntoMessages, Message, MessageList};
use crate::error::{MessagesError, MessagesResult};
use crate::traits::RouteSource;

/// Reactive store of user-facing messages.
///
/// Cloning is cheap and every clone refers to the same store.
///
/// # Example
///
/// ```ignore
/// use ignite::messages::{Message, MessageStore};
///
/// let store = MessageStore::new();
/// store.report(Message::error("Foo"));
/// store.report(vec![Message::warning("Bar")]);
/// assert_eq!(store.snapshot().len(), 2);
///
/// store.clear();
/// assert!(!store.has_errors());
/// ```
#[derive(Clone)]
pub struct MessageStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    tx: watch::Sender<MessageList>,
    auto_clear: Mutex<Option<AutoClear>>,
}

/// A live navigation subscription.
struct AutoClear {
    /// Checked under lock before every clear; false once torn down.
    live: Arc<Mutex<bool>>,
    task: JoinHandle<()>,
}

impl AutoClear {
    fn cancel(self) {
        *self.live.lock().unwrap_or_else(PoisonError::into_inner) = false;
        self.task.abort();
    }
}

impl StoreInner {
    fn publish(&self, list: MessageList) {
        self.tx.send_replace(list);
    }

    fn clear(&self) {
        self.publish(Arc::from(Vec::new()));
    }
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        let slot = self.auto_clear.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(sub) = slot.take() {
            sub.task.abort();
        }
    }
}

impl MessageStore {
    /// An empty store.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(MessageList::from(Vec::new()));
        Self {
            inner: Arc::new(StoreInner {
                tx,
                auto_clear: Mutex::new(None),
            }),
        }
    }

    /// Append `messages` to the current list and publish it.
    ///
    /// Order is preserved and duplicates are kept. Reporting nothing still
    /// publishes (the same content, as a new snapshot).
    pub fn report(&self, messages: impl IntoMessages) {
        let additions = messages.into_messages();
        tracing::trace!(count = additions.len(), "Reporting messages");

        self.inner.tx.send_modify(move |list| {
            let mut next: Vec<Message> = Vec::with_capacity(list.len() + additions.len());
            next.extend(list.iter().cloned());
            next.extend(additions);
            *list = next.into();
        });
    }

    /// Replace the list with an empty one and publish it.
    pub fn clear(&self) {
        self.inner.clear();
    }

    /// The current list.
    pub fn snapshot(&self) -> MessageList {
        self.inner.tx.borrow().clone()
    }

    /// True iff the current list is non-empty.
    pub fn has_errors(&self) -> bool {
        !self.inner.tx.borrow().is_empty()
    }

    /// A receiver holding the current list and notified on every change.
    pub fn subscribe(&self) -> watch::Receiver<MessageList> {
        self.inner.tx.subscribe()
    }

    /// The current list, then every later publication.
    pub fn errors(&self) -> impl Stream<Item = MessageList> + Send + 'static {
        replay_latest(self.subscribe())
    }

    /// Whether there are messages, derived from [`errors`](Self::errors).
    pub fn has_errors_stream(&self) -> impl Stream<Item = bool> + Send + 'static {
        self.errors().map(|list| !list.is_empty())
    }

    /// Clear the store on every item of `signal` until [`teardown`].
    ///
    /// The subscription runs on the current tokio runtime. Pair every
    /// successful call with one [`teardown`].
    ///
    /// [`teardown`]: Self::teardown
    pub fn init_navigation_auto_clear<S>(&self, signal: S) -> MessagesResult<()>
    where
        S: Stream + Send + 'static,
        S::Item: Send,
    {
        let runtime = Handle::try_current().map_err(|_| MessagesError::NoRuntime)?;

        let mut slot = self
            .inner
            .auto_clear
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if slot.as_ref().is_some_and(|sub| !sub.task.is_finished()) {
            return Err(MessagesError::AutoClearActive);
        }

        let live = Arc::new(Mutex::new(true));
        let task = runtime.spawn(run_auto_clear(
            Arc::downgrade(&self.inner),
            Arc::clone(&live),
            signal,
        ));
        *slot = Some(AutoClear { live, task });

        tracing::debug!("Navigation auto-clear started");
        Ok(())
    }

    /// Clear the store whenever `route`'s params or query params change.
    pub fn init_route_auto_clear(&self, route: &impl RouteSource) -> MessagesResult<()> {
        self.init_navigation_auto_clear(combine_route_args(route.params(), route.query_params()))
    }

    /// Whether a navigation subscription is live.
    pub fn auto_clear_active(&self) -> bool {
        self.inner
            .auto_clear
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|sub| !sub.task.is_finished())
    }

    /// Cancel the navigation subscription.
    ///
    /// Once this returns, no navigation event can clear the store. Safe to
    /// call repeatedly and without a prior init.
    pub fn teardown(&self) {
        let sub = self
            .inner
            .auto_clear
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(sub) = sub {
            sub.cancel();
            tracing::debug!("Navigation auto-clear stopped");
        }
    }
}

async fn run_auto_clear<S>(store: Weak<StoreInner>, live: Arc<Mutex<bool>>, signal: S)
where
    S: Stream,
{
    futures::pin_mut!(signal);

    while signal.next().await.is_some() {
        if !clear_if_live(&store, &live) {
            break;
        }
        tracing::trace!("Navigation cleared messages");
    }
}

/// Clear the store unless the subscription was torn down or the store is
/// gone. Runs under the `live` lock so teardown cannot interleave.
fn clear_if_live(store: &Weak<StoreInner>, live: &Mutex<bool>) -> bool {
    let live = live.lock().unwrap_or_else(PoisonError::into_inner);
    if !*live {
        return false;
    }
    match store.upgrade() {
        Some(inner) => {
            inner.clear();
            true
        }
        None => false,
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MessageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageStore")
            .field("messages", &self.snapshot())
            .field("auto_clear_active", &self.auto_clear_active())
            .finish()
    }
}
