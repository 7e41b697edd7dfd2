//! Replay-latest streams over `tokio::sync::watch`.

use futures::stream::{self, Stream};
use tokio::sync::watch;

/// Stream the receiver's current value, then every later value.
///
/// Values published faster than the consumer polls are coalesced: the
/// consumer always sees the latest one, never a stale one. The stream ends
/// once the sender is dropped.
pub fn replay_latest<T>(rx: watch::Receiver<T>) -> impl Stream<Item = T>
where
    T: Clone + Send + Sync + 'static,
{
    stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first {
            rx.changed().await.ok()?;
        }
        let value = rx.borrow_and_update().clone();
        Some((value, (rx, false)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_replays_current_value_first() {
        let (tx, rx) = watch::channel(1);
        let mut values = Box::pin(replay_latest(rx));

        assert_eq!(values.next().await, Some(1));

        tx.send_replace(2);
        assert_eq!(values.next().await, Some(2));
    }

    #[tokio::test]
    async fn test_coalesces_to_latest() {
        let (tx, rx) = watch::channel(0);
        let mut values = Box::pin(replay_latest(rx));
        assert_eq!(values.next().await, Some(0));

        tx.send_replace(1);
        tx.send_replace(2);
        assert_eq!(values.next().await, Some(2));
    }

    #[tokio::test]
    async fn test_ends_when_sender_dropped() {
        let (tx, rx) = watch::channel("last");
        let mut values = Box::pin(replay_latest(rx));
        drop(tx);

        assert_eq!(values.next().await, Some("last"));
        assert_eq!(values.next().await, None);
    }
}
