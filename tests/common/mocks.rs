//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from `ignite::adapters::mock`
//! and provides additional test-specific helpers.

pub use ignite::adapters::mock::{ConsoleCall, MockRoute, RecordingConsole};
pub use ignite::traits::ConsoleMethod;

use std::time::Duration;

use ignite::messages::MessageList;
use tokio::sync::watch;

/// Upper bound for waiting on store publications.
#[allow(dead_code)]
pub const CHANGE_TIMEOUT: Duration = Duration::from_secs(2);

/// Wait for the next publication on `rx` and return it.
///
/// Panics if nothing is published within [`CHANGE_TIMEOUT`].
#[allow(dead_code)]
pub async fn next_change(rx: &mut watch::Receiver<MessageList>) -> MessageList {
    tokio::time::timeout(CHANGE_TIMEOUT, rx.changed())
        .await
        .expect("timed out waiting for a store change")
        .expect("store dropped");
    let latest = rx.borrow_and_update().clone();
    latest
}

/// Give spawned tasks a chance to run.
#[allow(dead_code)]
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Methods of the recorded calls, in order.
#[allow(dead_code)]
pub fn methods(calls: &[ConsoleCall]) -> Vec<ConsoleMethod> {
    calls.iter().map(|call| call.method).collect()
}
