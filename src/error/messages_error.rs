//! Error type for fallible message-store and logging operations.
//!
//! The normalizer never fails: malformed input degrades to the generic
//! message. These variants cover the operations that genuinely can.

use thiserror::Error;

/// Errors returned by the message store, the reported-error parser and the
/// tracing setup.
#[derive(Debug, Error)]
pub enum MessagesError {
    /// Navigation auto-clear needs a tokio runtime to drive its subscription.
    #[error("no tokio runtime is available to drive navigation auto-clear")]
    NoRuntime,

    /// A navigation subscription is already live on this store.
    #[error("navigation auto-clear is already active; call teardown() first")]
    AutoClearActive,

    /// A global tracing subscriber could not be installed.
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MessagesError {
    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            MessagesError::NoRuntime => "NO_RUNTIME",
            MessagesError::AutoClearActive => "AUTO_CLEAR_ACTIVE",
            MessagesError::Subscriber(_) => "SUBSCRIBER",
            MessagesError::InvalidJson(_) => "INVALID_JSON",
            MessagesError::Io(_) => "IO",
        }
    }
}
