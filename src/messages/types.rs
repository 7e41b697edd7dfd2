//! User-facing message types.
//!
//! A [`Message`] is the only thing ever shown to an end user. The rendering
//! layer reads `{"type": .., "message": ..}` records, so that is the wire
//! shape used here as well.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Sentinel key shown when a failure has no user-presentable text.
pub const GENERIC_ERROR_KEY: &str = "Generic.Error";

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Info,
    Warning,
}

impl MessageKind {
    /// Lowercase label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Error => "error",
            MessageKind::Info => "info",
            MessageKind::Warning => "warning",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user-facing message.
///
/// Immutable once built; equality is structural over kind and text. Text is
/// kept verbatim, including empty or whitespace-only strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    kind: MessageKind,
    #[serde(rename = "message")]
    text: String,
}

impl Message {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Warning, text)
    }

    /// The `Generic.Error` fallback shown for unrecognized failures.
    pub fn generic_error() -> Self {
        Self::error(GENERIC_ERROR_KEY)
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.text)
    }
}

/// Immutable snapshot of the current messages, in insertion order.
///
/// Snapshots are replaced wholesale, never mutated, so a holder can never
/// observe a partial update.
pub type MessageList = Arc<[Message]>;

/// Anything that can be appended to a [`MessageList`] in one report.
///
/// Implemented for a single [`Message`], vectors, arrays, slices and
/// options so callers can pass whichever they have. Wrap any other
/// iterator in [`MessageIter`].
pub trait IntoMessages {
    fn into_messages(self) -> Vec<Message>;
}

impl IntoMessages for Message {
    fn into_messages(self) -> Vec<Message> {
        vec![self]
    }
}

impl IntoMessages for Vec<Message> {
    fn into_messages(self) -> Vec<Message> {
        self
    }
}

impl<const N: usize> IntoMessages for [Message; N] {
    fn into_messages(self) -> Vec<Message> {
        self.into()
    }
}

impl IntoMessages for &[Message] {
    fn into_messages(self) -> Vec<Message> {
        self.to_vec()
    }
}

impl IntoMessages for Option<Message> {
    fn into_messages(self) -> Vec<Message> {
        self.into_iter().collect()
    }
}

impl IntoMessages for std::vec::IntoIter<Message> {
    fn into_messages(self) -> Vec<Message> {
        self.collect()
    }
}

/// Adapts any iterator of messages for [`IntoMessages`].
///
/// ```ignore
/// store.report(MessageIter(texts.iter().map(Message::error)));
/// ```
#[derive(Debug, Clone)]
pub struct MessageIter<I>(pub I);

impl<I> IntoMessages for MessageIter<I>
where
    I: IntoIterator<Item = Message>,
{
    fn into_messages(self) -> Vec<Message> {
        self.0.into_iter().collect()
    }
}
