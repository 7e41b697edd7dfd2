//! Result type alias for message-store operations.

use super::messages_error::MessagesError;

/// Type alias for Results using [`MessagesError`].
///
/// # Example
///
/// ```ignore
/// use ignite::error::MessagesResult;
///
/// fn wire(store: &MessageStore, route: &impl RouteSource) -> MessagesResult<()> {
///     store.init_route_auto_clear(route)
/// }
/// ```
pub type MessagesResult<T> = Result<T, MessagesError>;
