//! Route source trait abstraction.
//!
//! The router that owns the current route and query parameters lives in the
//! host application. The message store only needs to know *when* they
//! change, so the seam is two parameter streams.

use futures::stream::BoxStream;

use crate::messages::navigation::ParamMap;

/// Trait for the host router's activated route.
///
/// Both streams should replay their current value to a new subscriber, then
/// yield every later change.
///
/// # Example
///
/// ```ignore
/// use ignite::adapters::mock::MockRoute;
/// use ignite::messages::MessageStore;
///
/// let route = MockRoute::new();
/// let store = MessageStore::new();
/// store.init_route_auto_clear(&route)?;
///
/// // Any navigation now clears the store
/// route.navigate_query([("page", "2")]);
/// ```
pub trait RouteSource {
    /// Route parameters, e.g. `:id` segments.
    fn params(&self) -> BoxStream<'static, ParamMap>;

    /// Query string parameters.
    fn query_params(&self) -> BoxStream<'static, ParamMap>;
}
