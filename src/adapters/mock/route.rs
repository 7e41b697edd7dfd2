//! Mock activated route for testing.
//!
//! Holds route and query parameters in watch channels, so subscribers get
//! the current value immediately and every navigation after that.

use std::sync::Arc;

use futures::stream::{BoxStream, StreamExt};
use tokio::sync::watch;

use crate::messages::navigation::{param_map, ParamMap};
use crate::messages::replay::replay_latest;
use crate::traits::RouteSource;

/// Mock route with injectable navigation.
///
/// # Example
///
/// ```ignore
/// use ignite::adapters::mock::MockRoute;
///
/// let route = MockRoute::new();
/// route.navigate_params([("id", "42")]);
/// route.navigate_query([("tab", "billing")]);
/// assert_eq!(route.subscriber_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockRoute {
    params_tx: Arc<watch::Sender<ParamMap>>,
    query_tx: Arc<watch::Sender<ParamMap>>,
}

impl MockRoute {
    /// A route with empty params and query.
    pub fn new() -> Self {
        Self::with_initial(ParamMap::new(), ParamMap::new())
    }

    pub fn with_initial(params: ParamMap, query: ParamMap) -> Self {
        let (params_tx, _) = watch::channel(params);
        let (query_tx, _) = watch::channel(query);
        Self {
            params_tx: Arc::new(params_tx),
            query_tx: Arc::new(query_tx),
        }
    }

    /// Replace the route params.
    pub fn set_params(&self, params: ParamMap) {
        self.params_tx.send_replace(params);
    }

    /// Replace the query params.
    pub fn set_query(&self, query: ParamMap) {
        self.query_tx.send_replace(query);
    }

    pub fn navigate_params<I, K, V>(&self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.set_params(param_map(pairs));
    }

    pub fn navigate_query<I, K, V>(&self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.set_query(param_map(pairs));
    }

    /// Number of live subscribers across both streams.
    pub fn subscriber_count(&self) -> usize {
        self.params_tx.receiver_count() + self.query_tx.receiver_count()
    }
}

impl Default for MockRoute {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteSource for MockRoute {
    fn params(&self) -> BoxStream<'static, ParamMap> {
        replay_latest(self.params_tx.subscribe()).boxed()
    }

    fn query_params(&self) -> BoxStream<'static, ParamMap> {
        replay_latest(self.query_tx.subscribe()).boxed()
    }
}
