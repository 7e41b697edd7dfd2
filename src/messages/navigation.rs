//! Navigation signal: route and query parameter changes.
//!
//! The store only cares that a navigation *happened*. The parameter maps
//! are carried along for consumers that want them.

use std::collections::BTreeMap;

use futures::future;
use futures::stream::{self, Stream, StreamExt};

/// Route or query parameters.
pub type ParamMap = BTreeMap<String, String>;

/// One combined navigation event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationEvent {
    pub params: ParamMap,
    pub query: ParamMap,
}

impl NavigationEvent {
    pub fn new(params: ParamMap, query: ParamMap) -> Self {
        Self { params, query }
    }
}

/// Build a [`ParamMap`] from key/value pairs.
pub fn param_map<I, K, V>(pairs: I) -> ParamMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

enum RouteArg {
    Params(ParamMap),
    Query(ParamMap),
}

/// Combine route and query parameter streams, latest-wins.
///
/// Nothing is emitted until both inputs have produced a value. After that,
/// every emission of either input yields an event carrying the latest value
/// of both. The stream ends when both inputs have ended.
pub fn combine_route_args<P, Q>(params: P, query: Q) -> impl Stream<Item = NavigationEvent>
where
    P: Stream<Item = ParamMap>,
    Q: Stream<Item = ParamMap>,
{
    let merged = stream::select(params.map(RouteArg::Params), query.map(RouteArg::Query));

    merged
        .scan(
            (None::<ParamMap>, None::<ParamMap>),
            |(latest_params, latest_query), arg| {
                match arg {
                    RouteArg::Params(p) => *latest_params = Some(p),
                    RouteArg::Query(q) => *latest_query = Some(q),
                }
                let event = match (latest_params.as_ref(), latest_query.as_ref()) {
                    (Some(p), Some(q)) => Some(NavigationEvent::new(p.clone(), q.clone())),
                    _ => None,
                };
                future::ready(Some(event))
            },
        )
        .filter_map(future::ready)
}
