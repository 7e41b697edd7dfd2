//! User-facing message reporting.
//!
//! # Modules
//!
//! - [`types`] - `Message`, `MessageKind` and the `Generic.Error` key
//! - [`graphql`] - GraphQL error envelopes
//! - [`reported`] - `ReportedError`, the failure values callers report
//! - [`normalizer`] - `ErrorNormalizer`, which turns failures into messages
//! - [`store`] - `MessageStore`, the observable message list
//! - [`navigation`] - Route change signals for navigation auto-clear
//! - [`replay`] - Replay-latest streams over watch channels

pub mod graphql;
pub mod navigation;
pub mod normalizer;
pub mod replay;
pub mod reported;
pub mod store;
pub mod types;

pub use graphql::{graphql_error, graphql_syntax_error, GraphQLErrorResponse, GraphQLMessage};
pub use navigation::{combine_route_args, param_map, NavigationEvent, ParamMap};
pub use normalizer::{Classification, Diagnostic, ErrorNormalizer, FetchErrorsExt};
pub use reported::ReportedError;
pub use store::MessageStore;
pub use types::{IntoMessages, Message, MessageIter, MessageKind, MessageList, GENERIC_ERROR_KEY};
