//! The failure values handed to the normalizer.
//!
//! Callers report whatever their operation failed with. [`ReportedError`]
//! narrows that down to the shapes the normalizer tells apart; anything it
//! cannot recognize becomes [`ReportedError::Other`] and is shown to the user
//! as the generic message.

use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;

use super::graphql::GraphQLErrorResponse;
use crate::error::{MessagesError, MessagesResult};

/// Field that marks a failure as a GraphQL error batch.
const GRAPHQL_ERRORS_FIELD: &str = "graphQLErrors";

/// A failure value reported by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportedError {
    /// No error value at all (`null`).
    Absent,
    /// A plain string, shown to the user verbatim.
    Text(String),
    /// A GraphQL error batch. May be empty.
    GraphQl(Vec<GraphQLErrorResponse>),
    /// Anything else. The description only ever reaches the logs.
    Other { description: String },
}

impl ReportedError {
    pub fn other(description: impl Into<String>) -> Self {
        ReportedError::Other {
            description: description.into(),
        }
    }

    /// Wrap an arbitrary error. Its text is kept for diagnostics only.
    pub fn from_error(err: &dyn StdError) -> Self {
        Self::other(err.to_string())
    }

    /// Parse raw JSON text into a reported error.
    pub fn from_json_str(raw: &str) -> MessagesResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from(value))
    }

    /// The GraphQL batch, if this is one.
    pub fn graphql_errors(&self) -> Option<&[GraphQLErrorResponse]> {
        match self {
            ReportedError::GraphQl(responses) => Some(responses),
            _ => None,
        }
    }
}

impl fmt::Display for ReportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportedError::Absent => write!(f, "null"),
            ReportedError::Text(text) => write!(f, "{}", text),
            ReportedError::GraphQl(responses) => {
                write!(f, "GraphQL error batch ({} responses)", responses.len())
            }
            ReportedError::Other { description } => write!(f, "{}", description),
        }
    }
}

impl From<&str> for ReportedError {
    fn from(text: &str) -> Self {
        ReportedError::Text(text.to_string())
    }
}

impl From<String> for ReportedError {
    fn from(text: String) -> Self {
        ReportedError::Text(text)
    }
}

impl From<Vec<GraphQLErrorResponse>> for ReportedError {
    fn from(responses: Vec<GraphQLErrorResponse>) -> Self {
        ReportedError::GraphQl(responses)
    }
}

impl From<Option<ReportedError>> for ReportedError {
    fn from(error: Option<ReportedError>) -> Self {
        error.unwrap_or(ReportedError::Absent)
    }
}

/// Classify a dynamically shaped value.
///
/// `null` is absent and strings are text. Objects with an array
/// `graphQLErrors` field are GraphQL batches. Every other value, including a
/// `graphQLErrors` field that does not parse, is `Other`.
impl From<Value> for ReportedError {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ReportedError::Absent,
            Value::String(text) => ReportedError::Text(text),
            Value::Object(mut map) => match map.remove(GRAPHQL_ERRORS_FIELD) {
                Some(errors @ Value::Array(_)) => {
                    match serde_json::from_value::<Vec<GraphQLErrorResponse>>(errors) {
                        Ok(responses) => ReportedError::GraphQl(responses),
                        Err(err) => ReportedError::other(format!(
                            "malformed {}: {}",
                            GRAPHQL_ERRORS_FIELD, err
                        )),
                    }
                }
                Some(other) => {
                    map.insert(GRAPHQL_ERRORS_FIELD.to_string(), other);
                    ReportedError::other(Value::Object(map).to_string())
                }
                None => ReportedError::other(Value::Object(map).to_string()),
            },
            other => ReportedError::other(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ReportedError {
    fn from(err: std::io::Error) -> Self {
        Self::from_error(&err)
    }
}

impl From<serde_json::Error> for ReportedError {
    fn from(err: serde_json::Error) -> Self {
        Self::from_error(&err)
    }
}

impl From<MessagesError> for ReportedError {
    fn from(err: MessagesError) -> Self {
        Self::from_error(&err)
    }
}
