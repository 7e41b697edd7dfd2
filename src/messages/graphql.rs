//! GraphQL error envelopes produced by the data-fetching layer.
//!
//! A response is meant to be either a *syntax-error response* (syntax error
//! set, no messages) or a *data-error response* (messages, no syntax
//! error). Nothing upstream enforces that, so deserialization is lenient and
//! [`GraphQLErrorResponse::is_ambiguous`] flags the mixed shape.

use serde::{Deserialize, Deserializer, Serialize};

/// One error entry inside a data-error response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQLMessage {
    #[serde(default)]
    pub status: u16,
    /// Missing or `null` text becomes the empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

impl GraphQLMessage {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// An error envelope returned by a GraphQL call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLErrorResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax_error: Option<String>,
    #[serde(default)]
    pub messages: Vec<GraphQLMessage>,
}

impl GraphQLErrorResponse {
    /// The syntax error text, if present and non-empty.
    pub fn syntax_error_text(&self) -> Option<&str> {
        self.syntax_error.as_deref().filter(|text| !text.is_empty())
    }

    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    /// True when the response carries both a syntax error and messages.
    pub fn is_ambiguous(&self) -> bool {
        self.syntax_error_text().is_some() && self.has_messages()
    }
}

/// Build a data-error response carrying the given message texts.
pub fn graphql_error<S: AsRef<str>>(messages: &[S]) -> GraphQLErrorResponse {
    GraphQLErrorResponse {
        id: "123".to_string(),
        status: 400,
        syntax_error: None,
        messages: messages
            .iter()
            .map(|message| GraphQLMessage::new(400, message.as_ref()))
            .collect(),
    }
}

/// Build a syntax-error response.
pub fn graphql_syntax_error(syntax_error: impl Into<String>) -> GraphQLErrorResponse {
    GraphQLErrorResponse {
        id: "abc".to_string(),
        status: 400,
        syntax_error: Some(syntax_error.into()),
        messages: Vec::new(),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
