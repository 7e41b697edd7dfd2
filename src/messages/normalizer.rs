//! Error normalization.
//!
//! Turns whatever a failed operation produced into user-facing messages,
//! and routes technical detail (GraphQL syntax errors, raw error text) to
//! the logger instead of the user.
//!
//! ## Classification
//!
//! | Input | User sees | Logged |
//! |-------|-----------|--------|
//! | `null` | `Generic.Error` | unhandled error |
//! | GraphQL batch with messages | every message, in order | the messages |
//! | GraphQL batch without messages | `Generic.Error` | `Syntax error n: ...` per syntax error |
//! | string | the string | unhandled error |
//! | anything else | `Generic.Error` | unhandled error |
//!
//! Syntax errors in a batch that also carries messages are not logged.

use std::fmt;
use std::future::IntoFuture;

use futures::stream::{self, Stream, StreamExt};

use super::graphql::GraphQLErrorResponse;
use super::reported::ReportedError;
use super::store::MessageStore;
use super::types::Message;
use crate::logging::{LogLevel, Logger};

/// Namespace of the normalizer's logger.
pub const LOG_NAMESPACE: &str = "MESSAGES";

/// A log line produced while classifying an error. Never shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: LogLevel,
    pub text: String,
    /// Extra context logged after the text.
    pub detail: Option<String>,
}

impl Diagnostic {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Error,
            text: text.into(),
            detail: None,
        }
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Warn,
            text: text.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Outcome of [`ErrorNormalizer::classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub user_messages: Vec<Message>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Reports failures to a [`MessageStore`].
///
/// # Example
///
/// ```ignore
/// use ignite::logging::Logger;
/// use ignite::messages::{ErrorNormalizer, MessageStore};
///
/// let store = MessageStore::new();
/// let normalizer = ErrorNormalizer::new(store.clone(), &Logger::default());
///
/// // Clears old messages, then reports the failure if there is one
/// normalizer.handle_errors(save_profile()).await;
///
/// // Keeps a data stream alive for downstream consumers
/// let rows = normalizer.handle_fetch_errors(fetch_rows());
/// ```
#[derive(Clone)]
pub struct ErrorNormalizer {
    store: MessageStore,
    log: Logger,
}

impl ErrorNormalizer {
    /// A normalizer reporting into `store` and logging under `MESSAGES`.
    pub fn new(store: MessageStore, logger: &Logger) -> Self {
        Self {
            store,
            log: logger.named(LOG_NAMESPACE),
        }
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Classify `error` without side effects.
    pub fn classify(error: &ReportedError) -> Classification {
        match error {
            ReportedError::GraphQl(responses) => classify_graphql(responses),
            ReportedError::Text(text) => Classification {
                user_messages: vec![Message::error(text.clone())],
                diagnostics: vec![unhandled(error)],
            },
            ReportedError::Absent | ReportedError::Other { .. } => Classification {
                user_messages: vec![Message::generic_error()],
                diagnostics: vec![unhandled(error)],
            },
        }
    }

    /// Report `error` to the store and log its diagnostics.
    pub fn report_errors(&self, error: impl Into<ReportedError>) {
        let error = error.into();
        let Classification {
            user_messages,
            diagnostics,
        } = Self::classify(&error);

        self.store.report(user_messages);
        for diagnostic in &diagnostics {
            match &diagnostic.detail {
                Some(detail) => self.log.log(diagnostic.level, &diagnostic.text, &[&Raw(detail)]),
                None => self.log.log(diagnostic.level, &diagnostic.text, &[]),
            };
        }
    }

    /// Clear the store, await `operation` and report its failure, if any.
    ///
    /// The failure is swallowed after reporting. Success leaves the store
    /// empty. No timeout is applied.
    pub async fn handle_errors<F, T, E>(&self, operation: F)
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: Into<ReportedError>,
    {
        self.store.clear();
        self.log.trace("Handling errors in awaited operation");

        if let Err(err) = operation.into_future().await {
            self.report_errors(err);
        }
    }

    /// Like [`handle_errors`](Self::handle_errors) for a stream: only the
    /// first item is awaited. A stream that ends without items is a success.
    pub async fn handle_stream_errors<S, T, E>(&self, stream: S)
    where
        S: Stream<Item = Result<T, E>>,
        E: Into<ReportedError>,
    {
        self.store.clear();
        self.log.trace("Handling errors in awaited stream");

        futures::pin_mut!(stream);
        if let Some(Err(err)) = stream.next().await {
            self.report_errors(err);
        }
    }

    /// Pass values through; on the first failure, report it and end the
    /// stream without an error.
    pub fn handle_fetch_errors<S, T, E>(&self, upstream: S) -> impl Stream<Item = T>
    where
        S: Stream<Item = Result<T, E>>,
        E: Into<ReportedError>,
    {
        let normalizer = self.clone();

        stream::unfold(
            (Box::pin(upstream), normalizer),
            |(mut upstream, normalizer)| async move {
                match upstream.next().await? {
                    Ok(value) => Some((value, (upstream, normalizer))),
                    Err(err) => {
                        let err: ReportedError = err.into();
                        let text = err.to_string();
                        normalizer.log.log(LogLevel::Error, "Error on load", &[&Raw(&text)]);
                        normalizer.report_errors(err);
                        None
                    }
                }
            },
        )
    }
}

impl fmt::Debug for ErrorNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorNormalizer")
            .field("store", &self.store)
            .field("log", &self.log.namespace())
            .finish()
    }
}

/// Pipe-style access to [`ErrorNormalizer::handle_fetch_errors`].
///
/// ```ignore
/// let rows = fetch_rows().handle_fetch_errors(&normalizer);
/// ```
pub trait FetchErrorsExt<T, E>: Stream<Item = Result<T, E>> + Sized
where
    E: Into<ReportedError>,
{
    fn handle_fetch_errors(self, normalizer: &ErrorNormalizer) -> impl Stream<Item = T> {
        normalizer.handle_fetch_errors(self)
    }
}

impl<S, T, E> FetchErrorsExt<T, E> for S
where
    S: Stream<Item = Result<T, E>>,
    E: Into<ReportedError>,
{
}

fn classify_graphql(responses: &[GraphQLErrorResponse]) -> Classification {
    let user_messages: Vec<Message> = responses
        .iter()
        .flat_map(|response| response.messages.iter())
        .map(|entry| Message::error(entry.message.clone()))
        .collect();

    if !user_messages.is_empty() {
        let mut diagnostics: Vec<Diagnostic> = responses
            .iter()
            .filter(|response| response.is_ambiguous())
            .map(|response| {
                Diagnostic::warn(format!(
                    "GraphQL response {} carries both a syntax error and messages",
                    response.id
                ))
            })
            .collect();
        let texts: Vec<&str> = user_messages.iter().map(|m| m.text()).collect();
        diagnostics.push(Diagnostic::error("Errors returned from GraphQL").with_detail(texts.join("; ")));

        return Classification {
            user_messages,
            diagnostics,
        };
    }

    let diagnostics = responses
        .iter()
        .filter_map(|response| response.syntax_error_text())
        .enumerate()
        .map(|(index, syntax_error)| {
            Diagnostic::error(format!("Syntax error {}: {}", index + 1, syntax_error))
        })
        .collect();

    Classification {
        user_messages: vec![Message::generic_error()],
        diagnostics,
    }
}

/// Logs a string argument without quotes.
struct Raw<'a>(&'a str);

impl fmt::Debug for Raw<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

fn unhandled(error: &ReportedError) -> Diagnostic {
    Diagnostic::error("Server reported an unhandled error").with_detail(error.to_string())
}
