//! Error types for the Amplify API client.
//!
//! Every fallible operation in this crate returns [`Result`], whose error
//! side is the [`Error`] enum below.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Amplify operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Amplify API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (connection, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON or did not match the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-success status
    #[error("API error: status={status}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Optional error code from the API
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// Login failed or did not produce a token
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The API rejected the session token (401)
    #[error("Session expired or token rejected")]
    SessionExpired,

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// A response lacked a key the client needs to read
    #[error("Missing field `{field}` in {context}")]
    MissingField {
        /// Where the field was expected (an envelope or resource description)
        context: String,
        /// The missing key
        field: String,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_) | Error::SessionExpired)
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::NotFound(_) | Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub(crate) fn missing_field(context: impl Into<String>, field: impl Into<String>) -> Self {
        Error::MissingField {
            context: context.into(),
            field: field.into(),
        }
    }

    /// Build an API error from a status and JSON body.
    ///
    /// Amplify error bodies are not uniform; `message`, `error` (string or
    /// object) and `errors[0].message` are all looked at.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let code = body
            .get("code")
            .or_else(|| body.get("error").and_then(|e| e.get("code")))
            .and_then(|c| match c {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            });

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| body.get("error").and_then(Value::as_str))
            .or_else(|| {
                body.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
            })
            .or_else(|| {
                body.get("errors")
                    .and_then(|e| e.get(0))
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
            })
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            code,
            message,
            body,
        }
    }
}
