//! Error taxonomy for ship-note API calls.
//!
//! Every failure the client can hit maps to exactly one variant here, and all
//! of them propagate straight to the caller. Nothing is retried.

use thiserror::Error;

/// Errors produced by [`crate::ReleaseNoteClient`] and response extraction.
#[derive(Debug, Error)]
pub enum ShipNoteError {
    /// The service answered with a non-2xx status. When the body carried the
    /// service's error envelope (`{"ok": false, "code": ..., "error": ...}`),
    /// `code` and `message` hold its contents; otherwise they fall back to
    /// the bare status line.
    #[error("ship-note API request failed with status {status} ({code}): {message}")]
    Http {
        status: u16,
        code: String,
        message: String,
    },

    /// No response arrived within the configured timeout.
    #[error("ship-note API did not respond within {seconds}s")]
    Timeout { seconds: u64 },

    /// The request could not be sent or the response could not be read
    /// (connection refused, DNS failure, broken transfer).
    #[error("network error talking to ship-note API: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("ship-note API returned a body that is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// A field the caller asked for is absent from the response.
    #[error("response is missing expected field `{path}`")]
    MissingField { path: String },

    /// A field exists but is not the JSON type the caller needs.
    #[error("response field `{path}` is not a {expected}")]
    UnexpectedType {
        path: String,
        expected: &'static str,
    },

    /// Bad client configuration (unparseable endpoint URL, unreadable or
    /// malformed config file).
    #[error("configuration error: {0}")]
    Config(String),
}

impl ShipNoteError {
    /// Classify a transport-level `reqwest` failure. Timeouts get their own
    /// variant so callers can tell "the service is slow" from "the service
    /// is unreachable".
    pub fn from_transport(err: reqwest::Error, timeout_seconds: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                seconds: timeout_seconds,
            }
        } else {
            Self::Network(err)
        }
    }
}
