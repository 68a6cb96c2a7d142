//! Failures a post list fetch can settle with.

use thiserror::Error;

/// Why a listing request did not produce posts.
///
/// The loader folds every variant into an empty result set; the variant is
/// kept only so callers can choose to surface it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (connection, DNS, CORS, ...).
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with something other than `200 OK`.
    #[error("Invalid status from server: {code} {reason}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Reason phrase reported alongside the code.
        reason: String,
    },
    /// The body was not the expected JSON shape.
    #[error("Parse error: {0}")]
    Decode(String),
}
