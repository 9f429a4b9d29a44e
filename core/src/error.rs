//! Error types for the todos API client.
//!
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the todo does not exist" from "the server returned an unexpected status."
//! All other non-2xx responses land in `Http` with the raw status code and
//! body. `Transport` is never produced by the core itself; hosts use it to
//! report a round-trip that never yielded a response.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and forwarded to
/// `ItemHandlers::on_error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("transport failed: {0}")]
    Transport(String),
}
