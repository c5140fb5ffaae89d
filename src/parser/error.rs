//! Error types for the request-head parser.

use thiserror::Error;

/// Errors that can occur while parsing a request head.
#[derive(Debug, Error)]
pub enum Error {
    /// The stream ended before a single line was read.
    #[error("Empty request")]
    EmptyRequest,

    /// The request line lacks a method or a path token.
    #[error("Malformed request line: {0:?}")]
    MalformedRequestLine(String),
}
