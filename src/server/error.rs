//! Error types for the HTTP server.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The listening socket could not be bound.
    #[error("Cannot bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// Accepting a connection failed.
    #[error("Accept failed: {0}")]
    Accept(#[source] io::Error),

    /// The request head could not be parsed.
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] ParserError),

    /// Reading the request head failed.
    #[error("Read failed: {0}")]
    ReadRequest(#[source] io::Error),

    /// Writing the response failed.
    #[error("Write failed: {0}")]
    WriteResponse(#[source] io::Error),

    /// A requested file does not exist or cannot be read.
    #[error("File not found: {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The web root cannot be listed.
    #[error("Cannot list directory {}: {source}", .path.display())]
    DirectoryList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file cannot be read.
    #[error("Cannot read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file is not valid JSON for [`ServerConfig`](crate::ServerConfig).
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl Error {
    /// The name of the component the error originated in.
    pub fn component(&self) -> &'static str {
        match self {
            Error::Bind { .. } | Error::Accept(_) => "listener",
            Error::ReadRequest(_) => "request-reader",
            Error::MalformedRequest(_) => "request-parser",
            Error::FileNotFound { .. } | Error::DirectoryList { .. } => "response-builder",
            Error::WriteResponse(_) => "response-writer",
            Error::ConfigRead { .. } | Error::ConfigParse(_) => "config",
        }
    }
}
