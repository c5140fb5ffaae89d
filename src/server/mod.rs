//! HTTP server implementation for webroot-server.
//!
//! A [`Listener`] accepts connections and serves each one on its own task:
//! the request head is read, the [`Router`] picks a [`ResponseStrategy`],
//! and the response is rendered and written before the connection is
//! closed. Nothing but the read-only [`ServerConfig`] is shared between
//! connections.

mod builder;
mod config;
mod connection;
mod error;
mod listener;
mod response;
mod router;

// Re-export public items
pub use builder::{content_type_for, render, resolve_static_path};
pub use config::ServerConfig;
pub use connection::{handle_connection, read_request_head, serve_connection};
pub use error::Error;
pub use listener::{Connections, Listener, ListenerHandle};
pub use response::{RenderedResponse, STATUS_OK};
pub use router::{ResponseStrategy, Router};
