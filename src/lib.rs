//! A minimal concurrent HTTP/1.1 file server.
//!
//! The server accepts TCP connections, reads one request line per
//! connection and answers with either a listing of the web root's
//! subdirectories or the content of a file beneath the web root. Every
//! connection is served on its own task and closed after a single response.
//!
//! # Behaviour
//!
//! - `GET /` lists the subdirectories of the web root as links.
//! - `GET` of any path ending in `subdirectory/index.html` yields a fixed
//!   listing of `a.txt` through `d.txt`.
//! - Anything else is served as a file beneath the web root, whatever the
//!   method. Line breaks are dropped from the content unless
//!   [`ServerConfig::strip_newlines`] is turned off.
//! - The status is always `200 OK`. The content type is `text/html` if the
//!   path contains `.html` anywhere, `text/plain` otherwise.
//! - Failures close the connection without a response.
//!
//! # Examples
//!
//! ## Routing
//!
//! ```
//! use webroot_server::{parse_request_head, ResponseStrategy, Router, ServerConfig};
//!
//! let config = ServerConfig::default();
//! let router = Router::new(&config);
//!
//! let request = parse_request_head("GET /docs/subdirectory/index.html HTTP/1.1\r\n\r\n").unwrap();
//! assert_eq!(
//!     router.select(&request.method, &request.path),
//!     ResponseStrategy::FixedSubdirectoryListing
//! );
//! ```
//!
//! ## Running a server
//!
//! ```no_run
//! use webroot_server::{Listener, ServerConfig};
//!
//! # async fn run() -> Result<(), webroot_server::ServerError> {
//! let handle = Listener::start(ServerConfig::default()).await?;
//! println!("Listening on {}", handle.local_addr());
//! // ... later
//! handle.stop().await.wait().await;
//! # Ok(())
//! # }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, IncomingRequest, Method, parse_request_head};
pub use server::{
    Connections, Error as ServerError, Listener, ListenerHandle, RenderedResponse, ResponseStrategy, Router,
    ServerConfig, content_type_for,
};
