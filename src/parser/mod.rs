//! Request-head parser module.
//!
//! The server only looks at the request line; header lines are collected
//! but never interpreted.

mod request;
mod method;
mod error;
mod tests;

// Re-export public items
pub use request::{IncomingRequest, HTTP_LINE_BREAK};
pub use method::Method;
pub use error::Error;

// Re-export the parse_request_head function
pub use request::parse_request_head;
