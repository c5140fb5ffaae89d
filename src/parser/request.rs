//! Request-head parsing and representation.

use crate::parser::error::Error;
use crate::parser::method::Method;

/// The line terminator used on the wire and when rebuilding a request head.
pub const HTTP_LINE_BREAK: &str = "\r\n";

/// The request line and headers of one incoming request.
///
/// Built once per connection and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingRequest {
    /// The method token, uppercased.
    pub method: Method,
    /// The first path token, lowercased.
    ///
    /// Query strings and fragments are left in place.
    pub path: String,
    /// Every non-empty line after the request line, in arrival order.
    pub raw_header_lines: Vec<String>,
}

impl IncomingRequest {
    /// Create a new request from its parts.
    pub fn new(method: Method, path: impl Into<String>, raw_header_lines: Vec<String>) -> Self {
        Self {
            method,
            path: path.into(),
            raw_header_lines,
        }
    }
}

/// Parse a request head as accumulated by the connection handler.
///
/// Only the first line is tokenized: its first whitespace-delimited token is
/// the method, its second the path. Anything after the path on the request
/// line (usually the protocol version) is ignored. The remaining lines are
/// kept unparsed.
///
/// # Examples
///
/// ```
/// use webroot_server::{parse_request_head, Method};
///
/// let request = parse_request_head("get /Docs/Index.HTML HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();
/// assert_eq!(request.method, Method::GET);
/// assert_eq!(request.path, "/docs/index.html");
/// assert_eq!(request.raw_header_lines, vec!["Host: x".to_string()]);
/// ```
pub fn parse_request_head(message: &str) -> Result<IncomingRequest, Error> {
    if message.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let mut lines = message
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let request_line = lines.next().unwrap_or_default();
    let mut tokens = request_line.split_whitespace();
    let (method, path) = match (tokens.next(), tokens.next()) {
        (Some(method), Some(path)) => (method, path),
        _ => return Err(Error::MalformedRequestLine(request_line.to_string())),
    };

    let raw_header_lines = lines
        .take_while(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Ok(IncomingRequest::new(
        Method::from_token(method),
        path.to_lowercase(),
        raw_header_lines,
    ))
}
