//! HTTP response types.

/// The only status line the server ever sends.
pub const STATUS_OK: &str = "HTTP/1.1 200 OK";

/// A fully rendered response, ready to be written to a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    /// The status line, without its line break.
    pub status_line: String,
    /// The headers in the order they are sent.
    pub headers: Vec<(String, String)>,
    /// The response body
    pub body: String,
}

impl RenderedResponse {
    /// Create an empty `200 OK` response.
    pub fn ok() -> Self {
        Self {
            status_line: STATUS_OK.to_string(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Set the response body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the value of the first header with the given name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Convert the response to bytes.
    ///
    /// The body is followed by a single `\n`. There is no `Content-Length`:
    /// the body ends where the connection closes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.status_line.len() + self.body.len() + 64);

        bytes.extend_from_slice(self.status_line.as_bytes());
        bytes.extend_from_slice(b"\r\n");

        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");

        bytes.extend_from_slice(self.body.as_bytes());
        bytes.push(b'\n');

        bytes
    }
}
