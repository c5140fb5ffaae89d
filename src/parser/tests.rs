//! Tests for the request-head parser.

#[cfg(test)]
mod tests {
    use crate::parser::{Error, IncomingRequest, Method, parse_request_head};

    #[test]
    fn test_parse_simple_get_request() {
        let request = "GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request_head(request).unwrap();
        assert_eq!(result.method, Method::GET);
        assert_eq!(result.path, "/index.html");
        assert_eq!(result.raw_header_lines, vec!["Host: example.com".to_string()]);
    }

    #[test]
    fn test_method_is_uppercased_and_path_lowercased() {
        let result = parse_request_head("get /Notes/README.TXT HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(result.method, Method::GET);
        assert_eq!(result.path, "/notes/readme.txt");
    }

    #[test]
    fn test_header_lines_keep_order() {
        let request = "GET / HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test\r\nAccept: */*\r\n\r\n";
        let result = parse_request_head(request).unwrap();
        assert_eq!(
            result.raw_header_lines,
            vec![
                "Host: example.com".to_string(),
                "User-Agent: test".to_string(),
                "Accept: */*".to_string(),
            ]
        );
    }

    #[test]
    fn test_query_string_is_not_stripped() {
        let result = parse_request_head("GET /page.html?Lang=EN#Top HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(result.path, "/page.html?lang=en#top");
    }

    #[test]
    fn test_version_token_is_optional() {
        let result = parse_request_head("GET /plain.txt\r\n\r\n").unwrap();
        assert_eq!(result, IncomingRequest::new(Method::GET, "/plain.txt", Vec::new()));
    }

    #[test]
    fn test_head_without_blank_line() {
        // End-of-stream before the blank line still yields a usable head.
        let result = parse_request_head("GET /a.txt HTTP/1.0\r\nHost: x\r\n").unwrap();
        assert_eq!(result.path, "/a.txt");
        assert_eq!(result.raw_header_lines, vec!["Host: x".to_string()]);
    }

    #[test]
    fn test_bare_newlines_are_accepted() {
        let result = parse_request_head("GET /a.txt HTTP/1.1\nHost: x\n\n").unwrap();
        assert_eq!(result.path, "/a.txt");
        assert_eq!(result.raw_header_lines, vec!["Host: x".to_string()]);
    }

    #[test]
    fn test_unknown_method_is_kept() {
        let result = parse_request_head("brew /pot HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(result.method, Method::Extension("BREW".to_string()));
        assert_eq!(result.method.to_string(), "BREW");
    }

    #[test]
    fn test_all_common_methods() {
        let methods = vec![
            ("GET", Method::GET),
            ("post", Method::POST),
            ("Put", Method::PUT),
            ("DELETE", Method::DELETE),
            ("head", Method::HEAD),
            ("OPTIONS", Method::OPTIONS),
            ("patch", Method::PATCH),
        ];

        for (token, expected) in methods {
            let request = format!("{token} /index.html HTTP/1.1\r\n\r\n");
            let result = parse_request_head(&request).unwrap();
            assert_eq!(result.method, expected);
        }
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::GET.to_string(), "GET");
        assert_eq!(Method::HEAD.to_string(), "HEAD");
        assert_eq!(Method::from("options").to_string(), "OPTIONS");
    }

    #[test]
    fn test_empty_request() {
        let result = parse_request_head("");
        assert!(matches!(result, Err(Error::EmptyRequest)));
    }

    #[test]
    fn test_blank_request_line() {
        let result = parse_request_head("\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(ref line)) if line.is_empty()));
    }

    #[test]
    fn test_missing_path() {
        let result = parse_request_head("GET\r\nHost: example.com\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(ref line)) if line == "GET"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::EmptyRequest.to_string(), "Empty request");
        assert_eq!(
            Error::MalformedRequestLine("GET".to_string()).to_string(),
            "Malformed request line: \"GET\""
        );
    }
}
