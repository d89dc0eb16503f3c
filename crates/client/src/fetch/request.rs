//! Request serialization.
//!
//! Every request carries `Connection: close`. The response reader relies on
//! the server closing the stream to find the end of the message; adding
//! keep-alive would require Content-Length or chunked framing instead.

/// A bodiless HTTP/1.1 request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub host: &'a str,
}

impl<'a> Request<'a> {
    pub fn get(path: &'a str, host: &'a str) -> Self {
        Self { method: "GET", path, host }
    }

    /// Serialize to wire bytes:
    /// `METHOD SP path SP HTTP/1.1 CRLF Host: host CRLF Connection: close CRLF CRLF`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let path = if self.path.is_empty() { "/" } else { self.path };
        format!("{} {} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n", self.method, path, self.host).into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request_bytes() {
        let bytes = Request::get("/docs", "example.com").to_bytes();
        assert_eq!(bytes, b"GET /docs HTTP/1.1\r\nHost: example.com\r\nConnection: close\r\n\r\n");
    }

    #[test]
    fn test_empty_path_defaults_to_root() {
        let bytes = Request::get("", "example.com").to_bytes();
        assert!(bytes.starts_with(b"GET / HTTP/1.1\r\n"));
    }

    #[test]
    fn test_ends_with_blank_line_and_no_body() {
        let bytes = Request::get("/", "example.com").to_bytes();
        assert!(bytes.ends_with(b"Connection: close\r\n\r\n"));
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.matches("\r\n\r\n").count(), 1);
    }

    #[test]
    fn test_query_kept_in_request_line() {
        let bytes = Request::get("/search?q=ws", "example.com:8080").to_bytes();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("GET /search?q=ws HTTP/1.1\r\nHost: example.com:8080\r\n"));
    }
}
