//! Reading and parsing raw HTTP/1.1 responses.
//!
//! Framing is read-until-close: the request always asks the server to close
//! the connection, so end-of-stream is end-of-message. Chunked bodies are
//! not decoded.

use std::collections::HashMap;
use std::io::{self, Read, Write};

use bytes::Bytes;
use rawfetch_core::Error;

const SEPARATOR: &[u8] = b"\r\n\r\n";
const CHUNK_SIZE: usize = 8 * 1024;

/// Write `request` to the stream, then read until the peer closes.
///
/// Returns every byte received. Any write or read error aborts the fetch.
pub fn read_response<S: Read + Write>(stream: &mut S, request: &[u8]) -> Result<Vec<u8>, Error> {
    stream.write_all(request).map_err(Error::Transport)?;
    stream.flush().map_err(Error::Transport)?;

    let mut raw = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => raw.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Transport(e)),
        }
    }

    tracing::debug!(bytes = raw.len(), "response read to end of stream");
    Ok(raw)
}

/// Status, headers and body of one response.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub status: u16,
    /// Header names are lowercased; the first occurrence of a name wins.
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl ParsedResponse {
    /// Look up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}

/// Split raw response bytes into status, headers and body.
///
/// # Errors
///
/// [`Error::MalformedResponse`] if the `\r\n\r\n` separator is missing, or
/// the status line is not `HTTP/x.y <code> ...` with a numeric code.
pub fn parse_response(raw: Vec<u8>) -> Result<ParsedResponse, Error> {
    let raw = Bytes::from(raw);
    let split = raw
        .windows(SEPARATOR.len())
        .position(|w| w == SEPARATOR)
        .ok_or_else(|| Error::MalformedResponse("no header/body separator".into()))?;

    let head = String::from_utf8_lossy(&raw[..split]);
    let mut lines = head.split("\r\n");

    let status_line = lines.next().unwrap_or_default();
    let status = parse_status_line(status_line)?;

    let mut headers = HashMap::new();
    for line in lines {
        match line.split_once(": ") {
            Some((key, value)) => {
                headers.entry(key.to_ascii_lowercase()).or_insert_with(|| value.to_string());
            }
            None => tracing::debug!(line, "skipping header line without ': '"),
        }
    }

    let body = raw.slice(split + SEPARATOR.len()..);

    Ok(ParsedResponse { status, headers, body })
}

fn parse_status_line(line: &str) -> Result<u16, Error> {
    let mut tokens = line.split_whitespace();

    match tokens.next() {
        Some(version) if version.starts_with("HTTP/") => {}
        _ => return Err(Error::MalformedResponse(format!("bad status line: {line:?}"))),
    }

    tokens
        .next()
        .and_then(|code| code.parse::<u16>().ok())
        .ok_or_else(|| Error::MalformedResponse(format!("bad status code in: {line:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// In-memory duplex: reads from `input`, records writes.
    struct MockStream {
        input: Cursor<Vec<u8>>,
        written: Vec<u8>,
        chunk: usize,
    }

    impl MockStream {
        fn new(input: &[u8], chunk: usize) -> Self {
            Self { input: Cursor::new(input.to_vec()), written: Vec::new(), chunk }
        }
    }

    impl Read for MockStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = buf.len().min(self.chunk);
            self.input.read(&mut buf[..n])
        }
    }

    impl Write for MockStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingStream;

    impl Read for FailingStream {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    impl Write for FailingStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_read_response_concatenates_chunks() {
        let payload = b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n<p>hi</p>";
        let mut stream = MockStream::new(payload, 5);

        let raw = read_response(&mut stream, b"GET / HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(raw, payload);
        assert_eq!(stream.written, b"GET / HTTP/1.1\r\n\r\n");
    }

    #[test]
    fn test_read_response_error() {
        let result = read_response(&mut FailingStream, b"GET / HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[test]
    fn test_parse_basic() {
        let raw = b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nX-Test: a\r\n\r\n<h1>T</h1>".to_vec();
        let parsed = parse_response(raw).unwrap();
        assert_eq!(parsed.status, 200);
        assert_eq!(parsed.content_type(), Some("text/html"));
        assert_eq!(parsed.header("X-TEST"), Some("a"));
        assert_eq!(&parsed.body[..], b"<h1>T</h1>");
    }

    #[test]
    fn test_parse_missing_separator() {
        let raw = b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n".to_vec();
        let result = parse_response(raw);
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_response(Vec::new()), Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_non_numeric_status() {
        let raw = b"HTTP/1.1 OK fine\r\n\r\n".to_vec();
        assert!(matches!(parse_response(raw), Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_missing_status_code() {
        let raw = b"HTTP/1.1\r\nContent-Type: text/html\r\n\r\n".to_vec();
        assert!(matches!(parse_response(raw), Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_not_http_status_line() {
        let raw = b"SSH-2.0-OpenSSH 200 x\r\n\r\n".to_vec();
        assert!(matches!(parse_response(raw), Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_first_header_wins_case_insensitive() {
        let raw = b"HTTP/1.0 200 OK\r\nContent-Type: application/json\r\ncontent-type: text/html\r\n\r\n{}".to_vec();
        let parsed = parse_response(raw).unwrap();
        assert_eq!(parsed.content_type(), Some("application/json"));
        assert_eq!(parsed.headers.len(), 1);
    }

    #[test]
    fn test_parse_skips_malformed_header_lines() {
        let raw = b"HTTP/1.1 200 OK\r\nbogus\r\nContent-Type: text/html\r\n\r\n".to_vec();
        let parsed = parse_response(raw).unwrap();
        assert_eq!(parsed.headers.len(), 1);
        assert!(parsed.body.is_empty());
    }

    #[test]
    fn test_parse_value_keeps_colons() {
        let raw = b"HTTP/1.1 200 OK\r\nLocation: http://x.com:80/a\r\n\r\n".to_vec();
        let parsed = parse_response(raw).unwrap();
        assert_eq!(parsed.header("location"), Some("http://x.com:80/a"));
    }

    #[test]
    fn test_parse_body_keeps_later_separators() {
        let raw = b"HTTP/1.1 404 Not Found\r\n\r\nline1\r\n\r\nline2".to_vec();
        let parsed = parse_response(raw).unwrap();
        assert_eq!(parsed.status, 404);
        assert!(parsed.content_type().is_none());
        assert_eq!(&parsed.body[..], b"line1\r\n\r\nline2");
    }
}
