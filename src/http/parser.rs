//! Request line parsing.
//!
//! Only the path token of the first line is ever looked at. The scan works on
//! raw bytes and never indexes past the end of the buffer.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("request line has no space after the method")]
    MissingSeparator,
    #[error("path token is not followed by a space")]
    UnterminatedPath,
    #[error("path is empty")]
    EmptyPath,
}

/// Extracts the requested file path from a raw request line.
///
/// The path bytes are returned as they appear on the wire, without any
/// decoding.
///
/// Finds the first space, skips the run of spaces after it, then scans to the
/// next space. The first byte after the skipped spaces (normally the leading
/// `/`) is not part of the path, so `GET /index.html HTTP/1.1` yields
/// `index.html` and `GET / HTTP/1.1` yields [`ParseError::EmptyPath`].
pub fn parse_request_path(buf: &[u8]) -> Result<&[u8], ParseError> {
    let method_end = buf
        .iter()
        .position(|&b| b == b' ')
        .ok_or(ParseError::MissingSeparator)?;

    let start = buf[method_end..]
        .iter()
        .position(|&b| b != b' ')
        .map(|offset| method_end + offset)
        .ok_or(ParseError::UnterminatedPath)?;

    // `end` is the last byte before the next space, scanning from start + 1.
    let end = buf
        .get(start + 1..)
        .and_then(|rest| rest.iter().position(|&b| b == b' '))
        .map(|offset| start + offset)
        .ok_or(ParseError::UnterminatedPath)?;

    if end <= start {
        return Err(ParseError::EmptyPath);
    }

    Ok(&buf[start + 1..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";

        assert_eq!(parse_request_path(req).unwrap(), b"index.html");
    }

    #[test]
    fn single_character_token_is_empty() {
        assert_eq!(parse_request_path(b"GET / HTTP/1.1"), Err(ParseError::EmptyPath));
        assert_eq!(parse_request_path(b"GET x HTTP/1.1"), Err(ParseError::EmptyPath));
    }
}
