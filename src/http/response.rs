use std::fmt;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::http::header::compose_header;

/// Body served whenever the requested file cannot be delivered.
pub const NOT_FOUND_PAGE: &str = "<html><body>Error 404, Page Not Found~~!</body></html>";

/// Extension used when the requested path contains no `.` at all.
///
/// It is deliberately absent from the content type table.
pub const NO_EXTENSION: &[u8] = b"Default";

/// HTTP status codes the server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use courier::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// A fully assembled response: the composed header block and the body bytes.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Complete header block, including the terminating blank line
    pub header: String,
    /// Response body as bytes
    pub body: Bytes,
}

impl Response {
    /// Builds the response for the raw `path` bytes, resolved against `root`.
    ///
    /// Any failure to open or read the file yields [`Response::not_found`].
    pub async fn from_file(root: &Path, path: &[u8]) -> Self {
        let full_path = root.join(path_from_bytes(path));

        let body = match tokio::fs::read(&full_path).await {
            Ok(bytes) => Bytes::from(bytes),
            Err(e) => {
                tracing::debug!(path = %full_path.display(), error = %e, "File not servable");
                return Self::not_found();
            }
        };

        let header = compose_header(extension_of(path), StatusCode::Ok, body.len());
        Self {
            status: StatusCode::Ok,
            header,
            body,
        }
    }

    /// Creates the fixed 404 Not Found response.
    pub fn not_found() -> Self {
        let body = Bytes::from_static(NOT_FOUND_PAGE.as_bytes());
        let header = compose_header(b"html", StatusCode::NotFound, body.len());
        Self {
            status: StatusCode::NotFound,
            header,
            body,
        }
    }
}

/// Returns everything after the last `.` in `path`, or [`NO_EXTENSION`].
///
/// The whole path is searched, directories included.
pub fn extension_of(path: &[u8]) -> &[u8] {
    path.iter()
        .rposition(|&b| b == b'.')
        .map(|dot| &path[dot + 1..])
        .unwrap_or(NO_EXTENSION)
}

/// Turns request path bytes into a filesystem path without decoding them.
#[cfg(unix)]
pub fn path_from_bytes(path: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(path))
}

// Non-unix paths are not byte strings; invalid sequences are replaced.
#[cfg(not(unix))]
pub fn path_from_bytes(path: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(path).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_uses_last_dot() {
        assert_eq!(extension_of(b"archive.tar.gif"), b"gif");
        assert_eq!(extension_of(b"index."), b"");
        assert_eq!(extension_of(b"README"), NO_EXTENSION);
        assert_eq!(extension_of(b"v1.2/notes"), b"2/notes");
        assert_eq!(extension_of(b"caf\xe9.html"), b"html");
    }
}
