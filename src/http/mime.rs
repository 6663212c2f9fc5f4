//! Content type lookup by file extension.

/// Content type used for any extension missing from the table.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Maps a file extension to its content type.
///
/// Extensions are raw bytes taken from the request path. Lookup is
/// case-sensitive against lowercase keys, so `b"HTML"` falls back to
/// [`DEFAULT_CONTENT_TYPE`] just like an empty or unknown extension.
///
/// # Example
///
/// ```
/// # use courier::http::mime::content_type;
/// assert_eq!(content_type(b"jpg"), "image/jpeg");
/// assert_eq!(content_type(b"txt"), "application/octet-stream");
/// ```
pub fn content_type(extension: &[u8]) -> &'static str {
    match extension {
        b"htm" | b"html" => "text/HTML",
        b"jpeg" | b"jpg" => "image/jpeg",
        b"gif" => "image/gif",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
