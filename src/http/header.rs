//! Response header composition.
//!
//! Headers are built fresh for every response. Lines end with a bare `\n`
//! and the block is closed by an empty line.

use chrono::{DateTime, Local};

use crate::http::mime::content_type;
use crate::http::response::StatusCode;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Composes the header block using the current local time.
///
/// `extension` is resolved through [`content_type`]; `content_length` is the
/// logical body length, excluding the terminator byte the writer appends.
pub fn compose_header(extension: &[u8], status: StatusCode, content_length: usize) -> String {
    compose_header_at(extension, status, content_length, &Local::now())
}

/// Same as [`compose_header`] with an explicit clock reading.
pub fn compose_header_at(
    extension: &[u8],
    status: StatusCode,
    content_length: usize,
    now: &DateTime<Local>,
) -> String {
    let mut header = format!("{} {}\n", HTTP_VERSION, status);
    header.push_str(&date_line(now));
    header.push_str(&format!("Content-Type: {}\n", content_type(extension)));
    header.push_str(&format!("Content-Length: {}\n\n", content_length));

    tracing::debug!(header = %header, "Composed response header");
    header
}

/// Formats the `Date:` line.
///
/// The timestamp is local time even though the line is labelled GMT, and the
/// numeric fields are not zero-padded, e.g. `Date: Tue, 5 Mar 2024 7:8:9 GMT`.
pub fn date_line(now: &DateTime<Local>) -> String {
    now.format("Date: %a, %-d %b %Y %-H:%-M:%-S GMT\n").to_string()
}
