use courier::http::mime::{DEFAULT_CONTENT_TYPE, content_type};

#[test]
fn test_html_extensions() {
    assert_eq!(content_type(b"html"), "text/HTML");
    assert_eq!(content_type(b"htm"), "text/HTML");
}

#[test]
fn test_image_extensions() {
    assert_eq!(content_type(b"jpg"), "image/jpeg");
    assert_eq!(content_type(b"jpeg"), "image/jpeg");
    assert_eq!(content_type(b"gif"), "image/gif");
}

#[test]
fn test_unmapped_extensions_use_default() {
    for ext in [&b"txt"[..], b"png", b"css", b"", b"Default", b"tar.gz", b"\xe9tml"] {
        assert_eq!(content_type(ext), DEFAULT_CONTENT_TYPE, "extension {:?}", ext);
    }
    assert_eq!(DEFAULT_CONTENT_TYPE, "application/octet-stream");
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert_eq!(content_type(b"HTML"), DEFAULT_CONTENT_TYPE);
    assert_eq!(content_type(b"Gif"), DEFAULT_CONTENT_TYPE);
}
