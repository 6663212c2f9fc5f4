//! Courier - single-request file server
//!
//! Accepts TCP connections, reads one request line from each and answers with
//! the bytes of the named local file, or a fixed 404 page.

pub mod config;
pub mod http;
pub mod server;
