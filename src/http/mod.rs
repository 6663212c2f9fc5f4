//! Minimal HTTP file serving.
//!
//! Each connection carries exactly one request. Only the path token of the
//! request line is read; the rest of the request is ignored.
//!
//! # Architecture
//!
//! - **`connection`**: Reads the request, builds the response and writes it back
//! - **`parser`**: Extracts the requested path from the request line
//! - **`response`**: Status codes and response assembly from local files
//! - **`header`**: Composes the status, date, content type and length lines
//! - **`writer`**: Puts header, body and terminator byte on the wire
//! - **`mime`**: Content type detection based on file extensions
//!
//! # Connection Flow
//!
//! ```text
//!   read (once, ≤ 255 bytes)
//!        │
//!        ▼
//!   parse request line ── no path ──┐
//!        │                          │
//!        ▼                          ▼
//!   open file ─── not found ───▶ 404 page
//!        │                          │
//!        ▼                          │
//!   200 + file bytes ◀──────────────┘ (either one)
//!        │
//!        ▼
//!   write header, body, terminator → close
//! ```
//!
//! # Example
//!
//! ```ignore
//! use courier::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let conn = Connection::new(socket, ".".into());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod header;
pub mod mime;
pub mod parser;
pub mod response;
pub mod writer;
