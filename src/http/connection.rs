use std::path::PathBuf;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tokio::net::TcpStream;

use crate::http::parser::parse_request_path;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Largest request payload read from a client, in a single read.
pub const REQUEST_LIMIT: usize = 255;

/// Serves exactly one request on an owned stream.
///
/// The stream is dropped, and therefore closed, when [`Connection::run`]
/// returns on any path.
pub struct Connection<S = TcpStream> {
    stream: S,
    root: PathBuf,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, root: PathBuf) -> Self {
        Self { stream, root }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut buf = [0u8; REQUEST_LIMIT];
        let n = self
            .stream
            .read(&mut buf)
            .await
            .context("reading request")?;
        let raw = &buf[..n];

        tracing::debug!(bytes = n, message = %String::from_utf8_lossy(raw), "Received request");

        let response = self.handle_request(raw).await;

        let mut writer = ResponseWriter::new(&response);
        writer
            .write_to_stream(&mut self.stream)
            .await
            .context("writing response")?;

        tracing::info!(status = %response.status, bytes = writer.len(), "Response sent");
        Ok(())
    }

    async fn handle_request(&self, raw: &[u8]) -> Response {
        match parse_request_path(raw) {
            Ok(path) => Response::from_file(&self.root, path).await,
            Err(e) => {
                tracing::debug!(error = %e, "No usable path in request line");
                Response::not_found()
            }
        }
    }
}
