use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tokio::task::JoinSet;
use tracing::{Instrument, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Owns the listening socket and the set of outstanding workers.
///
/// Every accepted connection is moved into its own task together with an
/// owned copy of the document root; workers share no mutable state.
pub struct Dispatcher {
    listener: TcpListener,
    root: PathBuf,
    workers: JoinSet<()>,
}

impl Dispatcher {
    /// Binds and listens on the address described by `cfg`.
    ///
    /// The configuration is validated before any socket is created.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        cfg.validate()?;
        Self::bind_addr(cfg.socket_addr(), cfg.backlog, cfg.root.clone()).await
    }

    /// Binds to an explicit address. Port 0 picks an ephemeral port.
    pub async fn bind_addr(addr: SocketAddr, backlog: u32, root: PathBuf) -> anyhow::Result<Self> {
        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4(),
            SocketAddr::V6(_) => TcpSocket::new_v6(),
        }
        .context("opening socket")?;

        socket.set_reuseaddr(true).context("setting SO_REUSEADDR")?;
        socket
            .bind(addr)
            .with_context(|| format!("binding {}", addr))?;
        let listener = socket
            .listen(backlog)
            .with_context(|| format!("listening on {}", addr))?;

        info!("Listening on {} (backlog {})", listener.local_addr()?, backlog);

        Ok(Self {
            listener,
            root,
            workers: JoinSet::new(),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Number of dispatched workers that have not been reaped yet.
    pub fn outstanding(&self) -> usize {
        self.workers.len()
    }

    /// Accepts and dispatches connections until `shutdown` resolves, then
    /// aborts any workers still running.
    ///
    /// An accept failure ends the loop with an error.
    pub async fn run_until<F>(mut self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()>,
    {
        let result = self.serve_until(shutdown).await;

        if self.outstanding() > 0 {
            info!(outstanding = self.outstanding(), "Aborting outstanding workers");
        }
        self.workers.shutdown().await;

        result
    }

    /// The accept loop. Finished workers are reaped from the same select that
    /// waits on `accept`, so reaping never holds up a new connection. Their
    /// results are discarded.
    async fn serve_until<F>(&mut self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    let (socket, peer) = accepted.context("accepting connection")?;
                    info!("Accepted connection from {}", peer);
                    self.dispatch(socket, peer);
                }

                Some(reaped) = self.workers.join_next(), if !self.workers.is_empty() => {
                    if let Err(e) = reaped {
                        tracing::warn!("Worker ended abnormally: {}", e);
                    }
                }

                _ = &mut shutdown => {
                    info!("Shutdown signal received");
                    return Ok(());
                }
            }
        }
    }

    fn dispatch(&mut self, socket: tokio::net::TcpStream, peer: SocketAddr) {
        let root = self.root.clone();
        let span = tracing::info_span!("worker", %peer);

        self.workers.spawn(
            async move {
                let conn = Connection::new(socket, root);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {:#}", peer, e);
                }
            }
            .instrument(span),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    #[tokio::test]
    async fn finished_workers_are_reaped_while_serving() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.html"), b"a").unwrap();
        let mut dispatcher =
            Dispatcher::bind_addr("127.0.0.1:0".parse().unwrap(), 5, dir.path().to_path_buf())
                .await
                .unwrap();
        let addr = dispatcher.local_addr().unwrap();

        // The clients double as the shutdown future: serving stops once they finish.
        let clients = async move {
            for _ in 0..10 {
                let mut stream = TcpStream::connect(addr).await.unwrap();
                stream.write_all(b"GET /a.html HTTP/1.1\r\n").await.unwrap();
                let mut wire = Vec::new();
                stream.read_to_end(&mut wire).await.unwrap();
                assert!(wire.starts_with(b"HTTP/1.1 200 OK\n"));
            }
            // The last worker may still be unwinding after closing its stream.
            tokio::time::sleep(Duration::from_millis(200)).await;
        };

        tokio::time::timeout(Duration::from_secs(10), dispatcher.serve_until(clients))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(dispatcher.outstanding(), 0);
    }
}
