use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use plain_http::connection::{ConnectionId, HttpConnection};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{Instrument, error, info, info_span, warn};

use crate::config::Config;
use crate::router::Router;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("bind {address} error: {source}")]
    Bind { address: SocketAddr, source: io::Error },
}

/// Accepts connections and serves one request on each, one task per connection.
#[derive(Debug)]
pub struct Server {
    address: SocketAddr,
    router: Arc<Router>,
}

impl Server {
    pub fn new(config: &Config) -> Self {
        Self { address: config.address(), router: Arc::new(Router::new(&config.directory)) }
    }

    /// Binds the configured address and serves until the process exits.
    pub async fn start(self) -> Result<(), ServerError> {
        let tcp_listener = TcpListener::bind(self.address).await.map_err(|source| ServerError::Bind { address: self.address, source })?;

        info!(address = %self.address, directory = %self.router.directory().display(), "start listening");
        self.serve(tcp_listener).await;
        Ok(())
    }

    /// Runs the accept loop on an already bound listener.
    ///
    /// A failed accept is logged and skipped; a failed connection only ends
    /// its own task.
    pub async fn serve(self, tcp_listener: TcpListener) {
        loop {
            let (tcp_stream, remote_addr) = match tcp_listener.accept().await {
                Ok(stream_and_addr) => stream_and_addr,
                Err(e) => {
                    warn!(cause = %e, "failed to accept");
                    continue;
                }
            };

            let router = Arc::clone(&self.router);
            let span = info_span!("connection", id = %ConnectionId::next());

            tokio::spawn(
                async move {
                    info!(%remote_addr, "connected");
                    let (reader, writer) = tcp_stream.into_split();
                    let connection = HttpConnection::new(reader, writer);
                    match connection.process(router).await {
                        Ok(()) => info!("disconnected"),
                        Err(e) if e.is_malformed_request() => warn!(cause = %e, "malformed request, disconnected"),
                        Err(e) => error!(cause = %e, "connection failed, disconnected"),
                    }
                }
                .instrument(span),
            );
        }
    }
}
