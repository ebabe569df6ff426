use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, info};

use crate::codec::{RequestDecoder, ResponseEncoder};
use crate::handler::Handler;
use crate::protocol::{HttpError, SendError};

/// Process-wide counter behind [`ConnectionId::next`].
static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one accepted connection in log output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Allocates the next identifier; called once per accepted connection.
    pub fn next() -> Self {
        Self(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An HTTP connection that serves exactly one request.
///
/// `HttpConnection` reads and decodes one request, hands it to the handler,
/// writes the response, flushes and shuts the write half down. Any failure
/// ends processing early; the caller drops the connection either way, which
/// releases the socket on every exit path.
///
/// # Type Parameters
///
/// * `R`: The async readable stream type
/// * `W`: The async writable stream type
///
pub struct HttpConnection<R, W> {
    framed_read: FramedRead<R, RequestDecoder>,
    framed_write: FramedWrite<W, ResponseEncoder>,
}

impl<R, W> HttpConnection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            framed_read: FramedRead::with_capacity(reader, RequestDecoder::new(), 8 * 1024),
            framed_write: FramedWrite::new(writer, ResponseEncoder::new()),
        }
    }

    /// Processes the single request of this connection.
    ///
    /// A malformed request or a transport failure is returned as an error and
    /// no response is written. A peer that closes before sending anything is
    /// not an error.
    pub async fn process<H>(mut self, handler: Arc<H>) -> Result<(), HttpError>
    where
        H: Handler,
    {
        let request = match self.framed_read.next().await {
            Some(Ok(request)) => request,
            Some(Err(e)) => return Err(e.into()),
            None => {
                info!("connection closed before a request was received");
                return Ok(());
            }
        };

        info!(method = %request.method(), path = request.path(), "received request");
        debug!(headers = ?request.headers(), body_size = request.body().map(|b| b.len()), "request detail");

        let response = handler.call(request).await.map_err(HttpError::handler)?;

        info!(status = %response.status_code(), body_size = response.body().map(|b| b.len()), "sending response");

        // `send` flushes the underlying IO
        self.framed_write.send(response).await?;
        self.framed_write.get_mut().shutdown().await.map_err(SendError::io)?;

        Ok(())
    }
}

impl<R, W> fmt::Debug for HttpConnection<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConnection").finish_non_exhaustive()
    }
}
