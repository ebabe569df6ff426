//! A minimal HTTP/1.1 protocol layer
//!
//! This crate reads exactly one request from a byte stream, hands it to a
//! handler, and writes exactly one response back before the connection is
//! closed. It is built on tokio and `tokio_util` codecs, and keeps the wire
//! format deliberately small:
//!
//! - `GET` and `POST` only, `HTTP/1.1` only
//! - CRLF-terminated request line and headers, decoded byte-for-char
//! - request bodies framed by `Content-Length` and read as raw bytes
//! - responses framed by a `Content-Length` computed from the body
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//! use tracing::{error, info, warn, Instrument};
//! use plain_http::connection::{ConnectionId, HttpConnection};
//! use plain_http::handler::make_handler;
//! use plain_http::protocol::{Request, Response};
//!
//! #[tokio::main]
//! async fn main() {
//!     let tcp_listener = match TcpListener::bind("127.0.0.1:4221").await {
//!         Ok(tcp_listener) => tcp_listener,
//!         Err(e) => {
//!             error!(cause = %e, "bind server error");
//!             return;
//!         }
//!     };
//!
//!     let handler = Arc::new(make_handler(hello_world));
//!
//!     loop {
//!         let (tcp_stream, _remote_addr) = match tcp_listener.accept().await {
//!             Ok(stream_and_addr) => stream_and_addr,
//!             Err(e) => {
//!                 warn!(cause = %e, "failed to accept");
//!                 continue;
//!             }
//!         };
//!
//!         let handler = handler.clone();
//!         let span = tracing::info_span!("connection", id = %ConnectionId::next());
//!
//!         tokio::spawn(
//!             async move {
//!                 let (reader, writer) = tcp_stream.into_split();
//!                 let connection = HttpConnection::new(reader, writer);
//!                 if let Err(e) = connection.process(handler).await {
//!                     error!(cause = %e, "connection failed");
//!                 }
//!             }
//!             .instrument(span),
//!         );
//!     }
//! }
//!
//! async fn hello_world(request: Request) -> Result<Response, io::Error> {
//!     info!(path = request.path(), "request path");
//!     Ok(Response::plain_text("Hello World!"))
//! }
//! ```
//!
//! # Architecture
//!
//! - [`codec`]: line decoding, request decoding and response encoding
//! - [`protocol`]: request/response types, headers and errors
//! - [`handler`]: the [`handler::Handler`] trait a router implements
//! - [`connection`]: drives one connection from bytes to bytes
//!
//! # Error Handling
//!
//! - [`protocol::ParseError`]: malformed requests, plus `Io` for transport failures while reading
//! - [`protocol::SendError`]: transport failures while writing
//! - [`protocol::HttpError`]: top-level error of a connection
//!
//! None of them produce a response: the connection is closed instead.
//!
//! # Limitations
//!
//! - No keep-alive, pipelining, chunked transfer encoding, compression or TLS
//! - No header folding
//! - Maximum request head size: 8KB

pub mod codec;
pub mod connection;
pub mod handler;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
