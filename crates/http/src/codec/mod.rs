//! HTTP codec module for encoding and decoding HTTP messages
//!
//! The wire format is handled by `tokio_util` codecs over `BytesMut`, so the
//! same code drives a socket through `FramedRead`/`FramedWrite` and can be
//! exercised directly on in-memory buffers.
//!
//! - Request handling:
//!   - [`LineDecoder`]: CRLF-terminated lines over raw bytes
//!   - [`RequestDecoder`]: request line, headers and `Content-Length` body
//!
//! - Response handling:
//!   - [`ResponseEncoder`]: status line, headers, computed `Content-Length`, body

mod body;
mod header;
mod line_decoder;
mod request_decoder;
mod response_encoder;

pub use line_decoder::LineDecoder;
pub use request_decoder::RequestDecoder;
pub use response_encoder::ResponseEncoder;
