//! Request head decoding and response head encoding.
//!
//! - [`HeaderDecoder`]: request line and header block, line by line
//! - [`HeaderEncoder`]: status line, headers and the computed `Content-Length`

mod header_decoder;
mod header_encoder;

pub use header_decoder::HeaderDecoder;
pub use header_encoder::HeaderEncoder;
