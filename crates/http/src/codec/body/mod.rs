//! Request body decoding.
//!
//! Bodies are framed only by `Content-Length`; chunked transfer encoding is
//! not supported.

mod length_decoder;

pub use length_decoder::LengthDecoder;
