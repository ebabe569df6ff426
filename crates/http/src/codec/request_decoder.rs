//! HTTP request decoder module
//!
//! This module decodes exactly one HTTP request from a byte stream. It works
//! as a two phase state machine:
//!
//! - Head: [`HeaderDecoder`] reads the request line and header block
//! - Body: for `POST`, [`LengthDecoder`] reads `Content-Length` raw bytes
//!
//! # Example
//!
//! ```no_run
//! use plain_http::codec::RequestDecoder;
//! use tokio_util::codec::Decoder;
//! use bytes::BytesMut;
//!
//! let mut decoder = RequestDecoder::new();
//! let mut buffer = BytesMut::from(&b"GET / HTTP/1.1\r\n\r\n"[..]);
//! let request = decoder.decode(&mut buffer);
//! ```

use crate::codec::body::LengthDecoder;
use crate::codec::header::HeaderDecoder;
use crate::protocol::{ParseError, PayloadSize, Request, RequestHead};
use bytes::BytesMut;
use tokio_util::codec::Decoder;

/// A decoder for HTTP requests that handles both head and body
///
/// The decoder maintains its state through the `payload_decoder` field:
/// - `None`: Currently parsing the head
/// - `Some(_)`: Head is parsed, waiting for the body bytes
#[derive(Debug, Default)]
pub struct RequestDecoder {
    header_decoder: HeaderDecoder,
    payload_decoder: Option<(RequestHead, LengthDecoder)>,
}

impl RequestDecoder {
    /// Creates a new `RequestDecoder` instance
    pub fn new() -> Self {
        Default::default()
    }

    fn decode_request(&mut self, src: &mut BytesMut, eof: bool) -> Result<Option<Request>, ParseError> {
        if self.payload_decoder.is_none() {
            let head = if eof { self.header_decoder.decode_eof(src)? } else { self.header_decoder.decode(src)? };

            match head {
                Some((head, PayloadSize::Empty)) => return Ok(Some(head.body(None))),
                Some((head, PayloadSize::Length(length))) => {
                    self.payload_decoder = Some((head, LengthDecoder::new(length)));
                }
                None => return Ok(None),
            }
        }

        let Some((_, length_decoder)) = &mut self.payload_decoder else {
            return Ok(None);
        };

        let body = if eof { length_decoder.decode_eof(src)? } else { length_decoder.decode(src)? };

        Ok(body.and_then(|body| self.payload_decoder.take().map(|(head, _)| head.body(Some(body)))))
    }
}

impl Decoder for RequestDecoder {
    type Item = Request;
    type Error = ParseError;

    /// Attempts to decode an HTTP request from the provided buffer
    ///
    /// # Returns
    ///
    /// - `Ok(Some(request))`: Head and, for `POST`, the whole body were decoded
    /// - `Ok(None)`: Need more data to proceed
    /// - `Err(_)`: The request is malformed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        self.decode_request(src, false)
    }

    /// Like [`decode`](Self::decode), but the stream has ended: a body shorter
    /// than its `Content-Length` fails with [`ParseError::Io`].
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        self.decode_request(src, true)
    }
}
