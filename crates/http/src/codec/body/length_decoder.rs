//! Decoder for request bodies framed by the Content-Length header.
//!
//! The whole body is delivered as a single [`Bytes`], since a handler needs
//! all of it before it can write the target file.

use std::io;

use crate::protocol::ParseError;
use bytes::{Bytes, BytesMut};
use tokio_util::codec::Decoder;

/// A decoder for a body of exactly `length` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthDecoder {
    /// The number of bytes the body must contain
    length: u64,
}

impl LengthDecoder {
    /// Creates a new LengthDecoder instance.
    ///
    /// # Arguments
    /// * `length` - The body length in bytes, specified by Content-Length header
    pub fn new(length: u64) -> Self {
        Self { length }
    }
}

impl Decoder for LengthDecoder {
    type Item = Bytes;
    type Error = ParseError;

    /// # Returns
    /// * `Ok(Some(bytes))` once `length` bytes are buffered, bytes beyond the body stay in `src`
    /// * `Ok(None)` when more data is needed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if (src.len() as u64) < self.length {
            return Ok(None);
        }

        // fits in usize: it is no longer than the buffer
        let length = self.length as usize;
        Ok(Some(src.split_to(length).freeze()))
    }

    /// A stream that ends before the declared length is a transport failure,
    /// not a malformed request.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(src)? {
            Some(body) => Ok(Some(body)),
            None => Err(ParseError::io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("connection closed after {} of {} body bytes", src.len(), self.length),
            ))),
        }
    }
}
