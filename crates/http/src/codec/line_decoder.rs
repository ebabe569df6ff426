//! CRLF line decoder for the request head.
//!
//! A line ends at `\r\n` or at end of stream. A `\r` that is not directly
//! followed by `\n` is ordinary data and stays in the line. The head is a
//! single-byte encoding, so every byte maps to exactly one `char`; no
//! multi-byte decoding happens before the body.

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;

use crate::protocol::ParseError;
use crate::utils::decode_single_byte;

const CRLF: &[u8] = b"\r\n";

/// Decodes the next logical line, with its terminator consumed and excluded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineDecoder {
    /// Where to resume searching for the terminator, so a partially
    /// buffered line is not rescanned from the start on every read.
    next_index: usize,
}

impl LineDecoder {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Decoder for LineDecoder {
    type Item = String;
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let start = self.next_index.min(src.len());
        match src[start..].windows(CRLF.len()).position(|window| window == CRLF) {
            Some(offset) => {
                let line = src.split_to(start + offset);
                src.advance(CRLF.len());
                self.next_index = 0;
                Ok(Some(decode_single_byte(&line)))
            }
            None => {
                // a trailing '\r' may be the first half of a terminator split across reads
                self.next_index = src.len().saturating_sub(1);
                Ok(None)
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }

        self.next_index = 0;
        if src.is_empty() {
            return Ok(None);
        }

        let line = src.split();
        Ok(Some(decode_single_byte(&line)))
    }
}
