//! HTTP request head decoder.
//!
//! Reads the request line and the header block line by line through a
//! [`LineDecoder`] and produces a [`RequestHead`] together with the
//! [`PayloadSize`] of the body that follows.
//!
//! # Validation order
//!
//! The request line is split on runs of whitespace and checked in a fixed
//! order, so a line with several problems always reports the first one:
//!
//! 1. method is `GET` or `POST`
//! 2. path starts with `/`
//! 3. version is exactly `HTTP/1.1`
//! 4. nothing follows the version
//!
//! A missing token is checked as an empty token.
//!
//! # Limits
//!
//! - Maximum head size: 8KB, request line and header lines with terminators
//! - Maximum declared POST body: 64MB

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::codec::LineDecoder;
use crate::ensure;
use crate::protocol::{Headers, Method, ParseError, PayloadSize, RequestHead};

/// Maximum size in bytes allowed for the entire request head
const MAX_HEADER_BYTES: usize = 8 * 1024;

/// Maximum declared POST body size; the body is buffered whole before the
/// handler runs.
const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

const HTTP_1_1: &str = "HTTP/1.1";

/// Decoder for the request head implementing the [`Decoder`] trait.
///
/// The decoder is resumable: the request line and every complete header line
/// are consumed from the buffer as soon as they arrive, and decoding picks up
/// where it stopped once more bytes are buffered.
#[derive(Debug, Default)]
pub struct HeaderDecoder {
    line_decoder: LineDecoder,
    request_line: Option<(Method, String)>,
    headers: Headers,
    head_size: usize,
}

impl HeaderDecoder {
    pub fn new() -> Self {
        Default::default()
    }

    fn decode_lines(&mut self, src: &mut BytesMut, eof: bool) -> Result<Option<(RequestHead, PayloadSize)>, ParseError> {
        loop {
            let before = src.len();
            let line = if eof { self.line_decoder.decode_eof(src)? } else { self.line_decoder.decode(src)? };
            self.head_size += before - src.len();

            let Some(line) = line else {
                ensure!(
                    self.head_size + src.len() <= MAX_HEADER_BYTES,
                    ParseError::too_large_header(self.head_size + src.len(), MAX_HEADER_BYTES)
                );

                // the stream ended inside the header block: the head is whatever was read
                if eof && self.request_line.is_some() {
                    return self.finish().map(Some);
                }
                return Ok(None);
            };

            ensure!(self.head_size <= MAX_HEADER_BYTES, ParseError::too_large_header(self.head_size, MAX_HEADER_BYTES));

            if self.request_line.is_none() {
                self.request_line = Some(parse_request_line(&line)?);
                continue;
            }

            if line.is_empty() {
                return self.finish().map(Some);
            }

            let (name, value) = parse_header_line(&line)?;
            trace!(name, value, "parsed header");
            self.headers.put(name, value);
        }
    }

    fn finish(&mut self) -> Result<(RequestHead, PayloadSize), ParseError> {
        let this = std::mem::take(self);
        let Some((method, path)) = this.request_line else {
            // only called once the request line has been read
            return Err(ParseError::UnknownMethod(String::new()));
        };

        let payload_size = parse_payload(method, &this.headers)?;
        trace!(head_size = this.head_size, ?payload_size, "parsed request head");
        Ok((RequestHead::new(method, path, this.headers), payload_size))
    }
}

impl Decoder for HeaderDecoder {
    type Item = (RequestHead, PayloadSize);
    type Error = ParseError;

    /// Attempts to decode a request head from the provided bytes buffer.
    ///
    /// # Returns
    ///
    /// - `Ok(Some((head, payload_size)))` once the blank line ending the head was read
    /// - `Ok(None)` if more data is needed
    /// - `Err(ParseError)` if the request line or a header line is malformed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        self.decode_lines(src, false)
    }

    /// At end of stream a partial last line still counts as a line, and a
    /// header block that was never terminated ends where the stream ends.
    /// A stream that closed before the request line yields nothing.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        self.decode_lines(src, true)
    }
}

fn parse_request_line(line: &str) -> Result<(Method, String), ParseError> {
    let mut tokens = line.split_ascii_whitespace();

    let method = tokens.next().unwrap_or_default().parse::<Method>()?;

    let path = tokens.next().unwrap_or_default();
    ensure!(path.starts_with('/'), ParseError::MalformedPath(path.to_string()));

    let version = tokens.next().unwrap_or_default();
    ensure!(version == HTTP_1_1, ParseError::UnsupportedVersion(version.to_string()));

    if let Some(trailing) = tokens.next() {
        return Err(ParseError::TrailingContent(trailing.to_string()));
    }

    Ok((method, path.to_string()))
}

/// Splits on the first colon only, so values may contain colons.
fn parse_header_line(line: &str) -> Result<(&str, &str), ParseError> {
    let (name, value) = line.split_once(':').ok_or_else(|| ParseError::MalformedHeader(line.to_string()))?;
    Ok((name, value.trim_start()))
}

/// `GET` bodies are never read, even with a `Content-Length`.
fn parse_payload(method: Method, headers: &Headers) -> Result<PayloadSize, ParseError> {
    if !method.need_body() {
        return Ok(PayloadSize::new_empty());
    }

    let length = headers.content_length()?;
    ensure!(length <= MAX_BODY_BYTES, ParseError::too_large_body(length, MAX_BODY_BYTES));
    Ok(PayloadSize::new_length(length))
}
