//! HTTP response head encoder.
//!
//! Writes the status line, the response's own headers and the framing
//! header. `Content-Length` is always computed from the body: a value the
//! handler put into the header map is skipped, never copied, so the framing
//! on the wire cannot disagree with the bytes that follow.

use crate::protocol::header::CONTENT_LENGTH;
use crate::protocol::{Headers, PayloadSize, SendError, Status};

use bytes::{BufMut, BytesMut};

use std::io;
use std::io::Write;
use tokio_util::codec::Encoder;

/// Initial buffer size allocated for header serialization
const INIT_HEADER_SIZE: usize = 4 * 1024;

/// Encoder for the response head implementing the [`Encoder`] trait.
///
/// `PayloadSize::Length(n)` emits `Content-Length: n`, `PayloadSize::Empty`
/// emits no framing header at all.
#[derive(Debug, Default)]
pub struct HeaderEncoder;

impl Encoder<(Status, &Headers, PayloadSize)> for HeaderEncoder {
    type Error = SendError;

    fn encode(&mut self, item: (Status, &Headers, PayloadSize), dst: &mut BytesMut) -> Result<(), Self::Error> {
        let (status, headers, payload_size) = item;

        dst.reserve(INIT_HEADER_SIZE);
        write!(FastWrite(dst), "HTTP/1.1 {} {}\r\n", status.code(), status.reason())?;

        for (name, value) in headers.iter().filter(|(name, _)| !name.eq_ignore_ascii_case(CONTENT_LENGTH)) {
            put_header(dst, name.as_bytes(), value.as_bytes());
        }

        if let PayloadSize::Length(n) = payload_size {
            put_header(dst, CONTENT_LENGTH.as_bytes(), n.to_string().as_bytes());
        }

        dst.put_slice(b"\r\n");
        Ok(())
    }
}

#[inline]
fn put_header(dst: &mut BytesMut, name: &[u8], value: &[u8]) {
    dst.put_slice(name);
    dst.put_slice(b": ");
    dst.put_slice(value);
    dst.put_slice(b"\r\n");
}

/// Fast writer implementation for writing to BytesMut.
///
/// This is an optimization to avoid unnecessary bounds checking when writing
/// to the bytes buffer, since we've already reserved enough space.
struct FastWrite<'a>(&'a mut BytesMut);

impl Write for FastWrite<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
