use crate::codec::header::HeaderEncoder;
use crate::protocol::{PayloadSize, Response, SendError};
use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;

/// Serializes a whole [`Response`]: head, blank line, then the body if any.
///
/// No implicit headers (`Connection`, `Date`, ...) are added.
#[derive(Debug, Default)]
pub struct ResponseEncoder {
    header_encoder: HeaderEncoder,
}

impl ResponseEncoder {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Encoder<Response> for ResponseEncoder {
    type Error = SendError;

    fn encode(&mut self, item: Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let payload_size = match item.body() {
            Some(body) => PayloadSize::new_length(body.len() as u64),
            None => PayloadSize::new_empty(),
        };

        self.header_encoder.encode((item.status_code(), item.headers(), payload_size), dst)?;

        if let Some(body) = item.body() {
            dst.put_slice(body);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::header::CONTENT_LENGTH;
    use crate::protocol::Status;

    fn encode(response: Response) -> Vec<u8> {
        let mut dst = BytesMut::new();
        ResponseEncoder::new().encode(response, &mut dst).unwrap();
        dst.to_vec()
    }

    #[test]
    fn status_without_body() {
        assert_eq!(encode(Response::status(Status::Ok)), b"HTTP/1.1 200 OK\r\n\r\n");
    }

    #[test]
    fn plain_text_body() {
        assert_eq!(
            encode(Response::plain_text("hello")),
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello"
        );
    }

    #[test]
    fn empty_body_still_declares_length() {
        assert_eq!(
            encode(Response::plain_text("")),
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n"
        );
    }

    #[test]
    fn stale_content_length_never_reaches_the_wire() {
        let response = Response::octet_stream(&b"abc"[..]).with_header(CONTENT_LENGTH, "42");
        let encoded = String::from_utf8(encode(response)).unwrap();

        assert!(!encoded.contains("42"));
        assert_eq!(encoded.matches("Content-Length").count(), 1);
        assert!(encoded.ends_with("Content-Length: 3\r\n\r\nabc"));
    }

    #[test]
    fn length_counts_bytes_not_chars() {
        let encoded = encode(Response::plain_text("h\u{20ac}llo"));
        assert!(encoded.ends_with("Content-Length: 7\r\n\r\nh\u{20ac}llo".as_bytes()));
    }

    #[test]
    fn single_byte_text_keeps_its_length() {
        let encoded = encode(Response::plain_text("h\u{e9}llo"));
        assert!(encoded.ends_with(b"Content-Length: 5\r\n\r\nh\xe9llo"));
    }
}
