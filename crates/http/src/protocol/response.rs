use bytes::Bytes;

use crate::protocol::header::CONTENT_TYPE;
use crate::protocol::{Headers, Status};
use crate::utils::encode_single_byte;

/// A response ready for the [`ResponseEncoder`](crate::codec::ResponseEncoder).
///
/// `Content-Length` is derived from `body` when the response is written; a
/// value placed in `headers` is never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: Status,
    headers: Headers,
    body: Option<Bytes>,
}

impl Response {
    /// A response with no headers and no body.
    pub fn status(status: Status) -> Self {
        Self { status, headers: Headers::new(), body: None }
    }

    /// Text taken from the request head goes back out byte for byte, in the
    /// same single-byte encoding it was read with. Text with chars above
    /// U+00FF has no such form and is sent as UTF-8.
    pub fn plain_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let body = match encode_single_byte(&text) {
            Some(bytes) => Bytes::from(bytes),
            None => Bytes::from(text),
        };

        Self::status(Status::Ok).with_header(CONTENT_TYPE, mime::TEXT_PLAIN.as_ref()).with_body(body)
    }

    pub fn octet_stream(bytes: impl Into<Bytes>) -> Self {
        Self::status(Status::Ok)
            .with_header(CONTENT_TYPE, mime::APPLICATION_OCTET_STREAM.as_ref())
            .with_body(bytes)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.put(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn status_code(&self) -> Status {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}
