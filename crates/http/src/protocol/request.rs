//! Parsed request types.
//!
//! A [`RequestHead`] is what the header decoder produces: method, path and
//! headers. Attaching the body read by the payload decoder turns it into a
//! [`Request`], which is never mutated afterwards.

use bytes::Bytes;

use crate::protocol::{Headers, Method};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    method: Method,
    path: String,
    headers: Headers,
}

impl RequestHead {
    pub fn new(method: Method, path: impl Into<String>, headers: Headers) -> Self {
        Self { method, path: path.into(), headers }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Attaches a body to this head, converting it into a full [`Request`].
    pub fn body(self, body: Option<Bytes>) -> Request {
        Request { head: self, body }
    }
}

/// One request per connection. `body` is present only for `POST`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    head: RequestHead,
    body: Option<Bytes>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>, headers: Headers, body: Option<Bytes>) -> Self {
        RequestHead::new(method, path, headers).body(body)
    }

    pub fn method(&self) -> Method {
        self.head.method()
    }

    pub fn path(&self) -> &str {
        self.head.path()
    }

    pub fn headers(&self) -> &Headers {
        self.head.headers()
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}
