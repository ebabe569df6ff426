use std::error::Error;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request error: {source}")]
    RequestError {
        #[from]
        source: ParseError,
    },

    #[error("response error: {source}")]
    ResponseError {
        #[from]
        source: SendError,
    },

    #[error("handler error: {source}")]
    HandlerError { source: Box<dyn Error + Send + Sync> },
}

impl HttpError {
    pub fn handler<E: Into<Box<dyn Error + Send + Sync>>>(e: E) -> Self {
        Self::HandlerError { source: e.into() }
    }

    /// Returns true if the peer sent bytes that are not a valid request.
    ///
    /// Everything else (socket failures, premature close, filesystem write
    /// failures) is a transport failure of this connection.
    pub fn is_malformed_request(&self) -> bool {
        matches!(self, HttpError::RequestError { source } if !source.is_io())
    }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("header size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHeader { current_size: usize, max_size: usize },

    #[error("unknown method: {0:?}")]
    UnknownMethod(String),

    #[error("malformed path: {0:?}")]
    MalformedPath(String),

    #[error("unsupported version: {0:?}")]
    UnsupportedVersion(String),

    #[error("trailing content in request line: {0:?}")]
    TrailingContent(String),

    #[error("malformed header: {0:?}")]
    MalformedHeader(String),

    #[error("body size too large, declared: {length} exceed the limit {max_size}")]
    TooLargeBody { length: u64, max_size: u64 },

    #[error("invalid content-length header: {reason}")]
    InvalidContentLength { reason: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn too_large_header(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHeader { current_size, max_size }
    }

    pub fn too_large_body(length: u64, max_size: u64) -> Self {
        Self::TooLargeBody { length, max_size }
    }

    pub fn invalid_content_length<S: ToString>(str: S) -> Self {
        Self::InvalidContentLength { reason: str.to_string() }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }

    #[inline]
    pub fn is_io(&self) -> bool {
        matches!(self, ParseError::Io { .. })
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_and_transport_are_distinct() {
        let malformed = HttpError::from(ParseError::UnknownMethod("PATCH".into()));
        assert!(malformed.is_malformed_request());

        let oversized = HttpError::from(ParseError::too_large_body(u64::MAX, 1024));
        assert!(oversized.is_malformed_request());

        let early_close = HttpError::from(ParseError::io(io::Error::from(io::ErrorKind::UnexpectedEof)));
        assert!(!early_close.is_malformed_request());

        let write_failure = HttpError::handler(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!write_failure.is_malformed_request());
    }
}
