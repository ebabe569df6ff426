//! HTTP connection handling module
//!
//! - [`HttpConnection`]: drives one connection through decode, handle, encode
//! - [`ConnectionId`]: process-wide identifier used to correlate log lines
//!
//! One request is served per connection: there is no keep-alive, pipelining
//! or expect-continue handling.

mod http_connection;

pub use http_connection::ConnectionId;
pub use http_connection::HttpConnection;
