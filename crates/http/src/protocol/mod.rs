//! Core HTTP protocol types.
//!
//! - [`Method`], [`Status`]: the closed sets of methods accepted and statuses emitted
//! - [`Headers`]: case-insensitive header map with deterministic ordering
//! - [`RequestHead`], [`Request`]: what the request decoder produces
//! - [`Response`]: what a handler returns and the response encoder writes
//! - [`PayloadSize`]: how many body bytes follow a head
//! - [`HttpError`], [`ParseError`], [`SendError`]: the error taxonomy
//!
//! Every connection owns its own instances of these; nothing is shared.

mod method;
pub use method::Method;

mod status;
pub use status::Status;

pub mod header;
pub use header::Headers;

mod message;
pub use message::PayloadSize;

mod request;
pub use request::Request;
pub use request::RequestHead;

mod response;
pub use response::Response;

mod error;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;
