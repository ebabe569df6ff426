//! HTTP/1.1 file and echo server on top of [`plain_http`].
//!
//! - [`config`]: command-line configuration
//! - [`router`]: the routing table and its file access
//! - [`server`]: the accept loop, one task per connection

pub mod config;
pub mod router;
pub mod server;

pub use config::Config;
pub use router::Router;
pub use server::{Server, ServerError};
