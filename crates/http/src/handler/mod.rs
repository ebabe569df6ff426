//! The seam between the connection and whatever turns a request into a response.

use std::error::Error;

use crate::protocol::{Request, Response};

/// Turns one [`Request`] into one [`Response`].
///
/// An `Err` is not sent to the peer: it fails the connection, which is then
/// closed without a response.
#[trait_variant::make(Handler: Send)]
pub trait LocalHandler {
    type Error: Into<Box<dyn Error + Send + Sync>>;

    async fn call(&self, req: Request) -> Result<Response, Self::Error>;
}

#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

impl<Err, F, Fut> Handler for HandlerFn<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Err: Into<Box<dyn Error + Send + Sync>>,
    Fut: Future<Output = Result<Response, Err>> + Send,
{
    type Error = Err;

    async fn call(&self, req: Request) -> Result<Response, Self::Error> {
        (self.f)(req).await
    }
}

pub fn make_handler<F, Err, Ret>(f: F) -> HandlerFn<F>
where
    Err: Into<Box<dyn Error + Send + Sync>>,
    Ret: Future<Output = Result<Response, Err>>,
    F: Fn(Request) -> Ret,
{
    HandlerFn { f }
}
