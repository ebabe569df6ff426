//! Path based request dispatch.
//!
//! Routes are tried in order and the first match wins:
//!
//! | method | path              | response                                   |
//! |--------|-------------------|--------------------------------------------|
//! | GET    | `/`               | 200, no body                               |
//! | GET    | `/user-agent`     | 200, `User-Agent` value as text            |
//! | GET    | `/echo/<rest>`    | 200, `<rest>` as text                      |
//! | GET    | `/files/<name>`   | 200 with the file bytes, or 404            |
//! | POST   | `/files/<name>`   | 201 after writing the body to the file     |
//! | any    | anything else     | 404, no body                               |
//!
//! `<rest>` and `<name>` are the raw remainder of the path after the prefix.
//! `<name>` is joined under the working directory without any normalization,
//! so `..` segments can leave it.

use std::io;
use std::path::{Path, PathBuf};

use plain_http::handler::Handler;
use plain_http::protocol::{Method, Request, Response, Status};
use tracing::{debug, info};

const ECHO_PREFIX: &str = "/echo/";
const FILES_PREFIX: &str = "/files/";

/// The outcome of matching a request against the routing table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route<'req> {
    Root,
    UserAgent,
    Echo(&'req str),
    ReadFile(&'req str),
    WriteFile(&'req str),
    NotFound,
}

impl<'req> Route<'req> {
    pub fn resolve(method: Method, path: &'req str) -> Self {
        match method {
            Method::Get => {
                if path == "/" {
                    Route::Root
                } else if path == "/user-agent" {
                    Route::UserAgent
                } else if let Some(rest) = path.strip_prefix(ECHO_PREFIX) {
                    Route::Echo(rest)
                } else if let Some(name) = path.strip_prefix(FILES_PREFIX) {
                    Route::ReadFile(name)
                } else {
                    Route::NotFound
                }
            }
            Method::Post => match path.strip_prefix(FILES_PREFIX) {
                Some(name) => Route::WriteFile(name),
                None => Route::NotFound,
            },
        }
    }
}

/// Stateless dispatcher; the working directory is fixed at construction.
#[derive(Debug, Clone)]
pub struct Router {
    directory: PathBuf,
}

impl Router {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into() }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Maps a request to its response.
    ///
    /// Only a failed file write is an error; a file that cannot be read is a
    /// 404 like any other miss.
    pub async fn dispatch(&self, request: &Request) -> io::Result<Response> {
        let route = Route::resolve(request.method(), request.path());
        debug!(?route, "resolved route");

        match route {
            Route::Root => Ok(Response::status(Status::Ok)),
            Route::UserAgent => Ok(Response::plain_text(request.headers().user_agent().unwrap_or_default())),
            Route::Echo(rest) => Ok(Response::plain_text(rest)),
            Route::ReadFile(name) => Ok(self.read_file(name).await),
            Route::WriteFile(name) => {
                let body = request.body().map(|b| &b[..]).unwrap_or_default();
                self.write_file(name, body).await?;
                Ok(Response::status(Status::Created))
            }
            Route::NotFound => Ok(Response::status(Status::NotFound)),
        }
    }

    async fn read_file(&self, name: &str) -> Response {
        let path = self.resolve(name);
        match tokio::fs::read(&path).await {
            Ok(content) => {
                info!(path = %path.display(), size = content.len(), "read file");
                Response::octet_stream(content)
            }
            Err(e) => {
                info!(path = %path.display(), cause = %e, "file not readable");
                Response::status(Status::NotFound)
            }
        }
    }

    async fn write_file(&self, name: &str, content: &[u8]) -> io::Result<()> {
        let path = self.resolve(name);
        tokio::fs::write(&path, content).await?;
        info!(path = %path.display(), size = content.len(), "wrote file");
        Ok(())
    }

    /// `name` always stays relative to the working directory, even when it
    /// starts with `/`; other segments are used as-is.
    fn resolve(&self, name: &str) -> PathBuf {
        self.directory.join(name.trim_start_matches('/'))
    }
}

impl Handler for Router {
    type Error = io::Error;

    async fn call(&self, req: Request) -> Result<Response, Self::Error> {
        self.dispatch(&req).await
    }
}
