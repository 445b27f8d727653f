//! Transport boundary.
//!
//! The actual network call is not part of this workspace. Anything that
//! can POST a form-encoded body to `host + path` and hand back the
//! response text implements [`Transport`].

use std::sync::Arc;

use thiserror::Error;

/// Failures of the network call itself.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not reach the server.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Synchronous POST of an encoded request body.
pub trait Transport {
    /// Send `body` to `path` and return the raw response text.
    fn send(&self, path: &str, body: &str) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, path: &str, body: &str) -> Result<String, TransportError> {
        (**self).send(path, body)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, path: &str, body: &str) -> Result<String, TransportError> {
        (**self).send(path, body)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, path: &str, body: &str) -> Result<String, TransportError> {
        (**self).send(path, body)
    }
}
