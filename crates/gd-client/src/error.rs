//! Client-facing error type.
//!
//! Keeps the three failure sources apart so callers can tell a network
//! problem from a response the codec could not make sense of. A "no
//! results" response is not an error: it decodes to an empty page or
//! `None`.

use gd_protocol::{DecodeError, EncodeError};
use thiserror::Error;

use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("could not decode response: {0}")]
    Decode(#[from] DecodeError),

    #[error("could not encode request: {0}")]
    Encode(#[from] EncodeError),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Decode(_))
    }
}
