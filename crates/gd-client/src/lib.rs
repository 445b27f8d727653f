//! gd-client
//!
//! Thin client over `gd-protocol`: configuration, a pluggable transport
//! and one method per supported endpoint.

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::GdClient;
pub use config::{ClientConfig, DEFAULT_HOST};
pub use error::ClientError;
pub use transport::{Transport, TransportError};
