//! Taskboard Transport
//!
//! GraphQL-over-HTTP client. A `ClientFactory` stamps out per-request
//! clients carrying the caller's current bearer token, so every outgoing
//! request reflects the session state at the moment it is issued.
//!
//! Requests are not retried and not cancellable once sent; timeouts are
//! whatever the underlying HTTP stack enforces.

mod client;
mod error;

pub use client::{ClientFactory, GraphqlClient};
pub use error::TransportError;

pub type Result<T> = std::result::Result<T, TransportError>;
