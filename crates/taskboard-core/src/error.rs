//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("storage error: {0}")]
    Storage(#[from] taskboard_storage::StorageError),

    #[error("authentication error: {0}")]
    Auth(#[from] taskboard_auth::AuthError),

    #[error("transport error: {0}")]
    Transport(#[from] taskboard_transport::TransportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    /// A role-gated fetch was attempted without a session
    #[error("not authenticated")]
    NotAuthenticated,
}
