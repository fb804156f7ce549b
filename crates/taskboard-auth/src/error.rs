//! Authentication error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The service rejected the credentials. Deliberately generic: the
    /// message never says which of username/password was wrong.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("token decode failed: {0}")]
    TokenDecode(String),

    #[error("storage error: {0}")]
    Storage(#[from] taskboard_storage::StorageError),

    #[error("transport error: {0}")]
    Transport(#[from] taskboard_transport::TransportError),
}
