//! Transport error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but the GraphQL layer reported errors
    #[error("GraphQL error: {0}")]
    Graphql(String),

    /// 200 response with neither data nor errors - a broken envelope
    #[error("response carried no data")]
    MissingData,
}
