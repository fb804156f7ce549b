//! Taskboard Core
//!
//! Application wiring for the Taskboard dashboard client. The session
//! manager owns the authenticated identity; this crate builds it, points
//! the transport at the configured backend, and exposes the role-gated
//! data fetchers the pages consume.

mod app;
mod config;
mod error;

pub use app::App;
pub use config::Config;
pub use error::CoreError;

// Re-export the surface collaborators work with
pub use taskboard_api::{
    projects_query, DashboardStats, Project, ProjectScope, ProjectsQuery, Role, SignupAccount,
    SignupRequest, Task,
};
pub use taskboard_auth::{
    AuthError, AuthGateway, Credentials, GraphqlAuthGateway, Route, Session, SessionManager,
};
pub use taskboard_storage::{Database, StorageError};
pub use taskboard_transport::{ClientFactory, GraphqlClient, TransportError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
