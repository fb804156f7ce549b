//! Taskboard Session Management
//!
//! Owns the authenticated identity for the whole client:
//! - login/logout against the GraphQL authentication service
//! - restore of a persisted session on startup (no network)
//! - the current token/role/user-id exposed to every collaborator
//!
//! The session is either Anonymous or Authenticated. The only way in is a
//! successful `login()` or a `restore()` that finds stored credentials; the
//! only way out is `logout()`. Token expiry is not tracked client-side - an
//! expired token surfaces as a failed authenticated request.

mod claims;
mod error;
mod gateway;
mod manager;
mod session;
mod store;

pub use error::AuthError;
pub use gateway::{AuthGateway, GraphqlAuthGateway};
pub use manager::SessionManager;
pub use session::{Credentials, Route, Session};

pub type Result<T> = std::result::Result<T, AuthError>;
