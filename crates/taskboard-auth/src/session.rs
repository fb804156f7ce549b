//! Session data structures

use serde::Serialize;
use taskboard_api::Role;

/// An authenticated identity. Only constructed whole, so a token never
/// exists without its role; the user id is best-effort (claims decode may
/// fail on a token the server still accepts).
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque bearer token issued by the authentication service
    pub token: String,
    pub role: Role,
    /// Identity extracted from the token's claims, if they decoded
    pub user_id: Option<String>,
}

impl Session {
    pub fn new(token: String, role: Role, user_id: Option<String>) -> Self {
        Self {
            token,
            role,
            user_id,
        }
    }
}

/// Login payload. Transient - never persisted, never logged in full.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Navigation targets returned by session operations. The caller owns
/// navigation; the session manager only decides where to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Admin landing page
    AdminHome,
    /// General dashboard
    Dashboard,
    /// Login page
    Login,
}

impl Route {
    /// Post-login landing page, branched by role
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Route::AdminHome,
            Role::Student => Route::Dashboard,
        }
    }

    pub fn as_path(&self) -> &'static str {
        match self {
            Route::AdminHome => "/admin",
            Route::Dashboard => "/dashboard",
            Route::Login => "/login",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path())
    }
}
