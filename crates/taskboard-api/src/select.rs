//! Role-scoped query selection
//!
//! Admins see every project in the organization; students see only their
//! own. The mapping is a total match over `Role` - there is no fallback
//! branch, so a new role cannot silently inherit either scope.

use crate::documents::{MY_PROJECTS_QUERY, PROJECTS_QUERY};
use crate::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectScope {
    /// All projects in the organization
    Organization,
    /// Projects the caller is assigned to
    Mine,
}

/// A selected projects query: which document to send and which root field
/// the response will carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectsQuery {
    pub scope: ProjectScope,
    pub document: &'static str,
}

pub fn projects_query(role: Role) -> ProjectsQuery {
    match role {
        Role::Admin => ProjectsQuery {
            scope: ProjectScope::Organization,
            document: PROJECTS_QUERY,
        },
        Role::Student => ProjectsQuery {
            scope: ProjectScope::Mine,
            document: MY_PROJECTS_QUERY,
        },
    }
}
