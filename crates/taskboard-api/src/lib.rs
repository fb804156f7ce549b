//! Taskboard API Contract
//!
//! The wire surface shared with the GraphQL backend:
//! - query and mutation documents
//! - typed request/response payloads (no loosely-typed maps)
//! - the `Role` enum and the role-scoped projects query selection

mod documents;
mod role;
mod select;
mod types;

pub use documents::{
    LOGIN_MUTATION, MY_PROJECTS_QUERY, PROJECTS_QUERY, SIGNUP_MUTATION, TASKS_QUERY,
};
pub use role::Role;
pub use select::{projects_query, ProjectScope, ProjectsQuery};
pub use types::{
    DashboardStats, LoginData, LoginPayload, MyProjectsData, Project, ProjectsData, SignupAccount,
    SignupData, SignupRequest, Task, TasksData,
};
