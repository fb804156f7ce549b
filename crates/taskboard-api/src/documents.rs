//! GraphQL documents
//!
//! Raw query/mutation text sent to the backend. Field sets match the
//! payload types in `types.rs`.

pub const LOGIN_MUTATION: &str = r#"
mutation Login($username: String!, $password: String!) {
  login(username: $username, password: $password) {
    token
    role
  }
}
"#;

pub const SIGNUP_MUTATION: &str = r#"
mutation Signup(
  $username: String!
  $password: String!
  $role: Role
  $name: String!
  $universityId: String!
) {
  signup(
    username: $username
    password: $password
    role: $role
    name: $name
    universityId: $universityId
  ) {
    id
    username
    role
    name
    universityId
  }
}
"#;

/// Organization-wide listing. Admin only.
pub const PROJECTS_QUERY: &str = r#"
query {
  projects {
    id
    title
    description
    students
    category
    progress
    startDate
    endDate
    status
  }
}
"#;

/// Listing scoped to the caller's own assignments. The backend derives the
/// caller from the bearer token; no variables.
pub const MY_PROJECTS_QUERY: &str = r#"
query {
  myProjects {
    id
    title
    description
    students
    category
    progress
    startDate
    endDate
    status
  }
}
"#;

pub const TASKS_QUERY: &str = r#"
query {
  tasks {
    id
    projectTitle
    projectId
    taskName
    description
    assignedStudent
    status
    dueDate
    createdAt
    updatedAt
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_name_their_root_fields() {
        assert!(LOGIN_MUTATION.contains("login("));
        assert!(SIGNUP_MUTATION.contains("signup("));
        assert!(PROJECTS_QUERY.contains("projects {"));
        assert!(MY_PROJECTS_QUERY.contains("myProjects {"));
        assert!(TASKS_QUERY.contains("tasks {"));
    }
}
