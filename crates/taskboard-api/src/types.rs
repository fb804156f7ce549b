//! Typed payloads
//!
//! Every response shape is a fixed struct keyed to its document; the
//! `*Data` wrappers mirror the GraphQL root field so the transport layer
//! can deserialize the envelope's `data` member directly.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// What the login mutation returns: an opaque bearer token plus the
/// account's role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPayload {
    pub token: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub login: LoginPayload,
}

/// Self-service account creation request. Signup always produces a student
/// account; admin accounts are provisioned out of band.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub university_id: String,
}

/// The account echoed back by a successful signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupAccount {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub name: String,
    pub university_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupData {
    pub signup: SignupAccount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Names of the students assigned to the project
    pub students: Vec<String>,
    pub category: String,
    /// Completion percentage, 0-100
    pub progress: u8,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsData {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyProjectsData {
    pub my_projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub project_title: String,
    pub task_name: String,
    pub description: String,
    pub assigned_student: String,
    pub status: String,
    pub due_date: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TasksData {
    pub tasks: Vec<Task>,
}

/// The dashboard's stat tiles. Derived client-side from the projects and
/// tasks listings rather than fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub projects: usize,
    pub students: usize,
    pub tasks: usize,
    pub finished_projects: usize,
}

impl DashboardStats {
    pub fn derive(projects: &[Project], tasks: &[Task]) -> Self {
        let mut students: Vec<&str> = projects
            .iter()
            .flat_map(|p| p.students.iter().map(String::as_str))
            .collect();
        students.sort_unstable();
        students.dedup();

        Self {
            projects: projects.len(),
            students: students.len(),
            tasks: tasks.len(),
            finished_projects: projects
                .iter()
                .filter(|p| p.status == "Completed")
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, status: &str, students: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {}", id),
            description: String::new(),
            students: students.iter().map(|s| s.to_string()).collect(),
            category: "Research".to_string(),
            progress: 50,
            start_date: "2026-01-01".to_string(),
            end_date: "2026-06-01".to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_login_data_from_wire() {
        let data: LoginData =
            serde_json::from_str(r#"{"login":{"token":"abc.def.ghi","role":"student"}}"#).unwrap();
        assert_eq!(data.login.token, "abc.def.ghi");
        assert_eq!(data.login.role, Role::Student);
    }

    #[test]
    fn test_camel_case_fields_from_wire() {
        let data: MyProjectsData = serde_json::from_str(
            r#"{"myProjects":[{
                "id":"p-1","title":"Thesis","description":"",
                "students":["Alice"],"category":"Research","progress":65,
                "startDate":"2026-01-01","endDate":"2026-06-01","status":"In Progress"
            }]}"#,
        )
        .unwrap();
        assert_eq!(data.my_projects.len(), 1);
        assert_eq!(data.my_projects[0].progress, 65);

        let task: Task = serde_json::from_str(
            r#"{
                "id":"t-1","projectId":"p-1","projectTitle":"Thesis",
                "taskName":"Draft intro","description":"","assignedStudent":"Alice",
                "status":"Pending","dueDate":"2026-02-01",
                "createdAt":"2026-01-05","updatedAt":"2026-01-05"
            }"#,
        )
        .unwrap();
        assert_eq!(task.task_name, "Draft intro");
        assert_eq!(task.assigned_student, "Alice");
    }

    #[test]
    fn test_signup_request_wire_form() {
        let request = SignupRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
            name: "Alice Ng".to_string(),
            university_id: "U1234".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["universityId"], "U1234");
    }

    #[test]
    fn test_stats_derivation() {
        let projects = vec![
            project("1", "Completed", &["Alice", "Bob"]),
            project("2", "In Progress", &["Bob", "Cara"]),
            project("3", "Completed", &["Alice"]),
        ];
        let tasks: Vec<Task> = Vec::new();

        let stats = DashboardStats::derive(&projects, &tasks);
        assert_eq!(stats.projects, 3);
        // Alice, Bob, Cara - counted once each
        assert_eq!(stats.students, 3);
        assert_eq!(stats.tasks, 0);
        assert_eq!(stats.finished_projects, 2);
    }
}
