//! Account roles
//!
//! Exactly two roles exist. Every role-dependent decision in the client is a
//! total match over this enum; an unknown role string fails at the parse
//! boundary instead of defaulting to either branch.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Organization-wide access: all projects, all tasks
    Admin,
    /// Access scoped to the caller's own assignments
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "student" => Ok(Role::Student),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        assert!("root".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        // Case-sensitive on purpose: the backend emits lowercase
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_wire_form() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"student\"").unwrap(),
            Role::Student
        );
    }
}
