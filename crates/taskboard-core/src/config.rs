//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the local database file
    pub database_path: PathBuf,
    /// GraphQL endpoint of the backend service
    pub graphql_endpoint: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("taskboard.db"),
            graphql_endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Taskboard"))
            .unwrap_or_else(|| PathBuf::from(".taskboard"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

// Simple dirs implementation for the per-OS data directory
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = Config::new(PathBuf::from("/tmp/taskboard"));
        assert_eq!(config.graphql_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.database_path, PathBuf::from("/tmp/taskboard/taskboard.db"));
    }
}
