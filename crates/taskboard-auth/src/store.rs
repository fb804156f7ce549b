//! Persisted credential set
//!
//! Three string keys in the settings table, owned exclusively by this
//! module. Saved and cleared as a set inside one transaction so a crash
//! can never leave a token without its role.

use chrono::Utc;
use taskboard_storage::Database;

/// Storage keys for the credential set.
pub(crate) mod keys {
    pub const TOKEN: &str = "token";
    pub const ROLE: &str = "role";
    pub const USER_ID: &str = "user_id";
}

#[derive(Debug, Default)]
pub(crate) struct StoredCredentials {
    pub token: Option<String>,
    pub role: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Clone)]
pub(crate) struct CredentialStore {
    db: Database,
}

impl CredentialStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn load(&self) -> taskboard_storage::Result<StoredCredentials> {
        Ok(StoredCredentials {
            token: self.db.get_setting(keys::TOKEN)?,
            role: self.db.get_setting(keys::ROLE)?,
            user_id: self.db.get_setting(keys::USER_ID)?,
        })
    }

    pub fn save(
        &self,
        token: &str,
        role: &str,
        user_id: Option<&str>,
    ) -> taskboard_storage::Result<()> {
        let updated_at = Utc::now().to_rfc3339();

        self.db.transaction(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![keys::TOKEN, token, updated_at],
            )?;
            conn.execute(
                "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![keys::ROLE, role, updated_at],
            )?;
            match user_id {
                Some(id) => {
                    conn.execute(
                        "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)",
                        rusqlite::params![keys::USER_ID, id, updated_at],
                    )?;
                }
                None => {
                    // A fresh login with undecodable claims must not leave a
                    // stale user id from a previous account behind
                    conn.execute(
                        "DELETE FROM settings WHERE key = ?1",
                        [keys::USER_ID],
                    )?;
                }
            }
            Ok(())
        })
    }

    pub fn clear(&self) -> taskboard_storage::Result<()> {
        self.db.transaction(|conn| {
            conn.execute(
                "DELETE FROM settings WHERE key IN (?1, ?2, ?3)",
                rusqlite::params![keys::TOKEN, keys::ROLE, keys::USER_ID],
            )?;
            Ok(())
        })
    }
}
