//! Admin Entity

use chrono::{DateTime, Utc};
use kernel::id::AdminId;
use std::fmt;

/// Administrator account
///
/// Passwords are stored and compared as plain text.
#[derive(Clone)]
pub struct Admin {
    pub admin_id: AdminId,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            admin_id: AdminId::new(),
            username: username.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        platform::crypto::constant_time_eq(self.password.as_bytes(), candidate.as_bytes())
    }
}

impl fmt::Debug for Admin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Admin")
            .field("admin_id", &self.admin_id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}
