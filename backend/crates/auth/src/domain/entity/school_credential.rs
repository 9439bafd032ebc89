//! School login credentials
//!
//! The authentication view of a school row; the rest of the school profile
//! belongs to the booking domain.

use kernel::id::SchoolId;
use std::fmt;

#[derive(Clone)]
pub struct SchoolCredential {
    pub school_id: SchoolId,
    pub name: String,
    pub username: String,
    pub password: String,
    pub access_code: String,
}

impl SchoolCredential {
    pub fn password_matches(&self, candidate: &str) -> bool {
        platform::crypto::constant_time_eq(self.password.as_bytes(), candidate.as_bytes())
    }
}

impl fmt::Debug for SchoolCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchoolCredential")
            .field("school_id", &self.school_id)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("access_code", &self.access_code)
            .finish_non_exhaustive()
    }
}
