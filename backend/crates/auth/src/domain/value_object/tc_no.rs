use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Turkish national identity number as typed at parent login
///
/// Only presence is checked; the number is used as a lookup key, not verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TcNo(String);

impl TcNo {
    pub fn parse(raw: &str) -> AuthResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AuthError::TcNoRequired);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TcNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
