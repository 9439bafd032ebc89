//! School Login Use Case
//!
//! A school signs in with its username or its access code, plus password.

use std::sync::Arc;

use crate::domain::entity::Session;
use crate::domain::repository::SchoolCredentialRepository;
use crate::domain::value_object::AccessCode;
use crate::error::{AuthError, AuthResult};

pub struct SchoolLoginInput {
    /// Username (as typed) or access code (any case)
    pub credential: String,
    pub password: String,
}

pub struct SchoolLoginUseCase<S>
where
    S: SchoolCredentialRepository,
{
    school_repo: Arc<S>,
}

impl<S> SchoolLoginUseCase<S>
where
    S: SchoolCredentialRepository,
{
    pub fn new(school_repo: Arc<S>) -> Self {
        Self { school_repo }
    }

    pub async fn execute(&self, input: SchoolLoginInput) -> AuthResult<Session> {
        let code = AccessCode::normalize(&input.credential);
        if code.is_empty() {
            return Err(AuthError::InvalidSchoolCredentials);
        }

        let school = self
            .school_repo
            .find_school_by_login(&input.credential, &code)
            .await?
            .filter(|school| school.password_matches(&input.password))
            .ok_or(AuthError::InvalidSchoolCredentials)?;

        tracing::info!(school_id = %school.school_id, school = %school.name, "School signed in");

        Ok(Session::school(school.school_id))
    }
}
