//! Parent Login Use Case
//!
//! Parents have no password: a valid school access code plus a national ID
//! is enough. The parent row is created on first login.

use std::sync::Arc;

use crate::domain::entity::Session;
use crate::domain::repository::{ParentRepository, SchoolCredentialRepository};
use crate::domain::value_object::{AccessCode, TcNo};
use crate::error::{AuthError, AuthResult};

pub struct ParentLoginInput {
    pub tc_no: String,
    pub school_code: String,
}

pub struct ParentLoginUseCase<S, P>
where
    S: SchoolCredentialRepository,
    P: ParentRepository,
{
    school_repo: Arc<S>,
    parent_repo: Arc<P>,
}

impl<S, P> ParentLoginUseCase<S, P>
where
    S: SchoolCredentialRepository,
    P: ParentRepository,
{
    pub fn new(school_repo: Arc<S>, parent_repo: Arc<P>) -> Self {
        Self {
            school_repo,
            parent_repo,
        }
    }

    pub async fn execute(&self, input: ParentLoginInput) -> AuthResult<Session> {
        let code = AccessCode::normalize(&input.school_code);
        if code.is_empty() {
            return Err(AuthError::InvalidSchoolCode);
        }

        let school = self
            .school_repo
            .find_school_by_access_code(&code)
            .await?
            .ok_or(AuthError::InvalidSchoolCode)?;

        let tc_no = TcNo::parse(&input.tc_no)?;
        let parent = self.parent_repo.find_or_create_parent(&tc_no).await?;

        tracing::info!(
            parent_id = %parent.parent_id,
            school_id = %school.school_id,
            "Parent signed in"
        );

        Ok(Session::parent(parent.parent_id, school.school_id))
    }
}
