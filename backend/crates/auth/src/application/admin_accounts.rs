//! Admin Accounts Use Case
//!
//! Admin-only management of admin accounts. The last remaining admin can
//! never be deleted.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::AdminId;

use crate::application::guard::require;
use crate::domain::entity::{Admin, Session};
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::UserType;
use crate::error::{AuthError, AuthResult};

/// Admin as listed to other admins (no password)
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSummary {
    pub admin_id: AdminId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<Admin> for AdminSummary {
    fn from(admin: Admin) -> Self {
        Self {
            admin_id: admin.admin_id,
            username: admin.username,
            created_at: admin.created_at,
        }
    }
}

pub struct CreateAdminInput {
    pub username: String,
    pub password: String,
}

pub struct AdminAccountsUseCase<A>
where
    A: AdminRepository,
{
    admin_repo: Arc<A>,
}

impl<A> AdminAccountsUseCase<A>
where
    A: AdminRepository,
{
    pub fn new(admin_repo: Arc<A>) -> Self {
        Self { admin_repo }
    }

    pub async fn list(&self, actor: &Session) -> AuthResult<Vec<AdminSummary>> {
        require(actor, UserType::Admin)?;

        let admins = self.admin_repo.list_admins().await?;
        Ok(admins.into_iter().map(AdminSummary::from).collect())
    }

    pub async fn create(&self, actor: &Session, input: CreateAdminInput) -> AuthResult<AdminSummary> {
        require(actor, UserType::Admin)?;

        let username = input.username.trim();
        if username.is_empty() || input.password.is_empty() {
            return Err(AuthError::CredentialsRequired);
        }

        let admin = Admin::new(username, input.password);
        self.admin_repo.create_admin(&admin).await?;

        tracing::info!(
            admin_id = %admin.admin_id,
            username = %admin.username,
            created_by = %actor.user_id,
            "Admin account created"
        );

        Ok(AdminSummary::from(admin))
    }

    pub async fn delete(&self, actor: &Session, admin_id: &AdminId) -> AuthResult<()> {
        require(actor, UserType::Admin)?;

        if self.admin_repo.count_admins().await? <= 1 {
            return Err(AuthError::LastAdmin);
        }

        if !self.admin_repo.delete_admin(admin_id).await? {
            // Either the id is stale or a concurrent delete left only this one
            return Err(if self.admin_repo.count_admins().await? <= 1 {
                AuthError::LastAdmin
            } else {
                AuthError::AdminNotFound
            });
        }

        tracing::info!(admin_id = %admin_id, deleted_by = %actor.user_id, "Admin account deleted");
        Ok(())
    }

    pub async fn change_password(
        &self,
        actor: &Session,
        admin_id: &AdminId,
        new_password: &str,
    ) -> AuthResult<()> {
        require(actor, UserType::Admin)?;

        if new_password.trim().is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        if !self
            .admin_repo
            .update_admin_password(admin_id, new_password)
            .await?
        {
            return Err(AuthError::AdminNotFound);
        }

        tracing::info!(admin_id = %admin_id, changed_by = %actor.user_id, "Admin password changed");
        Ok(())
    }
}
