//! Admin Login Use Case
//!
//! Checks username + password against the admin table. On a fresh
//! installation (no admin at all) the configured bootstrap pair creates the
//! first admin and logs it in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{Admin, Session};
use crate::domain::repository::AdminRepository;
use crate::error::{AuthError, AuthResult};

pub struct AdminLoginInput {
    pub username: String,
    pub password: String,
}

pub struct AdminLoginUseCase<A>
where
    A: AdminRepository,
{
    admin_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> AdminLoginUseCase<A>
where
    A: AdminRepository,
{
    pub fn new(admin_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self { admin_repo, config }
    }

    pub async fn execute(&self, input: AdminLoginInput) -> AuthResult<Session> {
        let admin = match self
            .admin_repo
            .find_admin_by_username(&input.username)
            .await?
        {
            Some(admin) => Some(admin),
            None if self
                .config
                .is_bootstrap_pair(&input.username, &input.password) =>
            {
                self.bootstrap(&input).await?
            }
            None => None,
        };

        let admin = admin
            .filter(|admin| admin.password_matches(&input.password))
            .ok_or(AuthError::InvalidAdminCredentials)?;

        tracing::info!(admin_id = %admin.admin_id, username = %admin.username, "Admin signed in");

        Ok(Session::admin(admin.admin_id, admin.username))
    }

    /// Create the first admin; a no-op as soon as any admin exists
    async fn bootstrap(&self, input: &AdminLoginInput) -> AuthResult<Option<Admin>> {
        let admin = Admin::new(input.username.clone(), input.password.clone());

        if self.admin_repo.create_first_admin(&admin).await? {
            tracing::warn!(
                admin_id = %admin.admin_id,
                "No admin account existed, created the bootstrap admin"
            );
            Ok(Some(admin))
        } else {
            Ok(None)
        }
    }
}
