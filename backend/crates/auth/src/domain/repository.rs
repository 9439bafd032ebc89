//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::AdminId;

use crate::domain::entity::{Admin, Parent, SchoolCredential};
use crate::domain::value_object::{AccessCode, TcNo};
use crate::error::AuthResult;

/// Admin account repository trait
#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    async fn find_admin_by_username(&self, username: &str) -> AuthResult<Option<Admin>>;

    /// All admins, newest first
    async fn list_admins(&self) -> AuthResult<Vec<Admin>>;

    async fn count_admins(&self) -> AuthResult<i64>;

    /// Insert an admin; a taken username yields `AuthError::UsernameTaken`
    async fn create_admin(&self, admin: &Admin) -> AuthResult<()>;

    /// Insert the admin only if the table is empty, in one atomic step.
    /// Returns whether the row was written.
    async fn create_first_admin(&self, admin: &Admin) -> AuthResult<bool>;

    /// Delete the admin unless it is the last one left.
    /// Returns whether a row was deleted.
    async fn delete_admin(&self, admin_id: &AdminId) -> AuthResult<bool>;

    /// Returns whether the admin existed
    async fn update_admin_password(&self, admin_id: &AdminId, password: &str) -> AuthResult<bool>;
}

/// School credential lookups used by school and parent login
#[trait_variant::make(SchoolCredentialRepository: Send)]
pub trait LocalSchoolCredentialRepository {
    /// First school whose `username` equals `username` OR whose access code equals `access_code`
    async fn find_school_by_login(
        &self,
        username: &str,
        access_code: &AccessCode,
    ) -> AuthResult<Option<SchoolCredential>>;

    async fn find_school_by_access_code(
        &self,
        access_code: &AccessCode,
    ) -> AuthResult<Option<SchoolCredential>>;
}

/// Parent account repository trait
#[trait_variant::make(ParentRepository: Send)]
pub trait LocalParentRepository {
    /// Look up the parent by national ID, creating it on first sight
    async fn find_or_create_parent(&self, tc_no: &TcNo) -> AuthResult<Parent>;
}
