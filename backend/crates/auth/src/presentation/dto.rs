//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::AdminSummary;
use crate::domain::value_object::UserType;

// ============================================================================
// Login
// ============================================================================

/// POST /admin/login
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /school/login
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolLoginRequest {
    /// Username or access code
    #[serde(default)]
    pub credential: String,
    #[serde(default)]
    pub password: String,
}

/// POST /parent/login
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentLoginRequest {
    #[serde(default)]
    pub tc_no: String,
    #[serde(default)]
    pub school_code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user_type: UserType,
    /// Dashboard to open next
    pub redirect: &'static str,
}

// ============================================================================
// Session Status
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub user_id: Option<Uuid>,
    pub user_type: Option<UserType>,
    pub school_id: Option<Uuid>,
    pub username: Option<String>,
}

// ============================================================================
// Admin accounts
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<AdminSummary> for AdminResponse {
    fn from(admin: AdminSummary) -> Self {
        Self {
            id: admin.admin_id.into_uuid(),
            username: admin.username,
            created_at: admin.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminListResponse {
    pub success: bool,
    pub admins: Vec<AdminResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreatedResponse {
    pub success: bool,
    pub admin: AdminResponse,
}

/// Plain `{ "success": true }`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}
