//! HTTP Handlers

use axum::extract::{Extension, Path, State};
use axum::http::{HeaderMap, header};
use axum::{Json, response::IntoResponse};
use kernel::id::AdminId;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::{
    AdminAccountsUseCase, AdminLoginInput, AdminLoginUseCase, CreateAdminInput, ParentLoginInput,
    ParentLoginUseCase, SchoolLoginInput, SchoolLoginUseCase, SessionCodec,
};
use crate::domain::entity::Session;
use crate::domain::repository::{AdminRepository, ParentRepository, SchoolCredentialRepository};
use crate::domain::value_object::UserType;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AdminCreatedResponse, AdminListResponse, AdminLoginRequest, AdminResponse,
    ChangePasswordRequest, CreateAdminRequest, LoginResponse, ParentLoginRequest,
    SchoolLoginRequest, SessionStatusResponse, SuccessResponse,
};
use crate::presentation::extract::ApiJson;
use crate::presentation::middleware::SessionReader;

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub codec: Arc<SessionCodec>,
    pub reader: SessionReader,
}

impl<R> Clone for AuthAppState<R>
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
            codec: self.codec.clone(),
            reader: self.reader.clone(),
        }
    }
}

// ============================================================================
// Login / Logout
// ============================================================================

/// POST /api/auth/admin/login
pub async fn admin_login<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<AdminLoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    let use_case = AdminLoginUseCase::new(state.repo.clone(), state.config.clone());

    let session = use_case
        .execute(AdminLoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    login_response(&state, &session)
}

/// POST /api/auth/school/login
pub async fn school_login<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<SchoolLoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    let use_case = SchoolLoginUseCase::new(state.repo.clone());

    let session = use_case
        .execute(SchoolLoginInput {
            credential: req.credential,
            password: req.password,
        })
        .await?;

    login_response(&state, &session)
}

/// POST /api/auth/parent/login
pub async fn parent_login<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<ParentLoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    let use_case = ParentLoginUseCase::new(state.repo.clone(), state.repo.clone());

    let session = use_case
        .execute(ParentLoginInput {
            tc_no: req.tc_no,
            school_code: req.school_code,
        })
        .await?;

    login_response(&state, &session)
}

/// POST /api/auth/logout
///
/// Always succeeds; clears the session cookie and the admin flag cookie.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> AuthResult<impl IntoResponse>
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    let mut headers = HeaderMap::new();
    append_set_cookie(
        &mut headers,
        state
            .config
            .session_cookie(UserType::Admin)
            .build_delete_cookie(),
    )?;
    append_set_cookie(
        &mut headers,
        state.config.admin_flag_cookie().build_delete_cookie(),
    )?;

    Ok((headers, Json(SuccessResponse::OK)))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/session
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    let response = match state.reader.read(&headers) {
        Some(session) => SessionStatusResponse {
            authenticated: true,
            user_id: Some(session.user_id),
            user_type: Some(session.user_type),
            school_id: session.school_id.map(|id| id.into_uuid()),
            username: session.username,
        },
        None => SessionStatusResponse {
            authenticated: false,
            user_id: None,
            user_type: None,
            school_id: None,
            username: None,
        },
    };

    Json(response)
}

// ============================================================================
// Admin accounts (behind the admin guard)
// ============================================================================

/// GET /api/auth/admins
pub async fn list_admins<R>(
    State(state): State<AuthAppState<R>>,
    Extension(session): Extension<Session>,
) -> AuthResult<Json<AdminListResponse>>
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    let admins = AdminAccountsUseCase::new(state.repo.clone())
        .list(&session)
        .await?;

    Ok(Json(AdminListResponse {
        success: true,
        admins: admins.into_iter().map(AdminResponse::from).collect(),
    }))
}

/// POST /api/auth/admins
pub async fn create_admin<R>(
    State(state): State<AuthAppState<R>>,
    Extension(session): Extension<Session>,
    ApiJson(req): ApiJson<CreateAdminRequest>,
) -> AuthResult<Json<AdminCreatedResponse>>
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    let admin = AdminAccountsUseCase::new(state.repo.clone())
        .create(
            &session,
            CreateAdminInput {
                username: req.username,
                password: req.password,
            },
        )
        .await?;

    Ok(Json(AdminCreatedResponse {
        success: true,
        admin: admin.into(),
    }))
}

/// DELETE /api/auth/admins/{admin_id}
pub async fn delete_admin<R>(
    State(state): State<AuthAppState<R>>,
    Extension(session): Extension<Session>,
    Path(admin_id): Path<Uuid>,
) -> AuthResult<Json<SuccessResponse>>
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    AdminAccountsUseCase::new(state.repo.clone())
        .delete(&session, &AdminId::from_uuid(admin_id))
        .await?;

    Ok(Json(SuccessResponse::OK))
}

/// PUT /api/auth/admins/{admin_id}/password
pub async fn change_admin_password<R>(
    State(state): State<AuthAppState<R>>,
    Extension(session): Extension<Session>,
    Path(admin_id): Path<Uuid>,
    ApiJson(req): ApiJson<ChangePasswordRequest>,
) -> AuthResult<Json<SuccessResponse>>
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    AdminAccountsUseCase::new(state.repo.clone())
        .change_password(&session, &AdminId::from_uuid(admin_id), &req.new_password)
        .await?;

    Ok(Json(SuccessResponse::OK))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn login_response<R>(
    state: &AuthAppState<R>,
    session: &Session,
) -> AuthResult<(HeaderMap, Json<LoginResponse>)>
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    let value = state.codec.encode(session)?;

    let mut headers = HeaderMap::new();
    append_set_cookie(
        &mut headers,
        state
            .config
            .session_cookie(session.user_type)
            .build_set_cookie(&value),
    )?;

    if session.user_type == UserType::Admin {
        append_set_cookie(
            &mut headers,
            state.config.admin_flag_cookie().build_set_cookie("true"),
        )?;
    }

    Ok((
        headers,
        Json(LoginResponse {
            success: true,
            user_type: session.user_type,
            redirect: session.user_type.home_path(),
        }),
    ))
}

fn append_set_cookie(headers: &mut HeaderMap, cookie: String) -> AuthResult<()> {
    let value = platform::cookie::set_cookie_header(&cookie)
        .ok_or_else(|| AuthError::Internal("Set-Cookie value is not a valid header".to_string()))?;
    headers.append(header::SET_COOKIE, value);
    Ok(())
}
