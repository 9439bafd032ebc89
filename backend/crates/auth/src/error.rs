//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. Display strings are the
//! localized messages shown to users.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::UserType;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Hatalı kullanıcı adı veya şifre.")]
    InvalidAdminCredentials,

    #[error("Hatalı kullanıcı adı/kod veya şifre.")]
    InvalidSchoolCredentials,

    #[error("Hatalı okul kodu.")]
    InvalidSchoolCode,

    #[error("TC Kimlik No zorunludur.")]
    TcNoRequired,

    /// No decodable session cookie
    #[error("Oturum bulunamadı. Lütfen giriş yapın.")]
    SessionMissing { required: UserType },

    /// Session belongs to another role
    #[error("Bu işlem için yetkiniz yok.")]
    RoleMismatch {
        required: UserType,
        actual: UserType,
    },

    #[error("Kullanıcı adı ve şifre zorunludur.")]
    CredentialsRequired,

    /// Body is not JSON, or not sent as JSON
    #[error("Geçersiz istek.")]
    MalformedBody(String),

    /// JSON whose fields do not fit the request
    #[error("Gönderilen bilgiler eksik veya hatalı.")]
    InvalidBody(String),

    #[error("Yönetici oluşturulurken hata oluştu. Kullanıcı adı zaten kullanımda olabilir.")]
    UsernameTaken,

    #[error("Sistemde en az bir yönetici kalmalıdır.")]
    LastAdmin,

    #[error("Yeni şifre boş olamaz.")]
    EmptyPassword,

    #[error("Yönetici bulunamadı.")]
    AdminNotFound,

    #[error("İşlem sırasında bir hata oluştu.")]
    Database(#[from] sqlx::Error),

    /// Internal error; the detail is logged, never shown
    #[error("İşlem sırasında bir hata oluştu.")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidAdminCredentials
            | AuthError::InvalidSchoolCredentials
            | AuthError::InvalidSchoolCode
            | AuthError::SessionMissing { .. } => ErrorKind::Unauthorized,
            AuthError::RoleMismatch { .. } => ErrorKind::Forbidden,
            AuthError::TcNoRequired
            | AuthError::CredentialsRequired
            | AuthError::EmptyPassword
            | AuthError::MalformedBody(_) => ErrorKind::BadRequest,
            AuthError::InvalidBody(_) => ErrorKind::UnprocessableEntity,
            AuthError::UsernameTaken | AuthError::LastAdmin => ErrorKind::Conflict,
            AuthError::AdminNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Login page to send the client to, for guard failures
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            AuthError::SessionMissing { required } | AuthError::RoleMismatch { required, .. } => {
                Some(required.login_path())
            }
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self.redirect() {
            Some(path) => err.with_redirect(path),
            None => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidAdminCredentials
            | AuthError::InvalidSchoolCredentials
            | AuthError::InvalidSchoolCode => {
                tracing::warn!(error = %self, "Failed login attempt");
            }
            AuthError::RoleMismatch { required, actual } => {
                tracing::warn!(%required, %actual, "Session role does not match guarded area");
            }
            AuthError::MalformedBody(detail) | AuthError::InvalidBody(detail) => {
                tracing::debug!(detail = %detail, "Rejected request body");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AuthError::InvalidBody(e.body_text()),
            other => AuthError::MalformedBody(other.body_text()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
