//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion into [`AppError`] plus helpers used by the
//! repositories to classify PostgreSQL constraint violations.

#[allow(unused_imports)]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// PostgreSQL SQLSTATE for `unique_violation`
#[cfg(feature = "sqlx")]
pub const PG_UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `foreign_key_violation`
#[cfg(feature = "sqlx")]
pub const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

#[cfg(feature = "sqlx")]
fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|code| code.into_owned()),
        _ => None,
    }
}

/// True when the error is a duplicate-key violation
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    sqlstate(err).as_deref() == Some(PG_UNIQUE_VIOLATION)
}

/// True when the error is a foreign-key violation (e.g. deleting a referenced row)
#[cfg(feature = "sqlx")]
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    sqlstate(err).as_deref() == Some(PG_FOREIGN_KEY_VIOLATION)
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Kayıt bulunamadı").with_source(err),
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                AppError::service_unavailable("Veritabanına şu anda ulaşılamıyor.").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    Some(PG_UNIQUE_VIOLATION) => AppError::conflict("Bu kayıt zaten mevcut."),
                    Some(PG_FOREIGN_KEY_VIOLATION) => {
                        AppError::conflict("Kayıt başka kayıtlar tarafından kullanılıyor.")
                    }
                    Some("23502") | Some("23514") => AppError::bad_request("Geçersiz veri."),
                    Some("53000") | Some("53100") | Some("53200") | Some("53300") => {
                        AppError::service_unavailable("Veritabanına şu anda ulaşılamıyor.")
                    }
                    _ => AppError::internal("İşlem sırasında bir hata oluştu."),
                };
                app_err.with_source(err)
            }
            _ => AppError::internal("İşlem sırasında bir hata oluştu.").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::{HeaderValue, StatusCode};

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // `{success, error}` envelope the dashboards read, plus RFC 7807 fields
        let body = serde_json::json!({
            "success": false,
            "error": self.message(),
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "action": self.action(),
            "redirect": self.redirect(),
        });

        let mut response = (status, Json(body)).into_response();
        if let Some(path) = self.redirect().and_then(|p| HeaderValue::from_str(p).ok()) {
            response.headers_mut().insert("X-Login-Redirect", path);
        }
        response
    }
}
