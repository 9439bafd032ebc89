//! Booking Error Types
//!
//! Booking-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Display strings are the localized
//! messages shown to users.

use auth::AuthError;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Booking-specific result type alias
pub type BookingResult<T> = Result<T, BookingError>;

/// Booking-specific error variants
#[derive(Debug, Error)]
pub enum BookingError {
    /// Session/role failures from the central guard
    #[error(transparent)]
    Auth(#[from] AuthError),

    // ---- validation ----
    #[error("{0} zorunludur.")]
    MissingField(&'static str),

    #[error("Puan 1 ile 5 arasında olmalıdır.")]
    InvalidRating,

    #[error("Geçersiz durum.")]
    InvalidStatus,

    #[error("Geçersiz tarih.")]
    InvalidDate,

    #[error("Tutar geçersiz.")]
    InvalidAmount,

    #[error("En az 2 seçenek girmelisiniz!")]
    SurveyOptionsRequired,

    #[error("Geçersiz anket seçeneği.")]
    InvalidSurveyOption,

    #[error("Bu anket oylamaya kapalı.")]
    SurveyClosed,

    #[error("Dosya yüklenmedi.")]
    FileMissing,

    /// Body is not JSON, or not sent as JSON
    #[error("Geçersiz istek.")]
    MalformedBody(String),

    /// JSON whose fields do not fit the request
    #[error("Gönderilen bilgiler eksik veya hatalı.")]
    InvalidBody(String),

    // ---- access ----
    #[error("Bu öğrenci üzerinde işlem yetkiniz yok.")]
    StudentOutsideSchool,

    // ---- not found ----
    #[error("Okul bulunamadı.")]
    SchoolNotFound,

    #[error("Öğrenci bulunamadı.")]
    StudentNotFound,

    #[error("Tur bulunamadı.")]
    TourNotFound,

    #[error("Lokasyon bulunamadı.")]
    LocationNotFound,

    #[error("Kayıt bulunamadı")]
    RegistrationNotFound,

    #[error("Yorum bulunamadı.")]
    ReviewNotFound,

    #[error("Anket bulunamadı.")]
    SurveyNotFound,

    #[error("Gider bulunamadı.")]
    ExpenseNotFound,

    #[error("Veli bulunamadı.")]
    ParentNotFound,

    // ---- conflict ----
    #[error("Okul kaydedilemedi. Kod veya Kullanıcı adı çakışıyor olabilir.")]
    SchoolConflict,

    #[error("Okul silinemedi. Okula kayıtlı öğrenciler var.")]
    SchoolHasStudents,

    #[error("Oy kaydedilemedi, lütfen tekrar deneyin.")]
    VoteContention,

    // ---- internal ----
    /// Unreadable upload; the parser detail is logged
    #[error("Dosya işlenirken hata oluştu.")]
    Spreadsheet(String),

    #[error("Liste oluşturulamadı.")]
    Export(String),

    #[error("İşlem sırasında bir hata oluştu.")]
    Database(#[from] sqlx::Error),

    #[error("İşlem sırasında bir hata oluştu.")]
    Internal(String),
}

impl BookingError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookingError::Auth(e) => e.kind(),
            BookingError::MissingField(_)
            | BookingError::InvalidRating
            | BookingError::InvalidStatus
            | BookingError::InvalidDate
            | BookingError::InvalidAmount
            | BookingError::SurveyOptionsRequired
            | BookingError::InvalidSurveyOption
            | BookingError::SurveyClosed
            | BookingError::FileMissing
            | BookingError::MalformedBody(_)
            | BookingError::Spreadsheet(_) => ErrorKind::BadRequest,
            BookingError::InvalidBody(_) => ErrorKind::UnprocessableEntity,
            BookingError::StudentOutsideSchool => ErrorKind::Forbidden,
            BookingError::SchoolNotFound
            | BookingError::StudentNotFound
            | BookingError::TourNotFound
            | BookingError::LocationNotFound
            | BookingError::RegistrationNotFound
            | BookingError::ReviewNotFound
            | BookingError::SurveyNotFound
            | BookingError::ExpenseNotFound
            | BookingError::ParentNotFound => ErrorKind::NotFound,
            BookingError::SchoolConflict
            | BookingError::SchoolHasStudents
            | BookingError::VoteContention => ErrorKind::Conflict,
            BookingError::Export(_) | BookingError::Database(_) | BookingError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            BookingError::Auth(e) => e.to_app_error(),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BookingError::Database(e) => {
                tracing::error!(error = %e, "Booking database error");
            }
            BookingError::Internal(msg) | BookingError::Export(msg) => {
                tracing::error!(message = %msg, "Booking internal error");
            }
            BookingError::MalformedBody(detail) | BookingError::InvalidBody(detail) => {
                tracing::debug!(detail = %detail, "Rejected request body");
            }
            BookingError::Spreadsheet(detail) => {
                tracing::warn!(detail = %detail, "Unreadable spreadsheet upload");
            }
            BookingError::Auth(e) => {
                tracing::warn!(error = %e, "Booking request rejected by guard");
            }
            BookingError::VoteContention => {
                tracing::warn!("Survey vote gave up after repeated version conflicts");
            }
            _ => {
                tracing::debug!(error = %self, "Booking error");
            }
        }
    }
}

impl From<JsonRejection> for BookingError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => BookingError::InvalidBody(e.body_text()),
            other => BookingError::MalformedBody(other.body_text()),
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::UserType;

    #[test]
    fn test_guard_errors_keep_their_shape() {
        let err = BookingError::from(AuthError::SessionMissing {
            required: UserType::Parent,
        });
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.to_app_error().redirect(), Some("/parent/login"));
    }

    #[test]
    fn test_localized_messages() {
        assert_eq!(
            BookingError::SchoolConflict.to_string(),
            "Okul kaydedilemedi. Kod veya Kullanıcı adı çakışıyor olabilir."
        );
        assert_eq!(BookingError::RegistrationNotFound.to_string(), "Kayıt bulunamadı");
        assert_eq!(BookingError::MissingField("Tur başlığı").to_string(), "Tur başlığı zorunludur.");
    }

    #[test]
    fn test_internal_details_hidden() {
        let err = BookingError::Spreadsheet("zip: invalid central directory".into());
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.to_app_error().message(), "Dosya işlenirken hata oluştu.");
        assert!(BookingError::Internal("x".into()).kind().is_server_error());
    }
}
