//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Login use cases, session codec, role guard
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, area middleware
//!
//! ## Features
//! - Admin login with username + password (first login bootstraps the account)
//! - School login with username or access code + password
//! - Parent login with national ID + school access code (account created lazily)
//! - Admin account management with last-admin protection
//!
//! ## Session Model
//! - The session is a role-tagged record stored in an HTTP-only cookie
//! - Admin sessions live one day, school and parent sessions seven days
//! - Cookie values are optionally HMAC-signed when a secret is configured
//! - Every protected area checks the role in middleware and again in use cases

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::guard::{authorize, require};
pub use domain::entity::Session;
pub use domain::value_object::UserType;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{RoleGuard, SessionReader, require_role};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
