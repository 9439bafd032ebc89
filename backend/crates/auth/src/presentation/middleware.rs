//! Auth Middleware
//!
//! Area guards: every route under `/api/admin`, `/api/school` and
//! `/api/parent` passes through [`require_role`], which decodes the session
//! cookie, checks the role and hands the [`Session`] to handlers through
//! request extensions.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::guard::authorize;
use crate::application::session_codec::SessionCodec;
use crate::domain::entity::Session;
use crate::domain::value_object::UserType;
use crate::error::AuthError;

/// Reads the session cookie of a request
#[derive(Clone, Debug)]
pub struct SessionReader {
    codec: Arc<SessionCodec>,
    cookie_name: Arc<str>,
}

impl SessionReader {
    pub fn new(codec: Arc<SessionCodec>, cookie_name: impl Into<Arc<str>>) -> Self {
        Self {
            codec,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            Arc::new(SessionCodec::from_config(config)),
            config.session_cookie_name.as_str(),
        )
    }

    /// Decoded session, `None` when the cookie is missing or unreadable
    pub fn read(&self, headers: &HeaderMap) -> Option<Session> {
        let raw = platform::cookie::extract_cookie(headers, &self.cookie_name)?;
        self.codec.decode(&raw)
    }

    /// Guard state for an area of the given role
    pub fn guard(&self, required: UserType) -> RoleGuard {
        RoleGuard {
            reader: self.clone(),
            required,
        }
    }
}

/// Middleware state
#[derive(Clone, Debug)]
pub struct RoleGuard {
    reader: SessionReader,
    required: UserType,
}

/// Middleware that requires a session of the guard's role
///
/// Use with `axum::middleware::from_fn_with_state(reader.guard(role), require_role)`.
pub async fn require_role(
    State(guard): State<RoleGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let session = guard.reader.read(req.headers());
    let session = authorize(session.as_ref(), guard.required)?.clone();

    tracing::debug!(
        user_id = %session.user_id,
        user_type = %session.user_type,
        path = %req.uri().path(),
        "Session accepted"
    );

    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
