//! Request extractors

use axum::extract::FromRequest;

use crate::error::AuthError;

/// JSON body whose rejection is rendered like every other [`AuthError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AuthError))]
pub struct ApiJson<T>(pub T);
