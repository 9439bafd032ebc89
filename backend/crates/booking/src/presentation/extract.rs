//! Request extractors

use axum::extract::FromRequest;

use crate::error::BookingError;

/// JSON body whose rejection is rendered like every other [`BookingError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BookingError))]
pub struct ApiJson<T>(pub T);
