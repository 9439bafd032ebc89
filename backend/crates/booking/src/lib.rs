//! Booking Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, pricing rules, repository traits
//! - `application/` - Use cases, one per admin/school/parent operation
//! - `infra/` - PostgreSQL repository and the spreadsheet adapter
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Schools with per-tour prices, tours with itineraries and locations
//! - Parent registrations and school-side payment approval
//! - Reviews with moderation, surveys with concurrent-safe voting
//! - Expenses and per-tour revenue / profit reports
//! - Student import from and participant export to xlsx
//! - Admin, school and parent dashboards, public home and tour pages
//!
//! ## Access
//! Routes under `/admin`, `/school` and `/parent` sit behind the auth
//! crate's role middleware; use cases call `auth::require` again before
//! touching the store. Survey voting is the only public write.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BookingConfig;
pub use domain::repository::BookingStore;
pub use error::{BookingError, BookingResult};
pub use infra::postgres::PgBookingRepository;
pub use presentation::router::{booking_router, booking_router_generic};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgBookingRepository as BookingPgStore;
}

#[cfg(test)]
mod tests;
