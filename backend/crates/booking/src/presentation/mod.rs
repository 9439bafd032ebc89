//! Presentation Layer
//!
//! HTTP handlers, DTOs and the router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;

pub use handlers::BookingAppState;
pub use router::{booking_router, booking_router_generic};
