//! Value Objects

pub mod json_text;
pub mod rating;
pub mod registration_status;
pub mod review_status;

pub use rating::Rating;
pub use registration_status::RegistrationStatus;
pub use review_status::ReviewStatus;
