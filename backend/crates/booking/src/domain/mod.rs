//! Domain Layer
//!
//! Entities, value objects, pricing rules and repository traits.

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;

pub use entity::{
    Expense, ItineraryStop, Location, ParentProfile, Registration, Review, School, SiteConfig,
    Slider, StatItem, Student, StudentRecord, Survey, Tour, TourAssignment, VoteCount,
};
pub use repository::{
    BookingStore, ExpenseRepository, LocationRepository, ParentProfileRepository,
    RegistrationRepository, ReviewRepository, SchoolRepository, SiteContentRepository,
    StudentRepository, SurveyRepository, TourRepository,
};
pub use value_object::{Rating, RegistrationStatus, ReviewStatus};
