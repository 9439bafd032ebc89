//! Domain Entities

pub mod expense;
pub mod location;
pub mod parent_profile;
pub mod registration;
pub mod review;
pub mod school;
pub mod site_content;
pub mod student;
pub mod survey;
pub mod tour;

pub use expense::Expense;
pub use location::Location;
pub use parent_profile::ParentProfile;
pub use registration::Registration;
pub use review::Review;
pub use school::{School, TourAssignment};
pub use site_content::{SiteConfig, Slider, StatItem};
pub use student::{Student, StudentRecord};
pub use survey::{Survey, VoteCount};
pub use tour::{ItineraryStop, Tour};
