//! Application Layer
//!
//! Use cases. Each one checks the caller's role before touching the store.

pub mod config;
pub mod dashboards;
pub mod expenses;
pub mod export;
pub mod import;
pub mod locations;
pub mod registrations;
pub mod reports;
pub mod reviews;
pub mod schools;
pub mod site_settings;
pub mod students;
pub mod surveys;
pub mod tours;

// Re-exports
pub use config::BookingConfig;
pub use dashboards::{
    AdminDashboard, DashboardsUseCase, HomePage, HomeTour, ParentDashboard, PricedTour,
    SchoolBadge, SchoolDashboard, SchoolStats, StudentWithRegistrations, TourDetail,
};
pub use expenses::ExpensesUseCase;
pub use export::{ExportFile, ParticipantExportUseCase};
pub use import::{ImportedStudent, StudentImportUseCase};
pub use locations::{LocationInput, LocationsUseCase};
pub use registrations::RegistrationsUseCase;
pub use reports::{ReportsUseCase, TourReport};
pub use reviews::ReviewsUseCase;
pub use schools::{SchoolInput, SchoolsUseCase};
pub use site_settings::{SiteSettingsUseCase, SliderInput};
pub use students::{StudentForm, StudentFormUseCase};
pub use surveys::{SurveyInput, SurveysUseCase};
pub use tours::{TourInput, ToursUseCase};
