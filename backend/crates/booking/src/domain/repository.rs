//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Method names carry the entity so one store can implement every trait.

use kernel::id::{
    ExpenseId, LocationId, ParentId, RegistrationId, ReviewId, SchoolId, StudentId, SurveyId,
    TourId,
};

use crate::domain::entity::{
    Expense, Location, ParentProfile, Registration, Review, School, SiteConfig, Slider, Student,
    StudentRecord, Survey, Tour, VoteCount,
};
use crate::domain::value_object::{RegistrationStatus, ReviewStatus};
use crate::error::BookingResult;

/// School repository trait
#[trait_variant::make(SchoolRepository: Send)]
pub trait LocalSchoolRepository {
    /// All schools with their tour assignments, by name
    async fn list_schools(&self) -> BookingResult<Vec<School>>;

    async fn find_school(&self, school_id: &SchoolId) -> BookingResult<Option<School>>;

    /// Insert or fully update the school and replace its assignments, atomically.
    /// Username/access code collisions yield `BookingError::SchoolConflict`.
    async fn upsert_school(&self, school: &School) -> BookingResult<()>;

    /// Returns whether a row was deleted; schools with students yield
    /// `BookingError::SchoolHasStudents`
    async fn delete_school(&self, school_id: &SchoolId) -> BookingResult<bool>;
}

/// Tour repository trait
#[trait_variant::make(TourRepository: Send)]
pub trait LocalTourRepository {
    /// All tours with their location links, by date ascending
    async fn list_tours(&self) -> BookingResult<Vec<Tour>>;

    async fn find_tour(&self, tour_id: &TourId) -> BookingResult<Option<Tour>>;

    /// Insert or fully update the tour and replace its location links
    async fn upsert_tour(&self, tour: &Tour) -> BookingResult<()>;

    async fn delete_tour(&self, tour_id: &TourId) -> BookingResult<bool>;
}

/// Location repository trait
#[trait_variant::make(LocationRepository: Send)]
pub trait LocalLocationRepository {
    async fn list_locations(&self) -> BookingResult<Vec<Location>>;

    async fn find_locations(&self, location_ids: &[LocationId]) -> BookingResult<Vec<Location>>;

    async fn upsert_location(&self, location: &Location) -> BookingResult<()>;

    async fn delete_location(&self, location_id: &LocationId) -> BookingResult<bool>;
}

/// Student repository trait
#[trait_variant::make(StudentRepository: Send)]
pub trait LocalStudentRepository {
    async fn list_students(&self) -> BookingResult<Vec<Student>>;

    async fn list_students_by_school(&self, school_id: &SchoolId) -> BookingResult<Vec<Student>>;

    async fn find_student(&self, student_id: &StudentId) -> BookingResult<Option<Student>>;

    async fn find_student_by_tc(&self, tc_no: &str) -> BookingResult<Option<Student>>;

    async fn count_students(&self) -> BookingResult<i64>;

    /// Insert or update by national ID; returns the stored student
    async fn upsert_student(&self, record: &StudentRecord) -> BookingResult<Student>;
}

/// Registration repository trait
#[trait_variant::make(RegistrationRepository: Send)]
pub trait LocalRegistrationRepository {
    async fn list_registrations(&self) -> BookingResult<Vec<Registration>>;

    async fn list_registrations_by_tour(&self, tour_id: &TourId) -> BookingResult<Vec<Registration>>;

    async fn list_registrations_by_students(
        &self,
        student_ids: &[StudentId],
    ) -> BookingResult<Vec<Registration>>;

    async fn create_registration(&self, registration: &Registration) -> BookingResult<()>;

    /// Oldest registration of the pair
    async fn find_first_registration(
        &self,
        student_id: &StudentId,
        tour_id: &TourId,
    ) -> BookingResult<Option<Registration>>;

    async fn update_registration_status(
        &self,
        registration_id: &RegistrationId,
        status: RegistrationStatus,
    ) -> BookingResult<bool>;

    async fn count_registrations(&self, status: Option<RegistrationStatus>) -> BookingResult<i64>;
}

/// Review repository trait
#[trait_variant::make(ReviewRepository: Send)]
pub trait LocalReviewRepository {
    /// Newest first
    async fn list_reviews(&self) -> BookingResult<Vec<Review>>;

    async fn list_reviews_by_tour(
        &self,
        tour_id: &TourId,
        status: ReviewStatus,
    ) -> BookingResult<Vec<Review>>;

    async fn create_review(&self, review: &Review) -> BookingResult<()>;

    async fn update_review_status(
        &self,
        review_id: &ReviewId,
        status: ReviewStatus,
    ) -> BookingResult<bool>;
}

/// Survey repository trait
#[trait_variant::make(SurveyRepository: Send)]
pub trait LocalSurveyRepository {
    /// Newest first
    async fn list_surveys(&self) -> BookingResult<Vec<Survey>>;

    async fn list_active_surveys(&self) -> BookingResult<Vec<Survey>>;

    async fn find_survey(&self, survey_id: &SurveyId) -> BookingResult<Option<Survey>>;

    async fn create_survey(&self, survey: &Survey) -> BookingResult<()>;

    async fn set_survey_active(&self, survey_id: &SurveyId, is_active: bool) -> BookingResult<bool>;

    async fn delete_survey(&self, survey_id: &SurveyId) -> BookingResult<bool>;

    /// Compare-and-swap on `version`: writes options and votes and bumps the
    /// version only if the stored version still equals `expected_version`.
    /// Returns whether the write happened.
    async fn update_survey_votes(
        &self,
        survey_id: &SurveyId,
        options: &[String],
        votes: &[VoteCount],
        expected_version: i64,
    ) -> BookingResult<bool>;
}

/// Expense repository trait
#[trait_variant::make(ExpenseRepository: Send)]
pub trait LocalExpenseRepository {
    async fn list_expenses(&self) -> BookingResult<Vec<Expense>>;

    /// Unknown tours yield `BookingError::TourNotFound`
    async fn create_expense(&self, expense: &Expense) -> BookingResult<()>;

    async fn delete_expense(&self, expense_id: &ExpenseId) -> BookingResult<bool>;
}

/// Site configuration and slider repository trait
#[trait_variant::make(SiteContentRepository: Send)]
pub trait LocalSiteContentRepository {
    async fn get_site_config(&self) -> BookingResult<Option<SiteConfig>>;

    async fn save_site_config(&self, config: &SiteConfig) -> BookingResult<()>;

    /// By `sort_order`
    async fn list_sliders(&self) -> BookingResult<Vec<Slider>>;

    /// Delete every slider and insert the given ones, atomically
    async fn replace_sliders(&self, sliders: &[Slider]) -> BookingResult<()>;
}

/// Parent profile repository trait
#[trait_variant::make(ParentProfileRepository: Send)]
pub trait LocalParentProfileRepository {
    async fn find_parent_profile(&self, parent_id: &ParentId) -> BookingResult<Option<ParentProfile>>;

    async fn find_parent_profiles_by_tc(&self, tc_nos: &[String]) -> BookingResult<Vec<ParentProfile>>;

    /// Returns whether the parent exists
    async fn update_parent_contact(
        &self,
        parent_id: &ParentId,
        name: &str,
        phone: &str,
    ) -> BookingResult<bool>;
}

/// Everything the booking routes need from one store
pub trait BookingStore:
    SchoolRepository
    + TourRepository
    + LocationRepository
    + StudentRepository
    + RegistrationRepository
    + ReviewRepository
    + SurveyRepository
    + ExpenseRepository
    + SiteContentRepository
    + ParentProfileRepository
    + Send
    + Sync
    + 'static
{
}

impl<T> BookingStore for T where
    T: SchoolRepository
        + TourRepository
        + LocationRepository
        + StudentRepository
        + RegistrationRepository
        + ReviewRepository
        + SurveyRepository
        + ExpenseRepository
        + SiteContentRepository
        + ParentProfileRepository
        + Send
        + Sync
        + 'static
{
}
