//! In-memory repository used by the use case tests

use std::sync::Mutex;

use chrono::Utc;
use kernel::id::{
    ExpenseId, LocationId, ParentId, RegistrationId, ReviewId, SchoolId, StudentId, SurveyId,
    TourId,
};

use crate::domain::entity::{
    Expense, Location, ParentProfile, Registration, Review, School, SiteConfig, Slider, Student,
    StudentRecord, Survey, Tour, VoteCount,
};
use crate::domain::repository::{
    ExpenseRepository, LocationRepository, ParentProfileRepository, RegistrationRepository,
    ReviewRepository, SchoolRepository, SiteContentRepository, StudentRepository,
    SurveyRepository, TourRepository,
};
use crate::domain::value_object::{RegistrationStatus, ReviewStatus};
use crate::error::{BookingError, BookingResult};

#[derive(Default)]
pub(crate) struct MemoryBookingRepository {
    pub schools: Mutex<Vec<School>>,
    pub tours: Mutex<Vec<Tour>>,
    pub locations: Mutex<Vec<Location>>,
    pub students: Mutex<Vec<Student>>,
    pub parents: Mutex<Vec<ParentProfile>>,
    pub registrations: Mutex<Vec<Registration>>,
    pub reviews: Mutex<Vec<Review>>,
    pub surveys: Mutex<Vec<Survey>>,
    pub expenses: Mutex<Vec<Expense>>,
    pub site_config: Mutex<Option<SiteConfig>>,
    pub sliders: Mutex<Vec<Slider>>,
    /// Number of upcoming vote writes to reject as if another writer won
    pub lost_vote_races: Mutex<u32>,
}

impl MemoryBookingRepository {
    pub fn with_school(self, school: School) -> Self {
        self.schools.lock().unwrap().push(school);
        self
    }

    pub fn with_tour(self, tour: Tour) -> Self {
        self.tours.lock().unwrap().push(tour);
        self
    }

    pub fn with_student(self, student: Student) -> Self {
        self.students.lock().unwrap().push(student);
        self
    }

    pub fn with_parent(self, parent: ParentProfile) -> Self {
        self.parents.lock().unwrap().push(parent);
        self
    }

    pub fn with_survey(self, survey: Survey) -> Self {
        self.surveys.lock().unwrap().push(survey);
        self
    }

    pub fn with_registration(self, registration: Registration) -> Self {
        self.registrations.lock().unwrap().push(registration);
        self
    }

    pub fn lose_vote_races(&self, count: u32) {
        *self.lost_vote_races.lock().unwrap() = count;
    }
}

impl SchoolRepository for MemoryBookingRepository {
    async fn list_schools(&self) -> BookingResult<Vec<School>> {
        let mut schools = self.schools.lock().unwrap().clone();
        schools.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(schools)
    }

    async fn find_school(&self, school_id: &SchoolId) -> BookingResult<Option<School>> {
        let schools = self.schools.lock().unwrap();
        Ok(schools.iter().find(|s| s.school_id == *school_id).cloned())
    }

    async fn upsert_school(&self, school: &School) -> BookingResult<()> {
        {
            let tours = self.tours.lock().unwrap();
            let unknown_tour = school
                .assigned_tours
                .iter()
                .any(|a| !tours.iter().any(|t| t.tour_id == a.tour_id));
            if unknown_tour {
                return Err(BookingError::TourNotFound);
            }
        }

        let mut schools = self.schools.lock().unwrap();
        let collides = schools.iter().any(|s| {
            s.school_id != school.school_id
                && (s.username == school.username || s.access_code == school.access_code)
        });
        if collides {
            return Err(BookingError::SchoolConflict);
        }

        match schools.iter_mut().find(|s| s.school_id == school.school_id) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = school.clone();
                existing.created_at = created_at;
            }
            None => schools.push(school.clone()),
        }
        Ok(())
    }

    async fn delete_school(&self, school_id: &SchoolId) -> BookingResult<bool> {
        if self
            .students
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.school_id == *school_id)
        {
            return Err(BookingError::SchoolHasStudents);
        }

        let mut schools = self.schools.lock().unwrap();
        let before = schools.len();
        schools.retain(|s| s.school_id != *school_id);
        Ok(schools.len() < before)
    }
}

impl TourRepository for MemoryBookingRepository {
    async fn list_tours(&self) -> BookingResult<Vec<Tour>> {
        let mut tours = self.tours.lock().unwrap().clone();
        tours.sort_by_key(|t| t.date);
        Ok(tours)
    }

    async fn find_tour(&self, tour_id: &TourId) -> BookingResult<Option<Tour>> {
        let tours = self.tours.lock().unwrap();
        Ok(tours.iter().find(|t| t.tour_id == *tour_id).cloned())
    }

    async fn upsert_tour(&self, tour: &Tour) -> BookingResult<()> {
        {
            let locations = self.locations.lock().unwrap();
            let unknown = tour
                .location_ids
                .iter()
                .any(|id| !locations.iter().any(|l| l.location_id == *id));
            if unknown {
                return Err(BookingError::LocationNotFound);
            }
        }

        let mut tours = self.tours.lock().unwrap();
        match tours.iter_mut().find(|t| t.tour_id == tour.tour_id) {
            Some(existing) => *existing = tour.clone(),
            None => tours.push(tour.clone()),
        }
        Ok(())
    }

    async fn delete_tour(&self, tour_id: &TourId) -> BookingResult<bool> {
        let mut tours = self.tours.lock().unwrap();
        let before = tours.len();
        tours.retain(|t| t.tour_id != *tour_id);
        let deleted = tours.len() < before;
        drop(tours);

        if deleted {
            self.registrations.lock().unwrap().retain(|r| r.tour_id != *tour_id);
            self.expenses.lock().unwrap().retain(|e| e.tour_id != *tour_id);
            for school in self.schools.lock().unwrap().iter_mut() {
                school.assigned_tours.retain(|a| a.tour_id != *tour_id);
            }
        }
        Ok(deleted)
    }
}

impl LocationRepository for MemoryBookingRepository {
    async fn list_locations(&self) -> BookingResult<Vec<Location>> {
        Ok(self.locations.lock().unwrap().clone())
    }

    async fn find_locations(&self, location_ids: &[LocationId]) -> BookingResult<Vec<Location>> {
        let locations = self.locations.lock().unwrap();
        Ok(location_ids
            .iter()
            .filter_map(|id| locations.iter().find(|l| l.location_id == *id).cloned())
            .collect())
    }

    async fn upsert_location(&self, location: &Location) -> BookingResult<()> {
        let mut locations = self.locations.lock().unwrap();
        match locations.iter_mut().find(|l| l.location_id == location.location_id) {
            Some(existing) => *existing = location.clone(),
            None => locations.push(location.clone()),
        }
        Ok(())
    }

    async fn delete_location(&self, location_id: &LocationId) -> BookingResult<bool> {
        let mut locations = self.locations.lock().unwrap();
        let before = locations.len();
        locations.retain(|l| l.location_id != *location_id);
        let deleted = locations.len() < before;
        drop(locations);

        if deleted {
            for tour in self.tours.lock().unwrap().iter_mut() {
                tour.location_ids.retain(|id| id != location_id);
            }
        }
        Ok(deleted)
    }
}

impl StudentRepository for MemoryBookingRepository {
    async fn list_students(&self) -> BookingResult<Vec<Student>> {
        let mut students = self.students.lock().unwrap().clone();
        students.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(students)
    }

    async fn list_students_by_school(&self, school_id: &SchoolId) -> BookingResult<Vec<Student>> {
        let mut students: Vec<Student> = self
            .students
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.school_id == *school_id)
            .cloned()
            .collect();
        students.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(students)
    }

    async fn find_student(&self, student_id: &StudentId) -> BookingResult<Option<Student>> {
        let students = self.students.lock().unwrap();
        Ok(students.iter().find(|s| s.student_id == *student_id).cloned())
    }

    async fn find_student_by_tc(&self, tc_no: &str) -> BookingResult<Option<Student>> {
        let students = self.students.lock().unwrap();
        Ok(students.iter().find(|s| s.tc_no == tc_no).cloned())
    }

    async fn count_students(&self) -> BookingResult<i64> {
        Ok(self.students.lock().unwrap().len() as i64)
    }

    async fn upsert_student(&self, record: &StudentRecord) -> BookingResult<Student> {
        if !self
            .schools
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.school_id == record.school_id)
        {
            return Err(BookingError::SchoolNotFound);
        }

        let mut students = self.students.lock().unwrap();
        if let Some(existing) = students.iter_mut().find(|s| s.tc_no == record.tc_no) {
            existing.name = record.name.clone();
            existing.grade = record.grade.clone();
            existing.school_no = record.school_no.clone();
            existing.school_id = record.school_id;
            if let Some(allergies) = &record.allergies {
                existing.allergies = allergies.clone();
            }
            return Ok(existing.clone());
        }

        let student = Student {
            student_id: StudentId::new(),
            tc_no: record.tc_no.clone(),
            name: record.name.clone(),
            grade: record.grade.clone(),
            school_no: record.school_no.clone(),
            allergies: record.allergies.clone().unwrap_or_default(),
            school_id: record.school_id,
            created_at: Utc::now(),
        };
        students.push(student.clone());
        Ok(student)
    }
}

impl ParentProfileRepository for MemoryBookingRepository {
    async fn find_parent_profile(&self, parent_id: &ParentId) -> BookingResult<Option<ParentProfile>> {
        let parents = self.parents.lock().unwrap();
        Ok(parents.iter().find(|p| p.parent_id == *parent_id).cloned())
    }

    async fn find_parent_profiles_by_tc(&self, tc_nos: &[String]) -> BookingResult<Vec<ParentProfile>> {
        let parents = self.parents.lock().unwrap();
        Ok(parents
            .iter()
            .filter(|p| tc_nos.contains(&p.tc_no))
            .cloned()
            .collect())
    }

    async fn update_parent_contact(
        &self,
        parent_id: &ParentId,
        name: &str,
        phone: &str,
    ) -> BookingResult<bool> {
        let mut parents = self.parents.lock().unwrap();
        match parents.iter_mut().find(|p| p.parent_id == *parent_id) {
            Some(parent) => {
                parent.name = Some(name.to_string());
                parent.phone = Some(phone.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl RegistrationRepository for MemoryBookingRepository {
    async fn list_registrations(&self) -> BookingResult<Vec<Registration>> {
        Ok(self.registrations.lock().unwrap().clone())
    }

    async fn list_registrations_by_tour(&self, tour_id: &TourId) -> BookingResult<Vec<Registration>> {
        let registrations = self.registrations.lock().unwrap();
        Ok(registrations
            .iter()
            .filter(|r| r.tour_id == *tour_id)
            .cloned()
            .collect())
    }

    async fn list_registrations_by_students(
        &self,
        student_ids: &[StudentId],
    ) -> BookingResult<Vec<Registration>> {
        let registrations = self.registrations.lock().unwrap();
        Ok(registrations
            .iter()
            .filter(|r| student_ids.contains(&r.student_id))
            .cloned()
            .collect())
    }

    async fn create_registration(&self, registration: &Registration) -> BookingResult<()> {
        self.registrations.lock().unwrap().push(registration.clone());
        Ok(())
    }

    async fn find_first_registration(
        &self,
        student_id: &StudentId,
        tour_id: &TourId,
    ) -> BookingResult<Option<Registration>> {
        let registrations = self.registrations.lock().unwrap();
        Ok(registrations
            .iter()
            .filter(|r| r.student_id == *student_id && r.tour_id == *tour_id)
            .min_by_key(|r| r.created_at)
            .cloned())
    }

    async fn update_registration_status(
        &self,
        registration_id: &RegistrationId,
        status: RegistrationStatus,
    ) -> BookingResult<bool> {
        let mut registrations = self.registrations.lock().unwrap();
        match registrations
            .iter_mut()
            .find(|r| r.registration_id == *registration_id)
        {
            Some(registration) => {
                registration.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_registrations(&self, status: Option<RegistrationStatus>) -> BookingResult<i64> {
        let registrations = self.registrations.lock().unwrap();
        Ok(registrations
            .iter()
            .filter(|r| status.is_none_or(|s| r.status == s))
            .count() as i64)
    }
}

impl ReviewRepository for MemoryBookingRepository {
    async fn list_reviews(&self) -> BookingResult<Vec<Review>> {
        let mut reviews = self.reviews.lock().unwrap().clone();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    async fn list_reviews_by_tour(
        &self,
        tour_id: &TourId,
        status: ReviewStatus,
    ) -> BookingResult<Vec<Review>> {
        let mut reviews: Vec<Review> = self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.tour_id == *tour_id && r.status == status)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    async fn create_review(&self, review: &Review) -> BookingResult<()> {
        self.reviews.lock().unwrap().push(review.clone());
        Ok(())
    }

    async fn update_review_status(
        &self,
        review_id: &ReviewId,
        status: ReviewStatus,
    ) -> BookingResult<bool> {
        let mut reviews = self.reviews.lock().unwrap();
        match reviews.iter_mut().find(|r| r.review_id == *review_id) {
            Some(review) => {
                review.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl SurveyRepository for MemoryBookingRepository {
    async fn list_surveys(&self) -> BookingResult<Vec<Survey>> {
        let mut surveys = self.surveys.lock().unwrap().clone();
        surveys.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(surveys)
    }

    async fn list_active_surveys(&self) -> BookingResult<Vec<Survey>> {
        let mut surveys: Vec<Survey> = self
            .surveys
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        surveys.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(surveys)
    }

    async fn find_survey(&self, survey_id: &SurveyId) -> BookingResult<Option<Survey>> {
        let surveys = self.surveys.lock().unwrap();
        Ok(surveys.iter().find(|s| s.survey_id == *survey_id).cloned())
    }

    async fn create_survey(&self, survey: &Survey) -> BookingResult<()> {
        self.surveys.lock().unwrap().push(survey.clone());
        Ok(())
    }

    async fn set_survey_active(&self, survey_id: &SurveyId, is_active: bool) -> BookingResult<bool> {
        let mut surveys = self.surveys.lock().unwrap();
        match surveys.iter_mut().find(|s| s.survey_id == *survey_id) {
            Some(survey) => {
                survey.is_active = is_active;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_survey(&self, survey_id: &SurveyId) -> BookingResult<bool> {
        let mut surveys = self.surveys.lock().unwrap();
        let before = surveys.len();
        surveys.retain(|s| s.survey_id != *survey_id);
        Ok(surveys.len() < before)
    }

    async fn update_survey_votes(
        &self,
        survey_id: &SurveyId,
        options: &[String],
        votes: &[VoteCount],
        expected_version: i64,
    ) -> BookingResult<bool> {
        let mut surveys = self.surveys.lock().unwrap();
        let Some(survey) = surveys.iter_mut().find(|s| s.survey_id == *survey_id) else {
            return Ok(false);
        };

        // a competing writer bumps the version first
        let mut lost = self.lost_vote_races.lock().unwrap();
        if *lost > 0 {
            *lost -= 1;
            survey.version += 1;
            return Ok(false);
        }

        if survey.version != expected_version {
            return Ok(false);
        }
        survey.options = options.to_vec();
        survey.votes = votes.to_vec();
        survey.version += 1;
        Ok(true)
    }
}

impl ExpenseRepository for MemoryBookingRepository {
    async fn list_expenses(&self) -> BookingResult<Vec<Expense>> {
        Ok(self.expenses.lock().unwrap().clone())
    }

    async fn create_expense(&self, expense: &Expense) -> BookingResult<()> {
        if !self
            .tours
            .lock()
            .unwrap()
            .iter()
            .any(|t| t.tour_id == expense.tour_id)
        {
            return Err(BookingError::TourNotFound);
        }
        self.expenses.lock().unwrap().push(expense.clone());
        Ok(())
    }

    async fn delete_expense(&self, expense_id: &ExpenseId) -> BookingResult<bool> {
        let mut expenses = self.expenses.lock().unwrap();
        let before = expenses.len();
        expenses.retain(|e| e.expense_id != *expense_id);
        Ok(expenses.len() < before)
    }
}

impl SiteContentRepository for MemoryBookingRepository {
    async fn get_site_config(&self) -> BookingResult<Option<SiteConfig>> {
        Ok(self.site_config.lock().unwrap().clone())
    }

    async fn save_site_config(&self, config: &SiteConfig) -> BookingResult<()> {
        *self.site_config.lock().unwrap() = Some(config.clone());
        Ok(())
    }

    async fn list_sliders(&self) -> BookingResult<Vec<Slider>> {
        let mut sliders = self.sliders.lock().unwrap().clone();
        sliders.sort_by_key(|s| s.sort_order);
        Ok(sliders)
    }

    async fn replace_sliders(&self, sliders: &[Slider]) -> BookingResult<()> {
        *self.sliders.lock().unwrap() = sliders.to_vec();
        Ok(())
    }
}
