//! Dashboards & Public Pages
//!
//! Read models for the admin, school and parent dashboards and for the
//! public home and tour pages. Everything is computed from plain row lists
//! with the pricing rules in `domain::services::pricing`.

use std::collections::HashMap;
use std::sync::Arc;

use auth::{Session, UserType, require};
use chrono::{DateTime, Utc};
use kernel::id::{SchoolId, StudentId, TourId};

use crate::domain::entity::{
    Location, Registration, Review, School, SiteConfig, Slider, Student, Survey, Tour,
};
use crate::domain::repository::BookingStore;
use crate::domain::services::pricing;
use crate::domain::value_object::{RegistrationStatus, ReviewStatus};
use crate::error::{BookingError, BookingResult};

/// A tour as seen by one school: its assigned price instead of the list price
#[derive(Debug, Clone)]
pub struct PricedTour {
    pub tour: Tour,
    pub price: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct StudentWithRegistrations {
    pub student: Student,
    pub registrations: Vec<Registration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchoolStats {
    pub school_id: SchoolId,
    pub name: String,
    pub total_students: usize,
    /// Students with at least one registration of any status
    pub registered_students: usize,
}

#[derive(Debug, Clone)]
pub struct AdminDashboard {
    pub total_schools: usize,
    pub total_students: i64,
    pub total_registrations: i64,
    pub pending_payments: i64,
    pub school_stats: Vec<SchoolStats>,
}

#[derive(Debug, Clone)]
pub struct SchoolDashboard {
    pub school: School,
    pub tours: Vec<PricedTour>,
    pub students: Vec<StudentWithRegistrations>,
}

#[derive(Debug, Clone)]
pub struct ParentDashboard {
    pub school: School,
    pub tours: Vec<PricedTour>,
    pub parent_tc: String,
    /// Student whose national ID equals the parent's, when there is one
    pub student: Option<StudentWithRegistrations>,
    pub surveys: Vec<Survey>,
}

/// Public school summary shown next to a tour
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolBadge {
    pub school_id: SchoolId,
    pub name: String,
    pub city: String,
    pub district: String,
}

impl From<&School> for SchoolBadge {
    fn from(school: &School) -> Self {
        Self {
            school_id: school.school_id,
            name: school.name.clone(),
            city: school.city.clone(),
            district: school.district.clone(),
        }
    }
}

/// Home page card: a (school, tour) pair, or a tour no school has yet
#[derive(Debug, Clone, PartialEq)]
pub struct HomeTour {
    pub tour_id: TourId,
    pub title: String,
    pub cover_image: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub school: Option<SchoolBadge>,
    pub price: Option<f64>,
    pub registered_count: usize,
}

#[derive(Debug, Clone)]
pub struct HomePage {
    pub sliders: Vec<Slider>,
    pub site_config: SiteConfig,
    pub tours: Vec<HomeTour>,
}

#[derive(Debug, Clone)]
pub struct TourDetail {
    pub tour: Tour,
    pub school: Option<SchoolBadge>,
    pub price: Option<f64>,
    pub registered_count: usize,
    pub locations: Vec<Location>,
    pub reviews: Vec<Review>,
    pub surveys: Vec<Survey>,
}

pub struct DashboardsUseCase<R>
where
    R: BookingStore,
{
    repo: Arc<R>,
}

impl<R> DashboardsUseCase<R>
where
    R: BookingStore,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn admin_dashboard(&self, actor: &Session) -> BookingResult<AdminDashboard> {
        require(actor, UserType::Admin)?;

        let schools = self.repo.list_schools().await?;
        let students = self.repo.list_students().await?;
        let registrations = self.repo.list_registrations().await?;

        let mut by_school: HashMap<SchoolId, Vec<Student>> = HashMap::new();
        for student in students {
            by_school.entry(student.school_id).or_default().push(student);
        }

        let school_stats = schools
            .iter()
            .map(|school| {
                let students = by_school
                    .get(&school.school_id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                SchoolStats {
                    school_id: school.school_id,
                    name: school.name.clone(),
                    total_students: students.len(),
                    registered_students: pricing::students_with_registrations(
                        students,
                        &registrations,
                    ),
                }
            })
            .collect();

        Ok(AdminDashboard {
            total_schools: schools.len(),
            total_students: self.repo.count_students().await?,
            total_registrations: self.repo.count_registrations(None).await?,
            pending_payments: self
                .repo
                .count_registrations(Some(RegistrationStatus::PendingPayment))
                .await?,
            school_stats,
        })
    }

    pub async fn school_dashboard(&self, actor: &Session) -> BookingResult<SchoolDashboard> {
        require(actor, UserType::School)?;

        let school_id = actor.tenant_school_id().ok_or(BookingError::SchoolNotFound)?;
        let school = self
            .repo
            .find_school(&school_id)
            .await?
            .ok_or(BookingError::SchoolNotFound)?;

        let tours = self.assigned_tours(&school).await?;
        let students = self.repo.list_students_by_school(&school_id).await?;
        let students = self.with_registrations(students).await?;

        Ok(SchoolDashboard {
            school,
            tours,
            students,
        })
    }

    pub async fn parent_dashboard(&self, actor: &Session) -> BookingResult<ParentDashboard> {
        require(actor, UserType::Parent)?;

        let parent_id = actor.parent_id().ok_or(BookingError::ParentNotFound)?;
        let school_id = actor.tenant_school_id().ok_or(BookingError::SchoolNotFound)?;

        let school = self
            .repo
            .find_school(&school_id)
            .await?
            .ok_or(BookingError::SchoolNotFound)?;
        let parent = self
            .repo
            .find_parent_profile(&parent_id)
            .await?
            .ok_or(BookingError::ParentNotFound)?;

        let tours = self.assigned_tours(&school).await?;
        let student = match self.linked_student(&parent.tc_no).await? {
            Some(student) => self.with_registrations(vec![student]).await?.pop(),
            None => None,
        };
        let surveys = self.repo.list_active_surveys().await?;

        Ok(ParentDashboard {
            school,
            tours,
            parent_tc: parent.tc_no,
            student,
            surveys,
        })
    }

    /// Public home page
    pub async fn home(&self) -> BookingResult<HomePage> {
        let sliders = self.repo.list_sliders().await?;
        let site_config = self.repo.get_site_config().await?.unwrap_or_default();
        let schools = self.repo.list_schools().await?;
        let tours = self.repo.list_tours().await?;
        let students = self.repo.list_students().await?;
        let registrations = self.repo.list_registrations().await?;

        Ok(HomePage {
            sliders,
            site_config,
            tours: home_listing(&schools, &tours, &students, &registrations),
        })
    }

    /// Public tour page, optionally in the context of one school
    pub async fn tour_detail(
        &self,
        tour_id: &TourId,
        school_id: Option<&SchoolId>,
    ) -> BookingResult<TourDetail> {
        let tour = self
            .repo
            .find_tour(tour_id)
            .await?
            .ok_or(BookingError::TourNotFound)?;

        let school = match school_id {
            Some(id) => self.repo.find_school(id).await?,
            None => None,
        };

        let (price, registered_count) = match &school {
            Some(school) => {
                let students = self.repo.list_students_by_school(&school.school_id).await?;
                let registrations = self.repo.list_registrations_by_tour(tour_id).await?;
                (
                    school.price_for(*tour_id),
                    pricing::registered_student_count(*tour_id, &students, &registrations),
                )
            }
            None => (None, 0),
        };

        let locations = self.repo.find_locations(&tour.location_ids).await?;
        let reviews = self
            .repo
            .list_reviews_by_tour(tour_id, ReviewStatus::Approved)
            .await?;
        let surveys = self.repo.list_active_surveys().await?;

        Ok(TourDetail {
            tour,
            school: school.as_ref().map(SchoolBadge::from),
            price,
            registered_count,
            locations,
            reviews,
            surveys,
        })
    }

    /// Best-effort parent to student link: same national ID, may be absent
    pub async fn linked_student(&self, parent_tc: &str) -> BookingResult<Option<Student>> {
        if parent_tc.trim().is_empty() {
            return Ok(None);
        }
        self.repo.find_student_by_tc(parent_tc).await
    }

    async fn assigned_tours(&self, school: &School) -> BookingResult<Vec<PricedTour>> {
        let tours = self.repo.list_tours().await?;
        Ok(tours
            .into_iter()
            .filter_map(|tour| {
                school.price_for(tour.tour_id).map(|price| PricedTour {
                    tour,
                    price: Some(price),
                })
            })
            .collect())
    }

    async fn with_registrations(
        &self,
        students: Vec<Student>,
    ) -> BookingResult<Vec<StudentWithRegistrations>> {
        let ids: Vec<StudentId> = students.iter().map(|s| s.student_id).collect();
        let registrations = self.repo.list_registrations_by_students(&ids).await?;

        let mut by_student: HashMap<StudentId, Vec<Registration>> = HashMap::new();
        for registration in registrations {
            by_student
                .entry(registration.student_id)
                .or_default()
                .push(registration);
        }

        Ok(students
            .into_iter()
            .map(|student| StudentWithRegistrations {
                registrations: by_student.remove(&student.student_id).unwrap_or_default(),
                student,
            })
            .collect())
    }
}

/// One card per (school, assigned tour) plus one per unassigned tour, by date
pub fn home_listing(
    schools: &[School],
    tours: &[Tour],
    students: &[Student],
    registrations: &[Registration],
) -> Vec<HomeTour> {
    let tours_by_id: HashMap<TourId, &Tour> = tours.iter().map(|t| (t.tour_id, t)).collect();

    let mut listing = Vec::new();
    for school in schools {
        let school_students: Vec<Student> = students
            .iter()
            .filter(|s| s.school_id == school.school_id)
            .cloned()
            .collect();

        for assignment in &school.assigned_tours {
            let Some(tour) = tours_by_id.get(&assignment.tour_id) else {
                continue;
            };
            listing.push(HomeTour {
                tour_id: tour.tour_id,
                title: tour.title.clone(),
                cover_image: tour.cover_image.clone(),
                date: tour.date,
                location: tour.location.clone(),
                school: Some(SchoolBadge::from(school)),
                price: Some(assignment.price),
                registered_count: pricing::registered_student_count(
                    tour.tour_id,
                    &school_students,
                    registrations,
                ),
            });
        }
    }

    let unassigned = tours
        .iter()
        .filter(|tour| !listing.iter().any(|entry| entry.tour_id == tour.tour_id))
        .map(|tour| HomeTour {
            tour_id: tour.tour_id,
            title: tour.title.clone(),
            cover_image: tour.cover_image.clone(),
            date: tour.date,
            location: tour.location.clone(),
            school: None,
            price: None,
            registered_count: 0,
        })
        .collect::<Vec<_>>();

    listing.extend(unassigned);
    listing.sort_by_key(|entry| entry.date);
    listing
}
