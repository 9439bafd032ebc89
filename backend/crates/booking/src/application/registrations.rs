//! Registrations Use Case
//!
//! Parents enroll their student in a tour; schools confirm or revert payment.

use std::sync::Arc;

use auth::{Session, UserType, require};
use kernel::id::{StudentId, TourId};

use crate::domain::entity::{Registration, Student};
use crate::domain::repository::{RegistrationRepository, StudentRepository, TourRepository};
use crate::domain::value_object::RegistrationStatus;
use crate::error::{BookingError, BookingResult};

pub struct RegistrationsUseCase<R>
where
    R: RegistrationRepository + StudentRepository + TourRepository,
{
    repo: Arc<R>,
}

impl<R> RegistrationsUseCase<R>
where
    R: RegistrationRepository + StudentRepository + TourRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// New `pending_payment` registration; duplicates are allowed
    pub async fn register(
        &self,
        actor: &Session,
        student_id: &StudentId,
        tour_id: &TourId,
    ) -> BookingResult<Registration> {
        require(actor, UserType::Parent)?;

        self.student_of_tenant(actor, student_id).await?;
        if self.repo.find_tour(tour_id).await?.is_none() {
            return Err(BookingError::TourNotFound);
        }

        let registration = Registration::new(*student_id, *tour_id);
        self.repo.create_registration(&registration).await?;

        tracing::info!(
            registration_id = %registration.registration_id,
            student_id = %student_id,
            tour_id = %tour_id,
            "Student registered for tour"
        );

        Ok(registration)
    }

    /// Set the status of the oldest registration of (student, tour)
    pub async fn update_status(
        &self,
        actor: &Session,
        student_id: &StudentId,
        tour_id: &TourId,
        status: RegistrationStatus,
    ) -> BookingResult<()> {
        require(actor, UserType::School)?;

        self.student_of_tenant(actor, student_id).await?;

        let registration = self
            .repo
            .find_first_registration(student_id, tour_id)
            .await?
            .ok_or(BookingError::RegistrationNotFound)?;

        if !self
            .repo
            .update_registration_status(&registration.registration_id, status)
            .await?
        {
            return Err(BookingError::RegistrationNotFound);
        }

        tracing::info!(
            registration_id = %registration.registration_id,
            status = %status,
            changed_by = %actor.user_id,
            "Registration status updated"
        );

        Ok(())
    }

    /// The student, provided it belongs to the session's school
    async fn student_of_tenant(&self, actor: &Session, student_id: &StudentId) -> BookingResult<Student> {
        let student = self
            .repo
            .find_student(student_id)
            .await?
            .ok_or(BookingError::StudentNotFound)?;

        if actor.tenant_school_id() != Some(student.school_id) {
            return Err(BookingError::StudentOutsideSchool);
        }

        Ok(student)
    }
}
