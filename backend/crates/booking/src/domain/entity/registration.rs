//! Registration Entity

use chrono::{DateTime, Utc};
use kernel::id::{RegistrationId, StudentId, TourId};

use crate::domain::value_object::RegistrationStatus;

/// A student's enrollment in a tour
///
/// Not unique per (student, tour); status updates act on the oldest row.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub registration_id: RegistrationId,
    pub student_id: StudentId,
    pub tour_id: TourId,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub fn new(student_id: StudentId, tour_id: TourId) -> Self {
        Self {
            registration_id: RegistrationId::new(),
            student_id,
            tour_id,
            status: RegistrationStatus::PendingPayment,
            created_at: Utc::now(),
        }
    }

    pub fn is_approved_for(&self, tour_id: TourId) -> bool {
        self.tour_id == tour_id && self.status.is_approved()
    }
}
