//! School Entity

use chrono::{DateTime, Utc};
use kernel::id::{SchoolId, TourId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Price a school pays for one of its assigned tours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourAssignment {
    pub tour_id: TourId,
    pub price: f64,
}

/// A tenant of the platform
///
/// `username` and `access_code` are unique across schools; the access code
/// is what parents type to log in.
#[derive(Clone)]
pub struct School {
    pub school_id: SchoolId,
    pub name: String,
    pub city: String,
    pub district: String,
    pub contact_name: String,
    pub phone: String,
    pub username: String,
    pub password: String,
    pub access_code: String,
    pub iban: Option<String>,
    pub assigned_tours: Vec<TourAssignment>,
    pub created_at: DateTime<Utc>,
}

impl School {
    /// Assigned price, `None` when the tour is not assigned to this school
    pub fn price_for(&self, tour_id: TourId) -> Option<f64> {
        self.assigned_tours
            .iter()
            .find(|a| a.tour_id == tour_id)
            .map(|a| a.price)
    }

    pub fn is_assigned(&self, tour_id: TourId) -> bool {
        self.price_for(tour_id).is_some()
    }
}

impl fmt::Debug for School {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("School")
            .field("school_id", &self.school_id)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("access_code", &self.access_code)
            .field("assigned_tours", &self.assigned_tours)
            .finish_non_exhaustive()
    }
}
