//! Review Entity

use chrono::{DateTime, Utc};
use kernel::id::{ParentId, ReviewId, TourId};

use crate::domain::value_object::{Rating, ReviewStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: ReviewId,
    pub tour_id: TourId,
    pub parent_id: ParentId,
    pub rating: Rating,
    pub comment: String,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// New reviews wait for moderation
    pub fn submit(tour_id: TourId, parent_id: ParentId, rating: Rating, comment: String) -> Self {
        Self {
            review_id: ReviewId::new(),
            tour_id,
            parent_id,
            rating,
            comment,
            status: ReviewStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
