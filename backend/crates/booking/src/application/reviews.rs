//! Reviews Use Case

use std::sync::Arc;

use auth::{Session, UserType, require};
use kernel::id::{ReviewId, TourId};

use crate::domain::entity::Review;
use crate::domain::repository::{ReviewRepository, TourRepository};
use crate::domain::value_object::{Rating, ReviewStatus};
use crate::error::{BookingError, BookingResult};

pub struct ReviewsUseCase<R>
where
    R: ReviewRepository + TourRepository,
{
    repo: Arc<R>,
}

impl<R> ReviewsUseCase<R>
where
    R: ReviewRepository + TourRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Parent review, held as `pending` until an admin moderates it
    pub async fn submit(
        &self,
        actor: &Session,
        tour_id: &TourId,
        rating: i32,
        comment: &str,
    ) -> BookingResult<Review> {
        require(actor, UserType::Parent)?;

        let parent_id = actor.parent_id().ok_or(BookingError::ParentNotFound)?;
        let rating = Rating::new(rating)?;
        if self.repo.find_tour(tour_id).await?.is_none() {
            return Err(BookingError::TourNotFound);
        }

        let review = Review::submit(*tour_id, parent_id, rating, comment.trim().to_string());
        self.repo.create_review(&review).await?;

        tracing::info!(review_id = %review.review_id, tour_id = %tour_id, "Review submitted");
        Ok(review)
    }

    pub async fn list(&self, actor: &Session) -> BookingResult<Vec<Review>> {
        require(actor, UserType::Admin)?;
        self.repo.list_reviews().await
    }

    pub async fn update_status(
        &self,
        actor: &Session,
        review_id: &ReviewId,
        status: ReviewStatus,
    ) -> BookingResult<()> {
        require(actor, UserType::Admin)?;

        if !self.repo.update_review_status(review_id, status).await? {
            return Err(BookingError::ReviewNotFound);
        }

        tracing::info!(review_id = %review_id, status = %status, "Review moderated");
        Ok(())
    }
}
