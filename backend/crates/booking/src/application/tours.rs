//! Tours Use Case

use std::collections::HashSet;
use std::sync::Arc;

use auth::{Session, UserType, require};
use kernel::id::{LocationId, TourId};

use crate::application::schools::required;
use crate::domain::entity::{ItineraryStop, Tour};
use crate::domain::repository::TourRepository;
use crate::error::{BookingError, BookingResult};

/// Upsert payload; `tour_id: None` creates a new tour
#[derive(Debug, Clone, Default)]
pub struct TourInput {
    pub tour_id: Option<TourId>,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub images: Vec<String>,
    pub video_url: Option<String>,
    pub tour_type: String,
    /// `YYYY-MM-DD` or RFC 3339
    pub date: String,
    pub location: String,
    pub itinerary: Vec<ItineraryStop>,
    pub price: f64,
    pub location_ids: Vec<LocationId>,
}

pub struct ToursUseCase<R>
where
    R: TourRepository,
{
    repo: Arc<R>,
}

impl<R> ToursUseCase<R>
where
    R: TourRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, actor: &Session) -> BookingResult<Vec<Tour>> {
        require(actor, UserType::Admin)?;
        self.repo.list_tours().await
    }

    pub async fn upsert(&self, actor: &Session, input: TourInput) -> BookingResult<Tour> {
        require(actor, UserType::Admin)?;

        let title = required(&input.title, "Tur başlığı")?;
        let date = Tour::parse_date(&input.date)?;
        if !input.price.is_finite() || input.price < 0.0 {
            return Err(BookingError::InvalidAmount);
        }

        let mut seen = HashSet::new();
        let mut location_ids = input.location_ids;
        location_ids.retain(|id| seen.insert(*id));

        let tour = Tour {
            tour_id: input.tour_id.unwrap_or_default(),
            title,
            description: input.description,
            cover_image: input.cover_image,
            images: input
                .images
                .into_iter()
                .filter(|url| !url.trim().is_empty())
                .collect(),
            video_url: input.video_url.filter(|url| !url.trim().is_empty()),
            tour_type: input.tour_type,
            date,
            location: input.location,
            itinerary: input.itinerary,
            price: input.price,
            location_ids,
        };

        self.repo.upsert_tour(&tour).await?;

        tracing::info!(tour_id = %tour.tour_id, title = %tour.title, "Tour saved");
        Ok(tour)
    }

    pub async fn delete(&self, actor: &Session, tour_id: &TourId) -> BookingResult<()> {
        require(actor, UserType::Admin)?;

        if !self.repo.delete_tour(tour_id).await? {
            return Err(BookingError::TourNotFound);
        }

        tracing::info!(tour_id = %tour_id, "Tour deleted");
        Ok(())
    }
}
