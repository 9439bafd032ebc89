//! Locations Use Case

use std::sync::Arc;

use auth::{Session, UserType, require};
use kernel::id::LocationId;

use crate::application::schools::required;
use crate::domain::entity::Location;
use crate::domain::repository::LocationRepository;
use crate::error::{BookingError, BookingResult};

#[derive(Debug, Clone, Default)]
pub struct LocationInput {
    pub location_id: Option<LocationId>,
    pub title: String,
    pub description: String,
    pub image: String,
    pub video_url: Option<String>,
}

pub struct LocationsUseCase<R>
where
    R: LocationRepository,
{
    repo: Arc<R>,
}

impl<R> LocationsUseCase<R>
where
    R: LocationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, actor: &Session) -> BookingResult<Vec<Location>> {
        require(actor, UserType::Admin)?;
        self.repo.list_locations().await
    }

    pub async fn upsert(&self, actor: &Session, input: LocationInput) -> BookingResult<Location> {
        require(actor, UserType::Admin)?;

        let location = Location {
            location_id: input.location_id.unwrap_or_default(),
            title: required(&input.title, "Lokasyon adı")?,
            description: input.description,
            image: input.image,
            video_url: input.video_url.filter(|url| !url.trim().is_empty()),
        };

        self.repo.upsert_location(&location).await?;

        tracing::info!(location_id = %location.location_id, title = %location.title, "Location saved");
        Ok(location)
    }

    pub async fn delete(&self, actor: &Session, location_id: &LocationId) -> BookingResult<()> {
        require(actor, UserType::Admin)?;

        if !self.repo.delete_location(location_id).await? {
            return Err(BookingError::LocationNotFound);
        }

        tracing::info!(location_id = %location_id, "Location deleted");
        Ok(())
    }
}
