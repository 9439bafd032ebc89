//! Site Settings Use Case
//!
//! Admin editing of the singleton site configuration and the home page
//! slider. Slider saves replace the whole list.

use std::sync::Arc;

use auth::{Session, UserType, require};
use kernel::id::SliderId;

use crate::domain::entity::{SiteConfig, Slider};
use crate::domain::repository::SiteContentRepository;
use crate::error::BookingResult;

#[derive(Debug, Clone, Default)]
pub struct SliderInput {
    pub image: String,
    pub title: String,
    pub subtitle: String,
}

pub struct SiteSettingsUseCase<R>
where
    R: SiteContentRepository,
{
    repo: Arc<R>,
}

impl<R> SiteSettingsUseCase<R>
where
    R: SiteContentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, actor: &Session) -> BookingResult<(SiteConfig, Vec<Slider>)> {
        require(actor, UserType::Admin)?;

        let config = self.repo.get_site_config().await?.unwrap_or_default();
        let sliders = self.repo.list_sliders().await?;
        Ok((config, sliders))
    }

    pub async fn update_config(&self, actor: &Session, config: SiteConfig) -> BookingResult<()> {
        require(actor, UserType::Admin)?;

        self.repo.save_site_config(&config).await?;

        tracing::info!(stats = config.stats.len(), "Site config updated");
        Ok(())
    }

    /// Replace every slider; order follows the submitted list
    pub async fn replace_sliders(
        &self,
        actor: &Session,
        items: Vec<SliderInput>,
    ) -> BookingResult<Vec<Slider>> {
        require(actor, UserType::Admin)?;

        let sliders: Vec<Slider> = items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| Slider {
                slider_id: SliderId::new(),
                image: item.image,
                title: item.title,
                subtitle: item.subtitle,
                sort_order: idx as i32,
            })
            .collect();

        self.repo.replace_sliders(&sliders).await?;

        tracing::info!(count = sliders.len(), "Sliders replaced");
        Ok(sliders)
    }
}
