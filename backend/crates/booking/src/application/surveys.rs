//! Surveys Use Case
//!
//! Admins manage surveys; anyone may vote. Votes are written with a
//! compare-and-swap on the survey version so concurrent votes never
//! overwrite each other.

use std::sync::Arc;

use auth::{Session, UserType, require};
use kernel::id::SurveyId;

use crate::application::config::BookingConfig;
use crate::application::schools::required;
use crate::domain::entity::Survey;
use crate::domain::repository::SurveyRepository;
use crate::error::{BookingError, BookingResult};

#[derive(Debug, Clone, Default)]
pub struct SurveyInput {
    pub title: String,
    pub description: String,
    pub options: Vec<String>,
}

pub struct SurveysUseCase<R>
where
    R: SurveyRepository,
{
    repo: Arc<R>,
    config: Arc<BookingConfig>,
}

impl<R> SurveysUseCase<R>
where
    R: SurveyRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<BookingConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn list(&self, actor: &Session) -> BookingResult<Vec<Survey>> {
        require(actor, UserType::Admin)?;
        self.repo.list_surveys().await
    }

    pub async fn create(&self, actor: &Session, input: SurveyInput) -> BookingResult<Survey> {
        require(actor, UserType::Admin)?;

        let title = required(&input.title, "Anket başlığı")?;
        let survey = Survey::new(title, input.description.trim().to_string(), input.options)?;
        self.repo.create_survey(&survey).await?;

        tracing::info!(
            survey_id = %survey.survey_id,
            options = survey.options.len(),
            "Survey created"
        );
        Ok(survey)
    }

    pub async fn set_active(
        &self,
        actor: &Session,
        survey_id: &SurveyId,
        is_active: bool,
    ) -> BookingResult<()> {
        require(actor, UserType::Admin)?;

        if !self.repo.set_survey_active(survey_id, is_active).await? {
            return Err(BookingError::SurveyNotFound);
        }

        tracing::info!(survey_id = %survey_id, is_active, "Survey toggled");
        Ok(())
    }

    pub async fn delete(&self, actor: &Session, survey_id: &SurveyId) -> BookingResult<()> {
        require(actor, UserType::Admin)?;

        if !self.repo.delete_survey(survey_id).await? {
            return Err(BookingError::SurveyNotFound);
        }

        tracing::info!(survey_id = %survey_id, "Survey deleted");
        Ok(())
    }

    /// Public vote; returns the survey as written
    pub async fn vote(&self, survey_id: &SurveyId, option: &str) -> BookingResult<Survey> {
        let option = option.trim();
        let attempts = self.config.vote_max_attempts.max(1);

        for attempt in 1..=attempts {
            let mut survey = self
                .repo
                .find_survey(survey_id)
                .await?
                .ok_or(BookingError::SurveyNotFound)?;

            let read_version = survey.version;
            survey.record_vote(option)?;

            if self
                .repo
                .update_survey_votes(survey_id, &survey.options, &survey.votes, read_version)
                .await?
            {
                survey.version = read_version + 1;
                tracing::debug!(survey_id = %survey_id, attempt, "Vote recorded");
                return Ok(survey);
            }

            tracing::debug!(survey_id = %survey_id, attempt, "Survey version moved, retrying vote");
        }

        Err(BookingError::VoteContention)
    }
}
