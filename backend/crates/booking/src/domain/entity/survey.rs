//! Survey Entity

use chrono::{DateTime, Utc};
use kernel::id::SurveyId;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, BookingResult};

/// Vote tally for one option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCount {
    pub option: String,
    #[serde(default)]
    pub count: i64,
}

/// A poll shown on public tour pages and the parent dashboard
///
/// `version` increases on every vote write and guards concurrent updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    pub survey_id: SurveyId,
    pub title: String,
    pub description: String,
    pub options: Vec<String>,
    pub votes: Vec<VoteCount>,
    pub is_active: bool,
    pub version: i64,
    pub created_at: DateTime<Utc>,
}

impl Survey {
    pub const MIN_OPTIONS: usize = 2;

    /// New active survey with a zero tally for every non-blank option
    pub fn new(title: String, description: String, options: Vec<String>) -> BookingResult<Self> {
        let options: Vec<String> = options
            .into_iter()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        if options.len() < Self::MIN_OPTIONS {
            return Err(BookingError::SurveyOptionsRequired);
        }

        let votes = options
            .iter()
            .map(|option| VoteCount {
                option: option.clone(),
                count: 0,
            })
            .collect();

        Ok(Self {
            survey_id: SurveyId::new(),
            title,
            description,
            options,
            votes,
            is_active: true,
            version: 0,
            created_at: Utc::now(),
        })
    }

    /// Count one vote on an open survey
    ///
    /// An option the survey does not list yet is added to `options` and
    /// starts its tally at 1. Blank options are rejected.
    pub fn record_vote(&mut self, option: &str) -> BookingResult<()> {
        if !self.is_active {
            return Err(BookingError::SurveyClosed);
        }
        let option = option.trim();
        if option.is_empty() {
            return Err(BookingError::InvalidSurveyOption);
        }
        if !self.options.iter().any(|o| o == option) {
            self.options.push(option.to_string());
        }
        tally(&mut self.votes, option);
        Ok(())
    }

    pub fn total_votes(&self) -> i64 {
        self.votes.iter().map(|v| v.count).sum()
    }
}

/// Increment the option's count, appending `{option, 1}` when it has none yet
pub fn tally(votes: &mut Vec<VoteCount>, option: &str) {
    match votes.iter_mut().find(|v| v.option == option) {
        Some(entry) => entry.count += 1,
        None => votes.push(VoteCount {
            option: option.to_string(),
            count: 1,
        }),
    }
}
