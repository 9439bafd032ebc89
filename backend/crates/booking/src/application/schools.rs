//! Schools Use Case
//!
//! Admin management of schools and their per-tour prices.

use std::sync::Arc;

use auth::{Session, UserType, require};
use chrono::Utc;
use kernel::id::SchoolId;

use crate::domain::entity::{School, TourAssignment};
use crate::domain::repository::SchoolRepository;
use crate::error::{BookingError, BookingResult};

/// Upsert payload; `school_id: None` creates a new school
#[derive(Debug, Clone, Default)]
pub struct SchoolInput {
    pub school_id: Option<SchoolId>,
    pub name: String,
    pub city: String,
    pub district: String,
    pub contact_name: String,
    pub phone: String,
    pub username: String,
    pub password: String,
    pub access_code: String,
    pub iban: Option<String>,
    /// `None` keeps the stored assignments, `Some` replaces them
    pub assigned_tours: Option<Vec<TourAssignment>>,
}

pub struct SchoolsUseCase<R>
where
    R: SchoolRepository,
{
    repo: Arc<R>,
}

impl<R> SchoolsUseCase<R>
where
    R: SchoolRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, actor: &Session) -> BookingResult<Vec<School>> {
        require(actor, UserType::Admin)?;
        self.repo.list_schools().await
    }

    pub async fn upsert(&self, actor: &Session, input: SchoolInput) -> BookingResult<School> {
        require(actor, UserType::Admin)?;

        let name = required(&input.name, "Okul adı")?;
        let username = required(&input.username, "Kullanıcı adı")?;
        let password = required(&input.password, "Şifre")?;
        // parents type the code in any case; it is stored the way login compares it
        let access_code = required(&input.access_code, "Erişim kodu")?.to_uppercase();

        let existing = match input.school_id {
            Some(id) => self.repo.find_school(&id).await?,
            None => None,
        };

        let assigned_tours = match input.assigned_tours {
            Some(assignments) => assignments,
            None => existing
                .as_ref()
                .map(|s| s.assigned_tours.clone())
                .unwrap_or_default(),
        };

        let school = School {
            school_id: input.school_id.unwrap_or_default(),
            name,
            city: input.city.trim().to_string(),
            district: input.district.trim().to_string(),
            contact_name: input.contact_name.trim().to_string(),
            phone: input.phone.trim().to_string(),
            username,
            password,
            access_code,
            iban: input
                .iban
                .map(|iban| iban.trim().to_string())
                .filter(|iban| !iban.is_empty()),
            assigned_tours,
            created_at: existing.map(|s| s.created_at).unwrap_or_else(Utc::now),
        };

        self.repo.upsert_school(&school).await?;

        tracing::info!(
            school_id = %school.school_id,
            school = %school.name,
            assignments = school.assigned_tours.len(),
            "School saved"
        );

        Ok(school)
    }

    pub async fn delete(&self, actor: &Session, school_id: &SchoolId) -> BookingResult<()> {
        require(actor, UserType::Admin)?;

        if !self.repo.delete_school(school_id).await? {
            return Err(BookingError::SchoolNotFound);
        }

        tracing::info!(school_id = %school_id, "School deleted");
        Ok(())
    }
}

/// Trimmed value of a required text field
pub(crate) fn required(value: &str, field: &'static str) -> BookingResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BookingError::MissingField(field));
    }
    Ok(value.to_string())
}
