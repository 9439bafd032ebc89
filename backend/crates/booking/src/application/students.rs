//! Parent Student Form Use Case
//!
//! A parent fills in their own contact details and their child's profile in
//! one form. The student is keyed by national ID and moves to the school the
//! parent logged in with.

use std::sync::Arc;

use auth::{Session, UserType, require};

use crate::application::schools::required;
use crate::domain::entity::{Student, StudentRecord};
use crate::domain::repository::{ParentProfileRepository, StudentRepository};
use crate::error::{BookingError, BookingResult};

#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    /// Defaults to the parent's own national ID when blank
    pub tc_no: Option<String>,
    pub name: String,
    pub grade: String,
    pub school_no: String,
    pub allergies: String,
    pub parent_name: String,
    pub parent_phone: String,
}

pub struct StudentFormUseCase<R>
where
    R: StudentRepository + ParentProfileRepository,
{
    repo: Arc<R>,
}

impl<R> StudentFormUseCase<R>
where
    R: StudentRepository + ParentProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn upsert_student(&self, actor: &Session, form: StudentForm) -> BookingResult<Student> {
        require(actor, UserType::Parent)?;

        let parent_id = actor.parent_id().ok_or(BookingError::ParentNotFound)?;
        let school_id = actor.tenant_school_id().ok_or(BookingError::SchoolNotFound)?;
        let name = required(&form.name, "Öğrenci adı")?;

        let parent = self
            .repo
            .find_parent_profile(&parent_id)
            .await?
            .ok_or(BookingError::ParentNotFound)?;

        self.repo
            .update_parent_contact(&parent_id, form.parent_name.trim(), form.parent_phone.trim())
            .await?;

        let tc_no = form
            .tc_no
            .map(|tc| tc.trim().to_string())
            .filter(|tc| !tc.is_empty())
            .unwrap_or(parent.tc_no);

        let student = self
            .repo
            .upsert_student(&StudentRecord {
                tc_no,
                name,
                grade: form.grade.trim().to_string(),
                school_no: form.school_no.trim().to_string(),
                allergies: Some(form.allergies.trim().to_string()),
                school_id,
            })
            .await?;

        tracing::info!(
            student_id = %student.student_id,
            parent_id = %parent_id,
            school_id = %school_id,
            "Student profile saved by parent"
        );

        Ok(student)
    }
}
