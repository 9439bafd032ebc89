//! Participant Export Use Case
//!
//! Spreadsheet of a tour's approved registrations with student, school and
//! parent contact columns.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use auth::{Session, UserType, require};
use kernel::id::{SchoolId, StudentId, TourId};

use crate::application::config::BookingConfig;
use crate::domain::entity::{ParentProfile, Registration, School, Student};
use crate::domain::repository::{
    ParentProfileRepository, RegistrationRepository, SchoolRepository, StudentRepository,
    TourRepository,
};
use crate::error::{BookingError, BookingResult};
use crate::infra::spreadsheet;

pub const PARTICIPANT_HEADERS: [&str; 8] = [
    "Öğrenci Adı",
    "TC No",
    "Sınıf",
    "Okul No",
    "Okul",
    "Veli Adı",
    "Veli Telefon",
    "Kayıt Tarihi",
];

const MISSING_PARENT_NAME: &str = "Kayıtlı Değil";
const MISSING_PARENT_PHONE: &str = "-";

/// Generated workbook
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct ParticipantExportUseCase<R>
where
    R: TourRepository
        + RegistrationRepository
        + StudentRepository
        + SchoolRepository
        + ParentProfileRepository,
{
    repo: Arc<R>,
    config: Arc<BookingConfig>,
}

impl<R> ParticipantExportUseCase<R>
where
    R: TourRepository
        + RegistrationRepository
        + StudentRepository
        + SchoolRepository
        + ParentProfileRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<BookingConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn export(&self, actor: &Session, tour_id: &TourId) -> BookingResult<ExportFile> {
        require(actor, UserType::Admin)?;

        let tour = self
            .repo
            .find_tour(tour_id)
            .await?
            .ok_or(BookingError::TourNotFound)?;

        let registrations: Vec<Registration> = self
            .repo
            .list_registrations_by_tour(tour_id)
            .await?
            .into_iter()
            .filter(|r| r.status.is_approved())
            .collect();

        let students = self.repo.list_students().await?;
        let schools = self.repo.list_schools().await?;
        let tc_nos = participant_tc_nos(&registrations, &students);
        let parents = self.repo.find_parent_profiles_by_tc(&tc_nos).await?;

        let rows = participant_rows(&registrations, &students, &schools, &parents);
        let bytes =
            spreadsheet::write_sheet(&self.config.export_sheet_name, &PARTICIPANT_HEADERS, &rows)?;

        tracing::info!(tour_id = %tour_id, rows = rows.len(), "Participant list exported");

        Ok(ExportFile {
            file_name: format!("katilimcilar-{}.xlsx", tour.date.format("%Y-%m-%d")),
            bytes,
        })
    }
}

/// National IDs of the registered students, each once
pub fn participant_tc_nos(registrations: &[Registration], students: &[Student]) -> Vec<String> {
    let registered: HashSet<StudentId> = registrations.iter().map(|r| r.student_id).collect();

    let mut tc_nos: Vec<String> = students
        .iter()
        .filter(|s| registered.contains(&s.student_id))
        .map(|s| s.tc_no.clone())
        .collect();
    tc_nos.sort();
    tc_nos.dedup();
    tc_nos
}

/// One row per registration, in the order of `PARTICIPANT_HEADERS`
///
/// Parent contact comes from the parent whose national ID equals the
/// student's; registrations of deleted students are left out.
pub fn participant_rows(
    registrations: &[Registration],
    students: &[Student],
    schools: &[School],
    parents: &[ParentProfile],
) -> Vec<Vec<String>> {
    let students: HashMap<StudentId, &Student> =
        students.iter().map(|s| (s.student_id, s)).collect();
    let schools: HashMap<SchoolId, &School> = schools.iter().map(|s| (s.school_id, s)).collect();
    let parents: HashMap<&str, &ParentProfile> =
        parents.iter().map(|p| (p.tc_no.as_str(), p)).collect();

    registrations
        .iter()
        .filter_map(|registration| {
            let student = students.get(&registration.student_id)?;
            let school_name = schools
                .get(&student.school_id)
                .map(|s| s.name.clone())
                .unwrap_or_default();
            let parent = parents.get(student.tc_no.as_str());
            let parent_name = parent
                .and_then(|p| p.name.clone())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| MISSING_PARENT_NAME.to_string());
            let parent_phone = parent
                .and_then(|p| p.phone.clone())
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| MISSING_PARENT_PHONE.to_string());

            Some(vec![
                student.name.clone(),
                student.tc_no.clone(),
                student.grade.clone(),
                student.school_no.clone(),
                school_name,
                parent_name,
                parent_phone,
                registration.created_at.format("%d.%m.%Y").to_string(),
            ])
        })
        .collect()
}
