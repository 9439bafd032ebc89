//! Bulk Student Import
//!
//! A school uploads a spreadsheet; the first sheet's header row names the
//! columns. Several spellings are accepted per field and the first non-empty
//! one wins:
//!
//! | field     | headers                                   |
//! |-----------|-------------------------------------------|
//! | TC No     | `TC No`, `TC`, `tc`                       |
//! | name      | `Ad` + `Soyad`, else `Ad Soyad`, else `İsim` |
//! | grade     | `Sınıf`, `Sinif`                          |
//! | school no | `Okul No`, `Numara`                       |
//!
//! Rows without a national ID or a name are skipped.

use std::sync::Arc;

use auth::{Session, UserType, require};
use kernel::id::SchoolId;

use crate::domain::entity::StudentRecord;
use crate::domain::repository::StudentRepository;
use crate::error::{BookingError, BookingResult};
use crate::infra::spreadsheet::{self, SheetRow};

const TC_HEADERS: &[&str] = &["TC No", "TC", "tc"];
const FULL_NAME_HEADERS: &[&str] = &["Ad Soyad", "İsim"];
const GRADE_HEADERS: &[&str] = &["Sınıf", "Sinif"];
const SCHOOL_NO_HEADERS: &[&str] = &["Okul No", "Numara"];

/// One student read from the sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedStudent {
    pub tc_no: String,
    pub name: String,
    pub grade: String,
    pub school_no: String,
}

impl ImportedStudent {
    fn into_record(self, school_id: SchoolId) -> StudentRecord {
        StudentRecord {
            tc_no: self.tc_no,
            name: self.name,
            grade: self.grade,
            school_no: self.school_no,
            allergies: None,
            school_id,
        }
    }
}

/// Map one sheet row; `None` when the national ID or the name is missing
pub fn map_row(row: &SheetRow) -> Option<ImportedStudent> {
    let tc_no = first_value(row, TC_HEADERS)?;
    let name = match first_value(row, &["Ad"]) {
        Some(first) => {
            let last = first_value(row, &["Soyad"]).unwrap_or_default();
            format!("{} {}", first, last).trim().to_string()
        }
        None => first_value(row, FULL_NAME_HEADERS)?,
    };
    if name.is_empty() {
        return None;
    }

    Some(ImportedStudent {
        tc_no,
        name,
        grade: first_value(row, GRADE_HEADERS).unwrap_or_default(),
        school_no: first_value(row, SCHOOL_NO_HEADERS).unwrap_or_default(),
    })
}

/// First alias whose cell is not blank after trimming
fn first_value(row: &SheetRow, headers: &[&str]) -> Option<String> {
    headers
        .iter()
        .filter_map(|header| row.get(*header))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

pub struct StudentImportUseCase<R>
where
    R: StudentRepository,
{
    repo: Arc<R>,
}

impl<R> StudentImportUseCase<R>
where
    R: StudentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Upsert every usable row into the session's school; returns the count
    pub async fn import(&self, actor: &Session, file: Option<&[u8]>) -> BookingResult<usize> {
        require(actor, UserType::School)?;

        let school_id = actor.tenant_school_id().ok_or(BookingError::SchoolNotFound)?;
        let bytes = file.filter(|b| !b.is_empty()).ok_or(BookingError::FileMissing)?;

        let rows = spreadsheet::read_first_sheet(bytes)?;
        let total_rows = rows.len();

        let mut count = 0;
        for student in rows.iter().filter_map(map_row) {
            self.repo
                .upsert_student(&student.into_record(school_id))
                .await?;
            count += 1;
        }

        tracing::info!(
            school_id = %school_id,
            imported = count,
            skipped = total_rows - count,
            "Student list imported"
        );

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> SheetRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_split_name_columns() {
        let student = map_row(&row(&[
            ("TC No", "11111111111"),
            ("Ad", "Ayşe"),
            ("Soyad", "Yılmaz"),
            ("Sınıf", "4-A"),
            ("Okul No", "123"),
        ]))
        .unwrap();
        assert_eq!(student.name, "Ayşe Yılmaz");
        assert_eq!(student.grade, "4-A");
        assert_eq!(student.school_no, "123");
    }

    #[test]
    fn test_blank_cells_count_as_missing() {
        let student = map_row(&row(&[
            ("TC No", "33333333333"),
            ("Ad", "   "),
            ("Soyad", "Kaya"),
            ("Ad Soyad", "Zeynep Kaya"),
        ]))
        .unwrap();
        assert_eq!(student.name, "Zeynep Kaya");

        assert!(map_row(&row(&[("TC No", "  "), ("TC", ""), ("Ad", "Ali")])).is_none());
    }

    #[test]
    fn test_aliases_and_empty_defaults() {
        let student = map_row(&row(&[("tc", "22222222222"), ("Ad", "Ali")])).unwrap();
        assert_eq!(student.tc_no, "22222222222");
        assert_eq!(student.name, "Ali");
        assert_eq!(student.grade, "");
        assert_eq!(student.school_no, "");

        let student = map_row(&row(&[
            ("TC", "33333333333"),
            ("İsim", "Zeynep Kaya"),
            ("Sinif", "2"),
            ("Numara", "7"),
        ]))
        .unwrap();
        assert_eq!(student.name, "Zeynep Kaya");
        assert_eq!((student.grade.as_str(), student.school_no.as_str()), ("2", "7"));
    }

    #[test]
    fn test_first_non_empty_alias_wins() {
        let student = map_row(&row(&[
            ("TC No", "  "),
            ("TC", "44444444444"),
            ("Ad Soyad", "Can Demir"),
            ("İsim", "ignored"),
        ]))
        .unwrap();
        assert_eq!(student.tc_no, "44444444444");
        assert_eq!(student.name, "Can Demir");
    }

    #[test]
    fn test_rows_without_tc_or_name_are_skipped() {
        assert_eq!(map_row(&row(&[])), None);
        assert_eq!(map_row(&row(&[("Sınıf", "3")])), None);
        assert_eq!(map_row(&row(&[("TC No", "55555555555")])), None);
        assert_eq!(map_row(&row(&[("Ad Soyad", "Ece Ak")])), None);
    }
}
