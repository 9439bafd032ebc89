//! Student Entity

use chrono::{DateTime, Utc};
use kernel::id::{SchoolId, StudentId};

/// A student, identified by national ID (`tc_no`)
///
/// `school_id` follows the last import or profile update.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub student_id: StudentId,
    pub tc_no: String,
    pub name: String,
    pub grade: String,
    pub school_no: String,
    pub allergies: String,
    pub school_id: SchoolId,
    pub created_at: DateTime<Utc>,
}

/// Fields written by an upsert keyed on `tc_no`
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub tc_no: String,
    pub name: String,
    pub grade: String,
    pub school_no: String,
    /// `None` keeps what is stored (imports carry no allergy column)
    pub allergies: Option<String>,
    pub school_id: SchoolId,
}
