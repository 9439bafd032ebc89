//! Parent profile
//!
//! The booking view of a parent row: national ID plus the optional contact
//! details the parent fills in on the student form.

use kernel::id::ParentId;

#[derive(Debug, Clone, PartialEq)]
pub struct ParentProfile {
    pub parent_id: ParentId,
    pub tc_no: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}
