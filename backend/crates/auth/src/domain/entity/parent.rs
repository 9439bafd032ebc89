//! Parent Entity

use chrono::{DateTime, Utc};
use kernel::id::ParentId;

/// Parent account, created lazily on first login with a valid school code
#[derive(Debug, Clone)]
pub struct Parent {
    pub parent_id: ParentId,
    pub tc_no: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}
