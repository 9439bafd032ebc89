//! Location Entity

use kernel::id::LocationId;

/// A place visited on tours
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub location_id: LocationId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub video_url: Option<String>,
}
