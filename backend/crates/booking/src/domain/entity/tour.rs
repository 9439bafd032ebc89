//! Tour Entity

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{LocationId, TourId};
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, BookingResult};

/// One line of a tour program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryStop {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub activity: String,
}

/// A scheduled field trip
///
/// `price` is the list price; schools pay their assigned price instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub tour_id: TourId,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub images: Vec<String>,
    pub video_url: Option<String>,
    pub tour_type: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub itinerary: Vec<ItineraryStop>,
    pub price: f64,
    pub location_ids: Vec<LocationId>,
}

impl Tour {
    /// Accepts `YYYY-MM-DD` (midnight UTC) or a full RFC 3339 timestamp
    pub fn parse_date(raw: &str) -> BookingResult<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Ok(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .ok_or(BookingError::InvalidDate)
    }
}
