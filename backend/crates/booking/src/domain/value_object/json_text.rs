//! JSON text columns
//!
//! Tour images and itinerary, survey options and votes and the site stats are
//! stored as JSON text inside relational rows. Reading them never fails: a
//! missing or malformed value becomes an empty list and is logged.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Parse a JSON array column, falling back to an empty list
pub fn parse_list<T>(raw: Option<&str>, column: &'static str) -> Vec<T>
where
    T: DeserializeOwned,
{
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<T>>(raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(column, error = %e, "Malformed JSON column, using empty list");
            Vec::new()
        }
    }
}

/// Serialize a list for storage in a JSON text column
pub fn to_text<T>(items: &[T]) -> String
where
    T: Serialize,
{
    // a slice of plain data structs always serializes
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
