//! Booking Configuration

/// Booking configuration
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Largest accepted spreadsheet upload
    pub max_upload_bytes: usize,
    /// Sheet name of the participant export
    pub export_sheet_name: String,
    /// Attempts of the optimistic survey vote before giving up
    pub vote_max_attempts: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 10 * 1024 * 1024,
            export_sheet_name: "Katılımcılar".to_string(),
            vote_max_attempts: 8,
        }
    }
}

impl BookingConfig {
    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }
}
