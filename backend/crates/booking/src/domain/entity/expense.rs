//! Expense Entity

use chrono::{DateTime, Utc};
use kernel::id::{ExpenseId, TourId};

/// A cost booked against a tour
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub expense_id: ExpenseId,
    pub tour_id: TourId,
    pub description: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(tour_id: TourId, description: String, amount: f64) -> Self {
        Self {
            expense_id: ExpenseId::new(),
            tour_id,
            description,
            amount,
            created_at: Utc::now(),
        }
    }
}
