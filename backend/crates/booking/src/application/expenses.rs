//! Expenses Use Case

use std::sync::Arc;

use auth::{Session, UserType, require};
use kernel::id::{ExpenseId, TourId};

use crate::application::schools::required;
use crate::domain::entity::Expense;
use crate::domain::repository::ExpenseRepository;
use crate::error::{BookingError, BookingResult};

pub struct ExpensesUseCase<R>
where
    R: ExpenseRepository,
{
    repo: Arc<R>,
}

impl<R> ExpensesUseCase<R>
where
    R: ExpenseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn add(
        &self,
        actor: &Session,
        tour_id: &TourId,
        description: &str,
        amount: f64,
    ) -> BookingResult<Expense> {
        require(actor, UserType::Admin)?;

        let description = required(description, "Gider açıklaması")?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(BookingError::InvalidAmount);
        }

        let expense = Expense::new(*tour_id, description, amount);
        self.repo.create_expense(&expense).await?;

        tracing::info!(expense_id = %expense.expense_id, tour_id = %tour_id, amount, "Expense added");
        Ok(expense)
    }

    pub async fn delete(&self, actor: &Session, expense_id: &ExpenseId) -> BookingResult<()> {
        require(actor, UserType::Admin)?;

        if !self.repo.delete_expense(expense_id).await? {
            return Err(BookingError::ExpenseNotFound);
        }

        tracing::info!(expense_id = %expense_id, "Expense deleted");
        Ok(())
    }
}
