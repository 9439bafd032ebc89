//! Financial Reports Use Case

use std::sync::Arc;

use auth::{Session, UserType, require};
use chrono::{DateTime, Utc};
use kernel::id::TourId;

use crate::domain::entity::{Expense, Registration, School, Student, Tour};
use crate::domain::repository::{
    ExpenseRepository, RegistrationRepository, SchoolRepository, StudentRepository, TourRepository,
};
use crate::domain::services::pricing::{self, PriceTable};
use crate::error::BookingResult;

/// Revenue, costs and profit of one tour
#[derive(Debug, Clone, PartialEq)]
pub struct TourReport {
    pub tour_id: TourId,
    pub title: String,
    pub date: DateTime<Utc>,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub profit: f64,
    /// Approved registration rows
    pub registered_count: usize,
    pub expenses: Vec<Expense>,
}

pub struct ReportsUseCase<R>
where
    R: TourRepository
        + SchoolRepository
        + StudentRepository
        + RegistrationRepository
        + ExpenseRepository,
{
    repo: Arc<R>,
}

impl<R> ReportsUseCase<R>
where
    R: TourRepository
        + SchoolRepository
        + StudentRepository
        + RegistrationRepository
        + ExpenseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// One report per tour, newest tour first
    pub async fn tour_reports(&self, actor: &Session) -> BookingResult<Vec<TourReport>> {
        require(actor, UserType::Admin)?;

        let tours = self.repo.list_tours().await?;
        let schools = self.repo.list_schools().await?;
        let students = self.repo.list_students().await?;
        let registrations = self.repo.list_registrations().await?;
        let expenses = self.repo.list_expenses().await?;

        Ok(build_reports(&tours, &schools, &students, &registrations, &expenses))
    }
}

pub fn build_reports(
    tours: &[Tour],
    schools: &[School],
    students: &[Student],
    registrations: &[Registration],
    expenses: &[Expense],
) -> Vec<TourReport> {
    let prices = PriceTable::from_schools(schools);
    let schools_by_student = pricing::school_index(students);

    let mut reports: Vec<TourReport> = tours
        .iter()
        .map(|tour| {
            let total_revenue =
                pricing::tour_revenue(tour.tour_id, registrations, &schools_by_student, &prices);
            let total_expenses = pricing::total_expenses(tour.tour_id, expenses);
            TourReport {
                tour_id: tour.tour_id,
                title: tour.title.clone(),
                date: tour.date,
                total_revenue,
                total_expenses,
                profit: pricing::profit(total_revenue, total_expenses),
                registered_count: pricing::approved_registration_count(tour.tour_id, registrations),
                expenses: expenses
                    .iter()
                    .filter(|e| e.tour_id == tour.tour_id)
                    .cloned()
                    .collect(),
            }
        })
        .collect();

    reports.sort_by(|a, b| b.date.cmp(&a.date));
    reports
}
