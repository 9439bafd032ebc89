//! Pricing & Reporting
//!
//! Pure computations over loaded rows. Revenue only counts approved
//! registrations, each at the price assigned to the student's school for
//! that tour; a school without an assignment contributes nothing.

use std::collections::{HashMap, HashSet};

use kernel::id::{SchoolId, StudentId, TourId};

use crate::domain::entity::{Expense, Registration, School, Student};

/// Assigned prices keyed by (school, tour)
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<(SchoolId, TourId), f64>,
}

impl PriceTable {
    pub fn from_schools<'a>(schools: impl IntoIterator<Item = &'a School>) -> Self {
        let prices = schools
            .into_iter()
            .flat_map(|school| {
                school
                    .assigned_tours
                    .iter()
                    .map(move |a| ((school.school_id, a.tour_id), a.price))
            })
            .collect();
        Self { prices }
    }

    pub fn price(&self, school_id: SchoolId, tour_id: TourId) -> Option<f64> {
        self.prices.get(&(school_id, tour_id)).copied()
    }
}

/// Student id → school id, for resolving a registration's school
pub fn school_index<'a>(students: impl IntoIterator<Item = &'a Student>) -> HashMap<StudentId, SchoolId> {
    students
        .into_iter()
        .map(|s| (s.student_id, s.school_id))
        .collect()
}

/// Sum of assigned prices over the tour's approved registrations
pub fn tour_revenue(
    tour_id: TourId,
    registrations: &[Registration],
    schools_by_student: &HashMap<StudentId, SchoolId>,
    prices: &PriceTable,
) -> f64 {
    registrations
        .iter()
        .filter(|r| r.is_approved_for(tour_id))
        .filter_map(|r| schools_by_student.get(&r.student_id))
        .map(|school_id| prices.price(*school_id, tour_id).unwrap_or(0.0))
        .sum()
}

pub fn total_expenses(tour_id: TourId, expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .filter(|e| e.tour_id == tour_id)
        .map(|e| e.amount)
        .sum()
}

pub fn profit(revenue: f64, expenses: f64) -> f64 {
    revenue - expenses
}

/// Approved registration rows of the tour (duplicates count twice)
pub fn approved_registration_count(tour_id: TourId, registrations: &[Registration]) -> usize {
    registrations
        .iter()
        .filter(|r| r.is_approved_for(tour_id))
        .count()
}

/// Distinct students among `students` holding an approved registration for the tour
pub fn registered_student_count(
    tour_id: TourId,
    students: &[Student],
    registrations: &[Registration],
) -> usize {
    let approved: HashSet<StudentId> = registrations
        .iter()
        .filter(|r| r.is_approved_for(tour_id))
        .map(|r| r.student_id)
        .collect();

    students
        .iter()
        .filter(|s| approved.contains(&s.student_id))
        .count()
}

/// Distinct students among `students` with a registration of any status
pub fn students_with_registrations(students: &[Student], registrations: &[Registration]) -> usize {
    let registered: HashSet<StudentId> = registrations.iter().map(|r| r.student_id).collect();

    students
        .iter()
        .filter(|s| registered.contains(&s.student_id))
        .count()
}
