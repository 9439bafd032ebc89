//! PostgreSQL Repository Implementations

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use kernel::error::conversions::{is_foreign_key_violation, is_unique_violation};
use kernel::id::{
    ExpenseId, LocationId, ParentId, RegistrationId, ReviewId, SchoolId, SliderId, StudentId,
    SurveyId, TourId,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    Expense, ItineraryStop, Location, ParentProfile, Registration, Review, School, SiteConfig,
    Slider, StatItem, Student, StudentRecord, Survey, Tour, TourAssignment, VoteCount,
};
use crate::domain::repository::{
    ExpenseRepository, LocationRepository, ParentProfileRepository, RegistrationRepository,
    ReviewRepository, SchoolRepository, SiteContentRepository, StudentRepository,
    SurveyRepository, TourRepository,
};
use crate::domain::value_object::{Rating, RegistrationStatus, ReviewStatus, json_text};
use crate::error::{BookingError, BookingResult};

/// PostgreSQL-backed booking repository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn assignments_by_school(
        &self,
        school_id: Option<&SchoolId>,
    ) -> BookingResult<HashMap<SchoolId, Vec<TourAssignment>>> {
        let rows = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT school_id, tour_id, price
            FROM school_tours
            WHERE $1::uuid IS NULL OR school_id = $1
            "#,
        )
        .bind(school_id.map(|id| id.into_uuid()))
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<SchoolId, Vec<TourAssignment>> = HashMap::new();
        for row in rows {
            grouped
                .entry(SchoolId::from_uuid(row.school_id))
                .or_default()
                .push(TourAssignment {
                    tour_id: TourId::from_uuid(row.tour_id),
                    price: row.price,
                });
        }
        Ok(grouped)
    }

    async fn location_links(
        &self,
        tour_id: Option<&TourId>,
    ) -> BookingResult<HashMap<TourId, Vec<LocationId>>> {
        let rows = sqlx::query_as::<_, TourLocationRow>(
            r#"
            SELECT tour_id, location_id
            FROM tour_locations
            WHERE $1::uuid IS NULL OR tour_id = $1
            ORDER BY tour_id, position
            "#,
        )
        .bind(tour_id.map(|id| id.into_uuid()))
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<TourId, Vec<LocationId>> = HashMap::new();
        for row in rows {
            grouped
                .entry(TourId::from_uuid(row.tour_id))
                .or_default()
                .push(LocationId::from_uuid(row.location_id));
        }
        Ok(grouped)
    }
}

// ============================================================================
// Schools
// ============================================================================

impl SchoolRepository for PgBookingRepository {
    async fn list_schools(&self) -> BookingResult<Vec<School>> {
        let rows = sqlx::query_as::<_, SchoolRow>(
            r#"
            SELECT id, name, city, district, contact_name, phone,
                   username, password, access_code, iban, created_at
            FROM schools
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut assignments = self.assignments_by_school(None).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let assigned = assignments
                    .remove(&SchoolId::from_uuid(row.id))
                    .unwrap_or_default();
                row.into_school(assigned)
            })
            .collect())
    }

    async fn find_school(&self, school_id: &SchoolId) -> BookingResult<Option<School>> {
        let row = sqlx::query_as::<_, SchoolRow>(
            r#"
            SELECT id, name, city, district, contact_name, phone,
                   username, password, access_code, iban, created_at
            FROM schools
            WHERE id = $1
            "#,
        )
        .bind(school_id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let assigned = self
            .assignments_by_school(Some(school_id))
            .await?
            .remove(school_id)
            .unwrap_or_default();
        Ok(Some(row.into_school(assigned)))
    }

    async fn upsert_school(&self, school: &School) -> BookingResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO schools (id, name, city, district, contact_name, phone,
                                 username, password, access_code, iban, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                city = EXCLUDED.city,
                district = EXCLUDED.district,
                contact_name = EXCLUDED.contact_name,
                phone = EXCLUDED.phone,
                username = EXCLUDED.username,
                password = EXCLUDED.password,
                access_code = EXCLUDED.access_code,
                iban = EXCLUDED.iban
            "#,
        )
        .bind(school.school_id.into_uuid())
        .bind(&school.name)
        .bind(&school.city)
        .bind(&school.district)
        .bind(&school.contact_name)
        .bind(&school.phone)
        .bind(&school.username)
        .bind(&school.password)
        .bind(&school.access_code)
        .bind(&school.iban)
        .bind(school.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                BookingError::SchoolConflict
            } else {
                BookingError::Database(e)
            }
        })?;

        sqlx::query("DELETE FROM school_tours WHERE school_id = $1")
            .bind(school.school_id.into_uuid())
            .execute(&mut *tx)
            .await?;

        for assignment in &school.assigned_tours {
            sqlx::query(
                r#"
                INSERT INTO school_tours (school_id, tour_id, price)
                VALUES ($1, $2, $3)
                ON CONFLICT (school_id, tour_id) DO UPDATE SET price = EXCLUDED.price
                "#,
            )
            .bind(school.school_id.into_uuid())
            .bind(assignment.tour_id.into_uuid())
            .bind(assignment.price)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    BookingError::TourNotFound
                } else {
                    BookingError::Database(e)
                }
            })?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete_school(&self, school_id: &SchoolId) -> BookingResult<bool> {
        let deleted = sqlx::query("DELETE FROM schools WHERE id = $1")
            .bind(school_id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    BookingError::SchoolHasStudents
                } else {
                    BookingError::Database(e)
                }
            })?
            .rows_affected();

        Ok(deleted == 1)
    }
}

// ============================================================================
// Tours & Locations
// ============================================================================

impl TourRepository for PgBookingRepository {
    async fn list_tours(&self) -> BookingResult<Vec<Tour>> {
        let rows = sqlx::query_as::<_, TourRow>(
            r#"
            SELECT id, title, description, cover_image, images, video_url,
                   tour_type, date, location, itinerary, price
            FROM tours
            ORDER BY date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut links = self.location_links(None).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let location_ids = links.remove(&TourId::from_uuid(row.id)).unwrap_or_default();
                row.into_tour(location_ids)
            })
            .collect())
    }

    async fn find_tour(&self, tour_id: &TourId) -> BookingResult<Option<Tour>> {
        let row = sqlx::query_as::<_, TourRow>(
            r#"
            SELECT id, title, description, cover_image, images, video_url,
                   tour_type, date, location, itinerary, price
            FROM tours
            WHERE id = $1
            "#,
        )
        .bind(tour_id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let location_ids = self
            .location_links(Some(tour_id))
            .await?
            .remove(tour_id)
            .unwrap_or_default();
        Ok(Some(row.into_tour(location_ids)))
    }

    async fn upsert_tour(&self, tour: &Tour) -> BookingResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO tours (id, title, description, cover_image, images, video_url,
                               tour_type, date, location, itinerary, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                cover_image = EXCLUDED.cover_image,
                images = EXCLUDED.images,
                video_url = EXCLUDED.video_url,
                tour_type = EXCLUDED.tour_type,
                date = EXCLUDED.date,
                location = EXCLUDED.location,
                itinerary = EXCLUDED.itinerary,
                price = EXCLUDED.price
            "#,
        )
        .bind(tour.tour_id.into_uuid())
        .bind(&tour.title)
        .bind(&tour.description)
        .bind(&tour.cover_image)
        .bind(json_text::to_text(&tour.images))
        .bind(&tour.video_url)
        .bind(&tour.tour_type)
        .bind(tour.date)
        .bind(&tour.location)
        .bind(json_text::to_text(&tour.itinerary))
        .bind(tour.price)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM tour_locations WHERE tour_id = $1")
            .bind(tour.tour_id.into_uuid())
            .execute(&mut *tx)
            .await?;

        for (position, location_id) in tour.location_ids.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO tour_locations (tour_id, location_id, position)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(tour.tour_id.into_uuid())
            .bind(location_id.into_uuid())
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    BookingError::LocationNotFound
                } else {
                    BookingError::Database(e)
                }
            })?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete_tour(&self, tour_id: &TourId) -> BookingResult<bool> {
        let deleted = sqlx::query("DELETE FROM tours WHERE id = $1")
            .bind(tour_id.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted == 1)
    }
}

impl LocationRepository for PgBookingRepository {
    async fn list_locations(&self) -> BookingResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT id, title, description, image, video_url
            FROM locations
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LocationRow::into_location).collect())
    }

    async fn find_locations(&self, location_ids: &[LocationId]) -> BookingResult<Vec<Location>> {
        if location_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = location_ids.iter().map(|id| id.into_uuid()).collect();
        let rows = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT id, title, description, image, video_url
            FROM locations
            WHERE id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        // keep the order of the tour's links
        let mut locations: Vec<Location> = rows.into_iter().map(LocationRow::into_location).collect();
        locations.sort_by_key(|l| {
            location_ids
                .iter()
                .position(|id| *id == l.location_id)
                .unwrap_or(usize::MAX)
        });
        Ok(locations)
    }

    async fn upsert_location(&self, location: &Location) -> BookingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO locations (id, title, description, image, video_url)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                image = EXCLUDED.image,
                video_url = EXCLUDED.video_url
            "#,
        )
        .bind(location.location_id.into_uuid())
        .bind(&location.title)
        .bind(&location.description)
        .bind(&location.image)
        .bind(&location.video_url)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_location(&self, location_id: &LocationId) -> BookingResult<bool> {
        let deleted = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(location_id.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted == 1)
    }
}

// ============================================================================
// Students & Parents
// ============================================================================

impl StudentRepository for PgBookingRepository {
    async fn list_students(&self) -> BookingResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, tc_no, name, grade, school_no, allergies, school_id, created_at
            FROM students
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StudentRow::into_student).collect())
    }

    async fn list_students_by_school(&self, school_id: &SchoolId) -> BookingResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, tc_no, name, grade, school_no, allergies, school_id, created_at
            FROM students
            WHERE school_id = $1
            ORDER BY name
            "#,
        )
        .bind(school_id.into_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StudentRow::into_student).collect())
    }

    async fn find_student(&self, student_id: &StudentId) -> BookingResult<Option<Student>> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, tc_no, name, grade, school_no, allergies, school_id, created_at
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(student_id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StudentRow::into_student))
    }

    async fn find_student_by_tc(&self, tc_no: &str) -> BookingResult<Option<Student>> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, tc_no, name, grade, school_no, allergies, school_id, created_at
            FROM students
            WHERE tc_no = $1
            "#,
        )
        .bind(tc_no)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StudentRow::into_student))
    }

    async fn count_students(&self) -> BookingResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn upsert_student(&self, record: &StudentRecord) -> BookingResult<Student> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO students (id, tc_no, name, grade, school_no, allergies, school_id)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, ''), $7)
            ON CONFLICT (tc_no) DO UPDATE SET
                name = EXCLUDED.name,
                grade = EXCLUDED.grade,
                school_no = EXCLUDED.school_no,
                allergies = COALESCE($6, students.allergies),
                school_id = EXCLUDED.school_id
            RETURNING id, tc_no, name, grade, school_no, allergies, school_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.tc_no)
        .bind(&record.name)
        .bind(&record.grade)
        .bind(&record.school_no)
        .bind(&record.allergies)
        .bind(record.school_id.into_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                BookingError::SchoolNotFound
            } else {
                BookingError::Database(e)
            }
        })?;

        Ok(row.into_student())
    }
}

impl ParentProfileRepository for PgBookingRepository {
    async fn find_parent_profile(&self, parent_id: &ParentId) -> BookingResult<Option<ParentProfile>> {
        let row = sqlx::query_as::<_, ParentProfileRow>(
            "SELECT id, tc_no, name, phone FROM parents WHERE id = $1",
        )
        .bind(parent_id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ParentProfileRow::into_profile))
    }

    async fn find_parent_profiles_by_tc(&self, tc_nos: &[String]) -> BookingResult<Vec<ParentProfile>> {
        if tc_nos.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ParentProfileRow>(
            "SELECT id, tc_no, name, phone FROM parents WHERE tc_no = ANY($1)",
        )
        .bind(tc_nos)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ParentProfileRow::into_profile).collect())
    }

    async fn update_parent_contact(
        &self,
        parent_id: &ParentId,
        name: &str,
        phone: &str,
    ) -> BookingResult<bool> {
        let updated = sqlx::query("UPDATE parents SET name = $2, phone = $3 WHERE id = $1")
            .bind(parent_id.into_uuid())
            .bind(name)
            .bind(phone)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(updated == 1)
    }
}

// ============================================================================
// Registrations & Reviews
// ============================================================================

impl RegistrationRepository for PgBookingRepository {
    async fn list_registrations(&self) -> BookingResult<Vec<Registration>> {
        let rows = sqlx::query_as::<_, RegistrationRow>(
            r#"
            SELECT id, student_id, tour_id, status, created_at
            FROM registrations
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(RegistrationRow::into_registration).collect()
    }

    async fn list_registrations_by_tour(&self, tour_id: &TourId) -> BookingResult<Vec<Registration>> {
        let rows = sqlx::query_as::<_, RegistrationRow>(
            r#"
            SELECT id, student_id, tour_id, status, created_at
            FROM registrations
            WHERE tour_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(tour_id.into_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(RegistrationRow::into_registration).collect()
    }

    async fn list_registrations_by_students(
        &self,
        student_ids: &[StudentId],
    ) -> BookingResult<Vec<Registration>> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = student_ids.iter().map(|id| id.into_uuid()).collect();
        let rows = sqlx::query_as::<_, RegistrationRow>(
            r#"
            SELECT id, student_id, tour_id, status, created_at
            FROM registrations
            WHERE student_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(RegistrationRow::into_registration).collect()
    }

    async fn create_registration(&self, registration: &Registration) -> BookingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO registrations (id, student_id, tour_id, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(registration.registration_id.into_uuid())
        .bind(registration.student_id.into_uuid())
        .bind(registration.tour_id.into_uuid())
        .bind(registration.status.as_str())
        .bind(registration.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_first_registration(
        &self,
        student_id: &StudentId,
        tour_id: &TourId,
    ) -> BookingResult<Option<Registration>> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            r#"
            SELECT id, student_id, tour_id, status, created_at
            FROM registrations
            WHERE student_id = $1 AND tour_id = $2
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(student_id.into_uuid())
        .bind(tour_id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(RegistrationRow::into_registration).transpose()
    }

    async fn update_registration_status(
        &self,
        registration_id: &RegistrationId,
        status: RegistrationStatus,
    ) -> BookingResult<bool> {
        let updated = sqlx::query("UPDATE registrations SET status = $2 WHERE id = $1")
            .bind(registration_id.into_uuid())
            .bind(status.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(updated == 1)
    }

    async fn count_registrations(&self, status: Option<RegistrationStatus>) -> BookingResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM registrations WHERE $1::text IS NULL OR status = $1",
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

impl ReviewRepository for PgBookingRepository {
    async fn list_reviews(&self) -> BookingResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, tour_id, parent_id, rating, comment, status, created_at
            FROM reviews
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ReviewRow::into_review).collect()
    }

    async fn list_reviews_by_tour(
        &self,
        tour_id: &TourId,
        status: ReviewStatus,
    ) -> BookingResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, tour_id, parent_id, rating, comment, status, created_at
            FROM reviews
            WHERE tour_id = $1 AND status = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(tour_id.into_uuid())
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ReviewRow::into_review).collect()
    }

    async fn create_review(&self, review: &Review) -> BookingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reviews (id, tour_id, parent_id, rating, comment, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(review.review_id.into_uuid())
        .bind(review.tour_id.into_uuid())
        .bind(review.parent_id.into_uuid())
        .bind(review.rating.value())
        .bind(&review.comment)
        .bind(review.status.as_str())
        .bind(review.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                BookingError::TourNotFound
            } else {
                BookingError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn update_review_status(
        &self,
        review_id: &ReviewId,
        status: ReviewStatus,
    ) -> BookingResult<bool> {
        let updated = sqlx::query("UPDATE reviews SET status = $2 WHERE id = $1")
            .bind(review_id.into_uuid())
            .bind(status.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(updated == 1)
    }
}

// ============================================================================
// Surveys
// ============================================================================

impl SurveyRepository for PgBookingRepository {
    async fn list_surveys(&self) -> BookingResult<Vec<Survey>> {
        let rows = sqlx::query_as::<_, SurveyRow>(
            r#"
            SELECT id, title, description, options, votes, is_active, version, created_at
            FROM surveys
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SurveyRow::into_survey).collect())
    }

    async fn list_active_surveys(&self) -> BookingResult<Vec<Survey>> {
        let rows = sqlx::query_as::<_, SurveyRow>(
            r#"
            SELECT id, title, description, options, votes, is_active, version, created_at
            FROM surveys
            WHERE is_active
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SurveyRow::into_survey).collect())
    }

    async fn find_survey(&self, survey_id: &SurveyId) -> BookingResult<Option<Survey>> {
        let row = sqlx::query_as::<_, SurveyRow>(
            r#"
            SELECT id, title, description, options, votes, is_active, version, created_at
            FROM surveys
            WHERE id = $1
            "#,
        )
        .bind(survey_id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SurveyRow::into_survey))
    }

    async fn create_survey(&self, survey: &Survey) -> BookingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO surveys (id, title, description, options, votes, is_active, version, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(survey.survey_id.into_uuid())
        .bind(&survey.title)
        .bind(&survey.description)
        .bind(json_text::to_text(&survey.options))
        .bind(json_text::to_text(&survey.votes))
        .bind(survey.is_active)
        .bind(survey.version)
        .bind(survey.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn set_survey_active(&self, survey_id: &SurveyId, is_active: bool) -> BookingResult<bool> {
        let updated = sqlx::query("UPDATE surveys SET is_active = $2 WHERE id = $1")
            .bind(survey_id.into_uuid())
            .bind(is_active)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(updated == 1)
    }

    async fn delete_survey(&self, survey_id: &SurveyId) -> BookingResult<bool> {
        let deleted = sqlx::query("DELETE FROM surveys WHERE id = $1")
            .bind(survey_id.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted == 1)
    }

    async fn update_survey_votes(
        &self,
        survey_id: &SurveyId,
        options: &[String],
        votes: &[VoteCount],
        expected_version: i64,
    ) -> BookingResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE surveys
            SET options = $2, votes = $3, version = version + 1
            WHERE id = $1 AND version = $4
            "#,
        )
        .bind(survey_id.into_uuid())
        .bind(json_text::to_text(options))
        .bind(json_text::to_text(votes))
        .bind(expected_version)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated == 1)
    }
}

// ============================================================================
// Expenses
// ============================================================================

impl ExpenseRepository for PgBookingRepository {
    async fn list_expenses(&self) -> BookingResult<Vec<Expense>> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, tour_id, description, amount, created_at
            FROM expenses
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ExpenseRow::into_expense).collect())
    }

    async fn create_expense(&self, expense: &Expense) -> BookingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO expenses (id, tour_id, description, amount, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(expense.expense_id.into_uuid())
        .bind(expense.tour_id.into_uuid())
        .bind(&expense.description)
        .bind(expense.amount)
        .bind(expense.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                BookingError::TourNotFound
            } else {
                BookingError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn delete_expense(&self, expense_id: &ExpenseId) -> BookingResult<bool> {
        let deleted = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(expense_id.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted == 1)
    }
}

// ============================================================================
// Site content
// ============================================================================

impl SiteContentRepository for PgBookingRepository {
    async fn get_site_config(&self) -> BookingResult<Option<SiteConfig>> {
        let row = sqlx::query_as::<_, SiteConfigRow>(
            r#"
            SELECT logo, phone, email, address, footer_text, stats
            FROM site_config
            WHERE id = $1
            "#,
        )
        .bind(SiteConfig::ROW_ID)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SiteConfigRow::into_config))
    }

    async fn save_site_config(&self, config: &SiteConfig) -> BookingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO site_config (id, logo, phone, email, address, footer_text, stats, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            ON CONFLICT (id) DO UPDATE SET
                logo = EXCLUDED.logo,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                address = EXCLUDED.address,
                footer_text = EXCLUDED.footer_text,
                stats = EXCLUDED.stats,
                updated_at = NOW()
            "#,
        )
        .bind(SiteConfig::ROW_ID)
        .bind(&config.logo)
        .bind(&config.phone)
        .bind(&config.email)
        .bind(&config.address)
        .bind(&config.footer_text)
        .bind(json_text::to_text(&config.stats))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_sliders(&self) -> BookingResult<Vec<Slider>> {
        let rows = sqlx::query_as::<_, SliderRow>(
            r#"
            SELECT id, image, title, subtitle, sort_order
            FROM sliders
            ORDER BY sort_order
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SliderRow::into_slider).collect())
    }

    async fn replace_sliders(&self, sliders: &[Slider]) -> BookingResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM sliders").execute(&mut *tx).await?;

        for slider in sliders {
            sqlx::query(
                r#"
                INSERT INTO sliders (id, image, title, subtitle, sort_order)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(slider.slider_id.into_uuid())
            .bind(&slider.image)
            .bind(&slider.title)
            .bind(&slider.subtitle)
            .bind(slider.sort_order)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

// ============================================================================
// Internal row types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct SchoolRow {
    id: Uuid,
    name: String,
    city: String,
    district: String,
    contact_name: String,
    phone: String,
    username: String,
    password: String,
    access_code: String,
    iban: Option<String>,
    created_at: DateTime<Utc>,
}

impl SchoolRow {
    fn into_school(self, assigned_tours: Vec<TourAssignment>) -> School {
        School {
            school_id: SchoolId::from_uuid(self.id),
            name: self.name,
            city: self.city,
            district: self.district,
            contact_name: self.contact_name,
            phone: self.phone,
            username: self.username,
            password: self.password,
            access_code: self.access_code,
            iban: self.iban,
            assigned_tours,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AssignmentRow {
    school_id: Uuid,
    tour_id: Uuid,
    price: f64,
}

#[derive(sqlx::FromRow)]
struct TourLocationRow {
    tour_id: Uuid,
    location_id: Uuid,
}

#[derive(sqlx::FromRow)]
struct TourRow {
    id: Uuid,
    title: String,
    description: String,
    cover_image: String,
    images: String,
    video_url: Option<String>,
    tour_type: String,
    date: DateTime<Utc>,
    location: String,
    itinerary: String,
    price: f64,
}

impl TourRow {
    fn into_tour(self, location_ids: Vec<LocationId>) -> Tour {
        Tour {
            tour_id: TourId::from_uuid(self.id),
            title: self.title,
            description: self.description,
            cover_image: self.cover_image,
            images: json_text::parse_list(Some(self.images.as_str()), "tours.images"),
            video_url: self.video_url,
            tour_type: self.tour_type,
            date: self.date,
            location: self.location,
            itinerary: json_text::parse_list::<ItineraryStop>(Some(self.itinerary.as_str()), "tours.itinerary"),
            price: self.price,
            location_ids,
        }
    }
}

#[derive(sqlx::FromRow)]
struct LocationRow {
    id: Uuid,
    title: String,
    description: String,
    image: String,
    video_url: Option<String>,
}

impl LocationRow {
    fn into_location(self) -> Location {
        Location {
            location_id: LocationId::from_uuid(self.id),
            title: self.title,
            description: self.description,
            image: self.image,
            video_url: self.video_url,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: Uuid,
    tc_no: String,
    name: String,
    grade: String,
    school_no: String,
    allergies: String,
    school_id: Uuid,
    created_at: DateTime<Utc>,
}

impl StudentRow {
    fn into_student(self) -> Student {
        Student {
            student_id: StudentId::from_uuid(self.id),
            tc_no: self.tc_no,
            name: self.name,
            grade: self.grade,
            school_no: self.school_no,
            allergies: self.allergies,
            school_id: SchoolId::from_uuid(self.school_id),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ParentProfileRow {
    id: Uuid,
    tc_no: String,
    name: Option<String>,
    phone: Option<String>,
}

impl ParentProfileRow {
    fn into_profile(self) -> ParentProfile {
        ParentProfile {
            parent_id: ParentId::from_uuid(self.id),
            tc_no: self.tc_no,
            name: self.name,
            phone: self.phone,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RegistrationRow {
    id: Uuid,
    student_id: Uuid,
    tour_id: Uuid,
    status: String,
    created_at: DateTime<Utc>,
}

impl RegistrationRow {
    fn into_registration(self) -> BookingResult<Registration> {
        Ok(Registration {
            registration_id: RegistrationId::from_uuid(self.id),
            student_id: StudentId::from_uuid(self.student_id),
            tour_id: TourId::from_uuid(self.tour_id),
            status: self.status.parse()?,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    tour_id: Uuid,
    parent_id: Uuid,
    rating: i32,
    comment: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl ReviewRow {
    fn into_review(self) -> BookingResult<Review> {
        Ok(Review {
            review_id: ReviewId::from_uuid(self.id),
            tour_id: TourId::from_uuid(self.tour_id),
            parent_id: ParentId::from_uuid(self.parent_id),
            rating: Rating::new(self.rating)?,
            comment: self.comment,
            status: self.status.parse()?,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SurveyRow {
    id: Uuid,
    title: String,
    description: String,
    options: String,
    votes: String,
    is_active: bool,
    version: i64,
    created_at: DateTime<Utc>,
}

impl SurveyRow {
    fn into_survey(self) -> Survey {
        Survey {
            survey_id: SurveyId::from_uuid(self.id),
            title: self.title,
            description: self.description,
            options: json_text::parse_list(Some(self.options.as_str()), "surveys.options"),
            votes: json_text::parse_list(Some(self.votes.as_str()), "surveys.votes"),
            is_active: self.is_active,
            version: self.version,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ExpenseRow {
    id: Uuid,
    tour_id: Uuid,
    description: String,
    amount: f64,
    created_at: DateTime<Utc>,
}

impl ExpenseRow {
    fn into_expense(self) -> Expense {
        Expense {
            expense_id: ExpenseId::from_uuid(self.id),
            tour_id: TourId::from_uuid(self.tour_id),
            description: self.description,
            amount: self.amount,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SiteConfigRow {
    logo: String,
    phone: String,
    email: String,
    address: String,
    footer_text: String,
    stats: String,
}

impl SiteConfigRow {
    fn into_config(self) -> SiteConfig {
        SiteConfig {
            logo: self.logo,
            phone: self.phone,
            email: self.email,
            address: self.address,
            footer_text: self.footer_text,
            stats: json_text::parse_list::<StatItem>(Some(self.stats.as_str()), "site_config.stats"),
        }
    }
}

#[derive(sqlx::FromRow)]
struct SliderRow {
    id: Uuid,
    image: String,
    title: String,
    subtitle: String,
    sort_order: i32,
}

impl SliderRow {
    fn into_slider(self) -> Slider {
        Slider {
            slider_id: SliderId::from_uuid(self.id),
            image: self.image,
            title: self.title,
            subtitle: self.subtitle,
            sort_order: self.sort_order,
        }
    }
}
