//! HTTP Handlers
//!
//! Protected handlers receive the [`Session`] that the area middleware put
//! into request extensions; the use cases check the role again.

use axum::Json;
use axum::extract::{Extension, Multipart, Path, Query, State};
use kernel::id::{ExpenseId, LocationId, ReviewId, SchoolId, StudentId, SurveyId, TourId};
use std::sync::Arc;
use uuid::Uuid;

use auth::Session;

use crate::application::{
    BookingConfig, DashboardsUseCase, ExpensesUseCase, LocationsUseCase, ParticipantExportUseCase,
    RegistrationsUseCase, ReportsUseCase, ReviewsUseCase, SchoolsUseCase, SiteSettingsUseCase,
    StudentFormUseCase, StudentImportUseCase, SurveysUseCase, ToursUseCase,
};
use crate::domain::repository::BookingStore;
use crate::error::{BookingError, BookingResult};
use crate::presentation::dto::{
    AdminDashboardResponse, ExpenseDto, ExpenseRequest, ExpenseResponse, ExportResponse,
    HomeResponse, ImportResponse, LocationDto, LocationListResponse, LocationRequest,
    LocationResponse, ParentDashboardResponse, RegisterRequest, RegistrationDto,
    RegistrationResponse, RegistrationStatusRequest, ReportsResponse, ReviewDto,
    ReviewListResponse, ReviewRequest, ReviewResponse, ReviewStatusRequest,
    SchoolDashboardResponse, SchoolDto, SchoolListResponse, SchoolRequest, SchoolResponse,
    SiteConfigDto, SiteSettingsResponse, SliderDto, SliderListResponse, SlidersRequest,
    StudentDto, StudentFormRequest, StudentResponse, SuccessResponse, SurveyActiveRequest,
    SurveyDto, SurveyListResponse, SurveyRequest, SurveyResponse, TourDetailQuery,
    TourDetailResponse, TourDto, TourListResponse, TourReportDto, TourRequest, TourResponse,
    VoteRequest,
};
use crate::presentation::extract::ApiJson;

/// Shared state for booking handlers
pub struct BookingAppState<R>
where
    R: BookingStore,
{
    pub repo: Arc<R>,
    pub config: Arc<BookingConfig>,
}

impl<R> Clone for BookingAppState<R>
where
    R: BookingStore,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Public pages
// ============================================================================

/// GET /api/home
pub async fn home<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
) -> BookingResult<Json<HomeResponse>> {
    let page = DashboardsUseCase::new(state.repo.clone()).home().await?;
    Ok(Json(HomeResponse::from(&page)))
}

/// GET /api/tours/{tour_id}?schoolId=
pub async fn tour_detail<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Path(tour_id): Path<Uuid>,
    Query(query): Query<TourDetailQuery>,
) -> BookingResult<Json<TourDetailResponse>> {
    let school_id = query.school_id.map(SchoolId::from_uuid);
    let detail = DashboardsUseCase::new(state.repo.clone())
        .tour_detail(&TourId::from_uuid(tour_id), school_id.as_ref())
        .await?;

    Ok(Json(TourDetailResponse::from(&detail)))
}

/// POST /api/surveys/{survey_id}/vote
pub async fn vote<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Path(survey_id): Path<Uuid>,
    ApiJson(req): ApiJson<VoteRequest>,
) -> BookingResult<Json<SurveyResponse>> {
    let survey = SurveysUseCase::new(state.repo.clone(), state.config.clone())
        .vote(&SurveyId::from_uuid(survey_id), &req.option)
        .await?;

    Ok(Json(SurveyResponse {
        success: true,
        survey: SurveyDto::from(&survey),
    }))
}

// ============================================================================
// Admin area
// ============================================================================

/// GET /api/admin/dashboard
pub async fn admin_dashboard<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
) -> BookingResult<Json<AdminDashboardResponse>> {
    let dashboard = DashboardsUseCase::new(state.repo.clone())
        .admin_dashboard(&session)
        .await?;
    Ok(Json(AdminDashboardResponse::from(&dashboard)))
}

/// GET /api/admin/schools
pub async fn list_schools<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
) -> BookingResult<Json<SchoolListResponse>> {
    let schools = SchoolsUseCase::new(state.repo.clone()).list(&session).await?;

    Ok(Json(SchoolListResponse {
        success: true,
        schools: schools.iter().map(SchoolDto::from).collect(),
    }))
}

/// POST /api/admin/schools
pub async fn upsert_school<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    ApiJson(req): ApiJson<SchoolRequest>,
) -> BookingResult<Json<SchoolResponse>> {
    let school = SchoolsUseCase::new(state.repo.clone())
        .upsert(&session, req.into())
        .await?;

    Ok(Json(SchoolResponse {
        success: true,
        school: SchoolDto::from(&school),
    }))
}

/// DELETE /api/admin/schools/{school_id}
pub async fn delete_school<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    Path(school_id): Path<Uuid>,
) -> BookingResult<Json<SuccessResponse>> {
    SchoolsUseCase::new(state.repo.clone())
        .delete(&session, &SchoolId::from_uuid(school_id))
        .await?;
    Ok(Json(SuccessResponse::OK))
}

/// GET /api/admin/tours
pub async fn list_tours<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
) -> BookingResult<Json<TourListResponse>> {
    let tours = ToursUseCase::new(state.repo.clone()).list(&session).await?;

    Ok(Json(TourListResponse {
        success: true,
        tours: tours.iter().map(TourDto::from).collect(),
    }))
}

/// POST /api/admin/tours
pub async fn upsert_tour<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    ApiJson(req): ApiJson<TourRequest>,
) -> BookingResult<Json<TourResponse>> {
    let tour = ToursUseCase::new(state.repo.clone())
        .upsert(&session, req.into())
        .await?;

    Ok(Json(TourResponse {
        success: true,
        tour: TourDto::from(&tour),
    }))
}

/// DELETE /api/admin/tours/{tour_id}
pub async fn delete_tour<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    Path(tour_id): Path<Uuid>,
) -> BookingResult<Json<SuccessResponse>> {
    ToursUseCase::new(state.repo.clone())
        .delete(&session, &TourId::from_uuid(tour_id))
        .await?;
    Ok(Json(SuccessResponse::OK))
}

/// GET /api/admin/tours/{tour_id}/participants
pub async fn export_participants<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    Path(tour_id): Path<Uuid>,
) -> BookingResult<Json<ExportResponse>> {
    let file = ParticipantExportUseCase::new(state.repo.clone(), state.config.clone())
        .export(&session, &TourId::from_uuid(tour_id))
        .await?;

    Ok(Json(ExportResponse {
        success: true,
        file_name: file.file_name,
        data: platform::crypto::to_base64(&file.bytes),
    }))
}

/// GET /api/admin/locations
pub async fn list_locations<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
) -> BookingResult<Json<LocationListResponse>> {
    let locations = LocationsUseCase::new(state.repo.clone()).list(&session).await?;

    Ok(Json(LocationListResponse {
        success: true,
        locations: locations.iter().map(LocationDto::from).collect(),
    }))
}

/// POST /api/admin/locations
pub async fn upsert_location<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    ApiJson(req): ApiJson<LocationRequest>,
) -> BookingResult<Json<LocationResponse>> {
    let location = LocationsUseCase::new(state.repo.clone())
        .upsert(&session, req.into())
        .await?;

    Ok(Json(LocationResponse {
        success: true,
        location: LocationDto::from(&location),
    }))
}

/// DELETE /api/admin/locations/{location_id}
pub async fn delete_location<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    Path(location_id): Path<Uuid>,
) -> BookingResult<Json<SuccessResponse>> {
    LocationsUseCase::new(state.repo.clone())
        .delete(&session, &LocationId::from_uuid(location_id))
        .await?;
    Ok(Json(SuccessResponse::OK))
}

/// GET /api/admin/reviews
pub async fn list_reviews<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
) -> BookingResult<Json<ReviewListResponse>> {
    let reviews = ReviewsUseCase::new(state.repo.clone()).list(&session).await?;

    Ok(Json(ReviewListResponse {
        success: true,
        reviews: reviews.iter().map(ReviewDto::from).collect(),
    }))
}

/// PUT /api/admin/reviews/{review_id}/status
pub async fn update_review_status<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    Path(review_id): Path<Uuid>,
    ApiJson(req): ApiJson<ReviewStatusRequest>,
) -> BookingResult<Json<SuccessResponse>> {
    ReviewsUseCase::new(state.repo.clone())
        .update_status(&session, &ReviewId::from_uuid(review_id), req.status)
        .await?;
    Ok(Json(SuccessResponse::OK))
}

/// GET /api/admin/surveys
pub async fn list_surveys<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
) -> BookingResult<Json<SurveyListResponse>> {
    let surveys = SurveysUseCase::new(state.repo.clone(), state.config.clone())
        .list(&session)
        .await?;

    Ok(Json(SurveyListResponse {
        success: true,
        surveys: surveys.iter().map(SurveyDto::from).collect(),
    }))
}

/// POST /api/admin/surveys
pub async fn create_survey<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    ApiJson(req): ApiJson<SurveyRequest>,
) -> BookingResult<Json<SurveyResponse>> {
    let survey = SurveysUseCase::new(state.repo.clone(), state.config.clone())
        .create(&session, req.into())
        .await?;

    Ok(Json(SurveyResponse {
        success: true,
        survey: SurveyDto::from(&survey),
    }))
}

/// PUT /api/admin/surveys/{survey_id}/active
pub async fn set_survey_active<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    Path(survey_id): Path<Uuid>,
    ApiJson(req): ApiJson<SurveyActiveRequest>,
) -> BookingResult<Json<SuccessResponse>> {
    SurveysUseCase::new(state.repo.clone(), state.config.clone())
        .set_active(&session, &SurveyId::from_uuid(survey_id), req.is_active)
        .await?;
    Ok(Json(SuccessResponse::OK))
}

/// DELETE /api/admin/surveys/{survey_id}
pub async fn delete_survey<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    Path(survey_id): Path<Uuid>,
) -> BookingResult<Json<SuccessResponse>> {
    SurveysUseCase::new(state.repo.clone(), state.config.clone())
        .delete(&session, &SurveyId::from_uuid(survey_id))
        .await?;
    Ok(Json(SuccessResponse::OK))
}

/// POST /api/admin/expenses
pub async fn add_expense<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    ApiJson(req): ApiJson<ExpenseRequest>,
) -> BookingResult<Json<ExpenseResponse>> {
    let expense = ExpensesUseCase::new(state.repo.clone())
        .add(
            &session,
            &TourId::from_uuid(req.tour_id),
            &req.description,
            req.amount,
        )
        .await?;

    Ok(Json(ExpenseResponse {
        success: true,
        expense: ExpenseDto::from(&expense),
    }))
}

/// DELETE /api/admin/expenses/{expense_id}
pub async fn delete_expense<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    Path(expense_id): Path<Uuid>,
) -> BookingResult<Json<SuccessResponse>> {
    ExpensesUseCase::new(state.repo.clone())
        .delete(&session, &ExpenseId::from_uuid(expense_id))
        .await?;
    Ok(Json(SuccessResponse::OK))
}

/// GET /api/admin/reports
pub async fn tour_reports<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
) -> BookingResult<Json<ReportsResponse>> {
    let reports = ReportsUseCase::new(state.repo.clone())
        .tour_reports(&session)
        .await?;

    Ok(Json(ReportsResponse {
        success: true,
        reports: reports.iter().map(TourReportDto::from).collect(),
    }))
}

/// GET /api/admin/site-settings
pub async fn site_settings<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
) -> BookingResult<Json<SiteSettingsResponse>> {
    let (config, sliders) = SiteSettingsUseCase::new(state.repo.clone())
        .get(&session)
        .await?;

    Ok(Json(SiteSettingsResponse {
        success: true,
        site_config: SiteConfigDto::from(&config),
        sliders: sliders.iter().map(SliderDto::from).collect(),
    }))
}

/// PUT /api/admin/site-config
pub async fn update_site_config<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    ApiJson(req): ApiJson<SiteConfigDto>,
) -> BookingResult<Json<SuccessResponse>> {
    SiteSettingsUseCase::new(state.repo.clone())
        .update_config(&session, req.into())
        .await?;
    Ok(Json(SuccessResponse::OK))
}

/// PUT /api/admin/sliders
pub async fn replace_sliders<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    ApiJson(req): ApiJson<SlidersRequest>,
) -> BookingResult<Json<SliderListResponse>> {
    let sliders = SiteSettingsUseCase::new(state.repo.clone())
        .replace_sliders(&session, req.sliders.into_iter().map(Into::into).collect())
        .await?;

    Ok(Json(SliderListResponse {
        success: true,
        sliders: sliders.iter().map(SliderDto::from).collect(),
    }))
}

// ============================================================================
// School area
// ============================================================================

/// GET /api/school/dashboard
pub async fn school_dashboard<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
) -> BookingResult<Json<SchoolDashboardResponse>> {
    let dashboard = DashboardsUseCase::new(state.repo.clone())
        .school_dashboard(&session)
        .await?;
    Ok(Json(SchoolDashboardResponse::from(&dashboard)))
}

/// POST /api/school/students/import (multipart, field `file`)
pub async fn import_students<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    multipart: Multipart,
) -> BookingResult<Json<ImportResponse>> {
    let file = read_file_field(multipart).await?;
    let count = StudentImportUseCase::new(state.repo.clone())
        .import(&session, file.as_deref())
        .await?;

    Ok(Json(ImportResponse {
        success: true,
        count,
    }))
}

/// PUT /api/school/registrations/status
pub async fn update_registration_status<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    ApiJson(req): ApiJson<RegistrationStatusRequest>,
) -> BookingResult<Json<SuccessResponse>> {
    RegistrationsUseCase::new(state.repo.clone())
        .update_status(
            &session,
            &StudentId::from_uuid(req.student_id),
            &TourId::from_uuid(req.tour_id),
            req.status,
        )
        .await?;
    Ok(Json(SuccessResponse::OK))
}

// ============================================================================
// Parent area
// ============================================================================

/// GET /api/parent/dashboard
pub async fn parent_dashboard<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
) -> BookingResult<Json<ParentDashboardResponse>> {
    let dashboard = DashboardsUseCase::new(state.repo.clone())
        .parent_dashboard(&session)
        .await?;
    Ok(Json(ParentDashboardResponse::from(&dashboard)))
}

/// POST /api/parent/student
pub async fn upsert_student<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    ApiJson(req): ApiJson<StudentFormRequest>,
) -> BookingResult<Json<StudentResponse>> {
    let student = StudentFormUseCase::new(state.repo.clone())
        .upsert_student(&session, req.into())
        .await?;

    Ok(Json(StudentResponse {
        success: true,
        student: StudentDto::from(&student),
    }))
}

/// POST /api/parent/registrations
pub async fn register<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> BookingResult<Json<RegistrationResponse>> {
    let registration = RegistrationsUseCase::new(state.repo.clone())
        .register(
            &session,
            &StudentId::from_uuid(req.student_id),
            &TourId::from_uuid(req.tour_id),
        )
        .await?;

    Ok(Json(RegistrationResponse {
        success: true,
        registration: RegistrationDto::from(&registration),
    }))
}

/// POST /api/parent/reviews
pub async fn submit_review<R: BookingStore>(
    State(state): State<BookingAppState<R>>,
    Extension(session): Extension<Session>,
    ApiJson(req): ApiJson<ReviewRequest>,
) -> BookingResult<Json<ReviewResponse>> {
    let review = ReviewsUseCase::new(state.repo.clone())
        .submit(
            &session,
            &TourId::from_uuid(req.tour_id),
            req.rating,
            &req.comment,
        )
        .await?;

    Ok(Json(ReviewResponse {
        success: true,
        review: ReviewDto::from(&review),
    }))
}

// ============================================================================
// Helpers
// ============================================================================

/// Bytes of the `file` field, `None` when the form has no such field
async fn read_file_field(mut multipart: Multipart) -> BookingResult<Option<Vec<u8>>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| BookingError::Spreadsheet(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| BookingError::Spreadsheet(e.to_string()))?;
        if bytes.is_empty() {
            return Ok(None);
        }
        return Ok(Some(bytes.to_vec()));
    }

    Ok(None)
}
