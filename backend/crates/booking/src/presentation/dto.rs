//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{
    AdminDashboard, HomePage, HomeTour, LocationInput, ParentDashboard, PricedTour, SchoolBadge,
    SchoolDashboard, SchoolInput, SchoolStats, SliderInput, StudentForm,
    StudentWithRegistrations, SurveyInput, TourDetail, TourInput, TourReport,
};
use crate::domain::entity::{
    Expense, ItineraryStop, Location, Registration, Review, School, SiteConfig, Slider, StatItem,
    Student, Survey, Tour, TourAssignment, VoteCount,
};
use crate::domain::value_object::{RegistrationStatus, ReviewStatus};

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}

// ============================================================================
// Schools
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourAssignmentDto {
    pub tour_id: Uuid,
    pub price: f64,
}

impl From<&TourAssignment> for TourAssignmentDto {
    fn from(a: &TourAssignment) -> Self {
        Self {
            tour_id: a.tour_id.into_uuid(),
            price: a.price,
        }
    }
}

/// POST /admin/schools
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRequest {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub access_code: String,
    pub iban: Option<String>,
    /// Omitted keeps the current assignments
    pub assigned_tours: Option<Vec<TourAssignmentDto>>,
}

impl From<SchoolRequest> for SchoolInput {
    fn from(req: SchoolRequest) -> Self {
        Self {
            school_id: req.id.map(Into::into),
            name: req.name,
            city: req.city,
            district: req.district,
            contact_name: req.contact_name,
            phone: req.phone,
            username: req.username,
            password: req.password,
            access_code: req.access_code,
            iban: req.iban,
            assigned_tours: req.assigned_tours.map(|tours| {
                tours
                    .into_iter()
                    .map(|a| TourAssignment {
                        tour_id: a.tour_id.into(),
                        price: a.price,
                    })
                    .collect()
            }),
        }
    }
}

/// School as shown to admins and on dashboards; never carries the password
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolDto {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub district: String,
    pub contact_name: String,
    pub phone: String,
    pub username: String,
    pub access_code: String,
    pub iban: Option<String>,
    pub assigned_tours: Vec<TourAssignmentDto>,
    pub created_at: DateTime<Utc>,
}

impl From<&School> for SchoolDto {
    fn from(s: &School) -> Self {
        Self {
            id: s.school_id.into_uuid(),
            name: s.name.clone(),
            city: s.city.clone(),
            district: s.district.clone(),
            contact_name: s.contact_name.clone(),
            phone: s.phone.clone(),
            username: s.username.clone(),
            access_code: s.access_code.clone(),
            iban: s.iban.clone(),
            assigned_tours: s.assigned_tours.iter().map(TourAssignmentDto::from).collect(),
            created_at: s.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolBadgeDto {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub district: String,
}

impl From<&SchoolBadge> for SchoolBadgeDto {
    fn from(b: &SchoolBadge) -> Self {
        Self {
            id: b.school_id.into_uuid(),
            name: b.name.clone(),
            city: b.city.clone(),
            district: b.district.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SchoolListResponse {
    pub success: bool,
    pub schools: Vec<SchoolDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchoolResponse {
    pub success: bool,
    pub school: SchoolDto,
}

// ============================================================================
// Tours & Locations
// ============================================================================

/// POST /admin/tours
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourRequest {
    pub id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub video_url: Option<String>,
    #[serde(default, rename = "type")]
    pub tour_type: String,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub itinerary: Vec<ItineraryStop>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub location_ids: Vec<Uuid>,
}

impl From<TourRequest> for TourInput {
    fn from(req: TourRequest) -> Self {
        Self {
            tour_id: req.id.map(Into::into),
            title: req.title,
            description: req.description,
            cover_image: req.cover_image,
            images: req.images,
            video_url: req.video_url,
            tour_type: req.tour_type,
            date: req.date,
            location: req.location,
            itinerary: req.itinerary,
            price: req.price,
            location_ids: req.location_ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub images: Vec<String>,
    pub video_url: Option<String>,
    #[serde(rename = "type")]
    pub tour_type: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub itinerary: Vec<ItineraryStop>,
    pub price: f64,
    pub location_ids: Vec<Uuid>,
}

impl From<&Tour> for TourDto {
    fn from(t: &Tour) -> Self {
        Self {
            id: t.tour_id.into_uuid(),
            title: t.title.clone(),
            description: t.description.clone(),
            cover_image: t.cover_image.clone(),
            images: t.images.clone(),
            video_url: t.video_url.clone(),
            tour_type: t.tour_type.clone(),
            date: t.date,
            location: t.location.clone(),
            itinerary: t.itinerary.clone(),
            price: t.price,
            location_ids: t.location_ids.iter().map(|id| id.into_uuid()).collect(),
        }
    }
}

/// Tour at a school's assigned price
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedTourDto {
    #[serde(flatten)]
    pub tour: TourDto,
    pub school_price: Option<f64>,
}

impl From<&PricedTour> for PricedTourDto {
    fn from(p: &PricedTour) -> Self {
        Self {
            tour: TourDto::from(&p.tour),
            school_price: p.price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TourListResponse {
    pub success: bool,
    pub tours: Vec<TourDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TourResponse {
    pub success: bool,
    pub tour: TourDto,
}

/// POST /admin/locations
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    pub id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub video_url: Option<String>,
}

impl From<LocationRequest> for LocationInput {
    fn from(req: LocationRequest) -> Self {
        Self {
            location_id: req.id.map(Into::into),
            title: req.title,
            description: req.description,
            image: req.image,
            video_url: req.video_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub video_url: Option<String>,
}

impl From<&Location> for LocationDto {
    fn from(l: &Location) -> Self {
        Self {
            id: l.location_id.into_uuid(),
            title: l.title.clone(),
            description: l.description.clone(),
            image: l.image.clone(),
            video_url: l.video_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationListResponse {
    pub success: bool,
    pub locations: Vec<LocationDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationResponse {
    pub success: bool,
    pub location: LocationDto,
}

// ============================================================================
// Students & Registrations
// ============================================================================

/// POST /parent/student
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFormRequest {
    /// Defaults to the parent's national ID
    pub tc_no: Option<String>,
    pub name: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub school_no: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub parent_name: String,
    #[serde(default)]
    pub parent_phone: String,
}

impl From<StudentFormRequest> for StudentForm {
    fn from(req: StudentFormRequest) -> Self {
        Self {
            tc_no: req.tc_no,
            name: req.name,
            grade: req.grade,
            school_no: req.school_no,
            allergies: req.allergies,
            parent_name: req.parent_name,
            parent_phone: req.parent_phone,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: Uuid,
    pub tc_no: String,
    pub name: String,
    pub grade: String,
    pub school_no: String,
    pub allergies: String,
    pub school_id: Uuid,
}

impl From<&Student> for StudentDto {
    fn from(s: &Student) -> Self {
        Self {
            id: s.student_id.into_uuid(),
            tc_no: s.tc_no.clone(),
            name: s.name.clone(),
            grade: s.grade.clone(),
            school_no: s.school_no.clone(),
            allergies: s.allergies.clone(),
            school_id: s.school_id.into_uuid(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    pub success: bool,
    pub student: StudentDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub tour_id: Uuid,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Registration> for RegistrationDto {
    fn from(r: &Registration) -> Self {
        Self {
            id: r.registration_id.into_uuid(),
            student_id: r.student_id.into_uuid(),
            tour_id: r.tour_id.into_uuid(),
            status: r.status,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentWithRegistrationsDto {
    #[serde(flatten)]
    pub student: StudentDto,
    pub registrations: Vec<RegistrationDto>,
}

impl From<&StudentWithRegistrations> for StudentWithRegistrationsDto {
    fn from(s: &StudentWithRegistrations) -> Self {
        Self {
            student: StudentDto::from(&s.student),
            registrations: s.registrations.iter().map(RegistrationDto::from).collect(),
        }
    }
}

/// POST /parent/registrations
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub student_id: Uuid,
    pub tour_id: Uuid,
}

/// PUT /school/registrations/status
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatusRequest {
    pub student_id: Uuid,
    pub tour_id: Uuid,
    pub status: RegistrationStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub registration: RegistrationDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub success: bool,
    pub file_name: String,
    /// Base64 of the xlsx bytes
    pub data: String,
}

// ============================================================================
// Reviews
// ============================================================================

/// POST /parent/reviews
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub tour_id: Uuid,
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

/// PUT /admin/reviews/{review_id}/status
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewStatusRequest {
    pub status: ReviewStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: Uuid,
    pub tour_id: Uuid,
    pub parent_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Review> for ReviewDto {
    fn from(r: &Review) -> Self {
        Self {
            id: r.review_id.into_uuid(),
            tour_id: r.tour_id.into_uuid(),
            parent_id: r.parent_id.into_uuid(),
            rating: r.rating.value(),
            comment: r.comment.clone(),
            status: r.status,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewListResponse {
    pub success: bool,
    pub reviews: Vec<ReviewDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub success: bool,
    pub review: ReviewDto,
}

// ============================================================================
// Surveys
// ============================================================================

/// POST /admin/surveys
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl From<SurveyRequest> for SurveyInput {
    fn from(req: SurveyRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            options: req.options,
        }
    }
}

/// PUT /admin/surveys/{survey_id}/active
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyActiveRequest {
    pub is_active: bool,
}

/// POST /surveys/{survey_id}/vote
#[derive(Debug, Clone, Deserialize)]
pub struct VoteRequest {
    pub option: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub options: Vec<String>,
    pub votes: Vec<VoteCount>,
    pub total_votes: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Survey> for SurveyDto {
    fn from(s: &Survey) -> Self {
        Self {
            id: s.survey_id.into_uuid(),
            title: s.title.clone(),
            description: s.description.clone(),
            options: s.options.clone(),
            votes: s.votes.clone(),
            total_votes: s.total_votes(),
            is_active: s.is_active,
            created_at: s.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SurveyListResponse {
    pub success: bool,
    pub surveys: Vec<SurveyDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurveyResponse {
    pub success: bool,
    pub survey: SurveyDto,
}

// ============================================================================
// Expenses & Reports
// ============================================================================

/// POST /admin/expenses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    pub tour_id: Uuid,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDto {
    pub id: Uuid,
    pub tour_id: Uuid,
    pub description: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl From<&Expense> for ExpenseDto {
    fn from(e: &Expense) -> Self {
        Self {
            id: e.expense_id.into_uuid(),
            tour_id: e.tour_id.into_uuid(),
            description: e.description.clone(),
            amount: e.amount,
            created_at: e.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseResponse {
    pub success: bool,
    pub expense: ExpenseDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourReportDto {
    pub tour_id: Uuid,
    pub title: String,
    pub date: DateTime<Utc>,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub profit: f64,
    pub registered_count: usize,
    pub expenses: Vec<ExpenseDto>,
}

impl From<&TourReport> for TourReportDto {
    fn from(r: &TourReport) -> Self {
        Self {
            tour_id: r.tour_id.into_uuid(),
            title: r.title.clone(),
            date: r.date,
            total_revenue: r.total_revenue,
            total_expenses: r.total_expenses,
            profit: r.profit,
            registered_count: r.registered_count,
            expenses: r.expenses.iter().map(ExpenseDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportsResponse {
    pub success: bool,
    pub reports: Vec<TourReportDto>,
}

// ============================================================================
// Site content
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfigDto {
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub footer_text: String,
    #[serde(default)]
    pub stats: Vec<StatItem>,
}

impl From<&SiteConfig> for SiteConfigDto {
    fn from(c: &SiteConfig) -> Self {
        Self {
            logo: c.logo.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            address: c.address.clone(),
            footer_text: c.footer_text.clone(),
            stats: c.stats.clone(),
        }
    }
}

impl From<SiteConfigDto> for SiteConfig {
    fn from(dto: SiteConfigDto) -> Self {
        Self {
            logo: dto.logo,
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
            footer_text: dto.footer_text,
            stats: dto.stats,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SliderItemRequest {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

impl From<SliderItemRequest> for SliderInput {
    fn from(req: SliderItemRequest) -> Self {
        Self {
            image: req.image,
            title: req.title,
            subtitle: req.subtitle,
        }
    }
}

/// PUT /admin/sliders
#[derive(Debug, Clone, Deserialize)]
pub struct SlidersRequest {
    pub sliders: Vec<SliderItemRequest>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderDto {
    pub id: Uuid,
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub order: i32,
}

impl From<&Slider> for SliderDto {
    fn from(s: &Slider) -> Self {
        Self {
            id: s.slider_id.into_uuid(),
            image: s.image.clone(),
            title: s.title.clone(),
            subtitle: s.subtitle.clone(),
            order: s.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsResponse {
    pub success: bool,
    pub site_config: SiteConfigDto,
    pub sliders: Vec<SliderDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SliderListResponse {
    pub success: bool,
    pub sliders: Vec<SliderDto>,
}

// ============================================================================
// Dashboards & public pages
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolStatsDto {
    pub school_id: Uuid,
    pub name: String,
    pub total_students: usize,
    pub registered_students: usize,
}

impl From<&SchoolStats> for SchoolStatsDto {
    fn from(s: &SchoolStats) -> Self {
        Self {
            school_id: s.school_id.into_uuid(),
            name: s.name.clone(),
            total_students: s.total_students,
            registered_students: s.registered_students,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardResponse {
    pub success: bool,
    pub total_schools: usize,
    pub total_students: i64,
    pub total_registrations: i64,
    pub pending_payments: i64,
    pub school_stats: Vec<SchoolStatsDto>,
}

impl From<&AdminDashboard> for AdminDashboardResponse {
    fn from(d: &AdminDashboard) -> Self {
        Self {
            success: true,
            total_schools: d.total_schools,
            total_students: d.total_students,
            total_registrations: d.total_registrations,
            pending_payments: d.pending_payments,
            school_stats: d.school_stats.iter().map(SchoolStatsDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SchoolDashboardResponse {
    pub success: bool,
    pub school: SchoolDto,
    pub tours: Vec<PricedTourDto>,
    pub students: Vec<StudentWithRegistrationsDto>,
}

impl From<&SchoolDashboard> for SchoolDashboardResponse {
    fn from(d: &SchoolDashboard) -> Self {
        Self {
            success: true,
            school: SchoolDto::from(&d.school),
            tours: d.tours.iter().map(PricedTourDto::from).collect(),
            students: d.students.iter().map(StudentWithRegistrationsDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentDashboardResponse {
    pub success: bool,
    pub school: SchoolBadgeDto,
    pub tours: Vec<PricedTourDto>,
    pub parent_tc: String,
    pub student: Option<StudentWithRegistrationsDto>,
    pub surveys: Vec<SurveyDto>,
}

impl From<&ParentDashboard> for ParentDashboardResponse {
    fn from(d: &ParentDashboard) -> Self {
        Self {
            success: true,
            school: SchoolBadgeDto::from(&SchoolBadge::from(&d.school)),
            tours: d.tours.iter().map(PricedTourDto::from).collect(),
            parent_tc: d.parent_tc.clone(),
            student: d.student.as_ref().map(StudentWithRegistrationsDto::from),
            surveys: d.surveys.iter().map(SurveyDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeTourDto {
    pub id: Uuid,
    pub title: String,
    pub cover_image: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub school: Option<SchoolBadgeDto>,
    pub price: Option<f64>,
    pub registered_count: usize,
}

impl From<&HomeTour> for HomeTourDto {
    fn from(t: &HomeTour) -> Self {
        Self {
            id: t.tour_id.into_uuid(),
            title: t.title.clone(),
            cover_image: t.cover_image.clone(),
            date: t.date,
            location: t.location.clone(),
            school: t.school.as_ref().map(SchoolBadgeDto::from),
            price: t.price,
            registered_count: t.registered_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub success: bool,
    pub sliders: Vec<SliderDto>,
    pub site_config: SiteConfigDto,
    pub tours: Vec<HomeTourDto>,
}

impl From<&HomePage> for HomeResponse {
    fn from(h: &HomePage) -> Self {
        Self {
            success: true,
            sliders: h.sliders.iter().map(SliderDto::from).collect(),
            site_config: SiteConfigDto::from(&h.site_config),
            tours: h.tours.iter().map(HomeTourDto::from).collect(),
        }
    }
}

/// GET /tours/{tour_id}?schoolId=
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDetailQuery {
    pub school_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDetailResponse {
    pub success: bool,
    pub tour: TourDto,
    pub school: Option<SchoolBadgeDto>,
    pub school_price: Option<f64>,
    pub registered_count: usize,
    pub locations: Vec<LocationDto>,
    pub reviews: Vec<ReviewDto>,
    pub surveys: Vec<SurveyDto>,
}

impl From<&TourDetail> for TourDetailResponse {
    fn from(d: &TourDetail) -> Self {
        Self {
            success: true,
            tour: TourDto::from(&d.tour),
            school: d.school.as_ref().map(SchoolBadgeDto::from),
            school_price: d.price,
            registered_count: d.registered_count,
            locations: d.locations.iter().map(LocationDto::from).collect(),
            reviews: d.reviews.iter().map(ReviewDto::from).collect(),
            surveys: d.surveys.iter().map(SurveyDto::from).collect(),
        }
    }
}
