//! Booking Router
//!
//! Public pages at the root, and one nested router per role area, each
//! behind the session middleware of that role.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use auth::{SessionReader, UserType, require_role};

use crate::application::BookingConfig;
use crate::domain::repository::BookingStore;
use crate::infra::postgres::PgBookingRepository;
use crate::presentation::handlers::{self, BookingAppState};

/// Create the Booking router with PostgreSQL repository
pub fn booking_router(
    repo: PgBookingRepository,
    config: BookingConfig,
    reader: SessionReader,
) -> Router {
    booking_router_generic(repo, config, reader)
}

/// Create a generic Booking router for any repository implementation
pub fn booking_router_generic<R>(repo: R, config: BookingConfig, reader: SessionReader) -> Router
where
    R: BookingStore,
{
    let upload_limit = config.max_upload_bytes;
    let state = BookingAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let admin = Router::new()
        .route("/dashboard", get(handlers::admin_dashboard::<R>))
        .route(
            "/schools",
            get(handlers::list_schools::<R>).post(handlers::upsert_school::<R>),
        )
        .route("/schools/{school_id}", delete(handlers::delete_school::<R>))
        .route(
            "/tours",
            get(handlers::list_tours::<R>).post(handlers::upsert_tour::<R>),
        )
        .route("/tours/{tour_id}", delete(handlers::delete_tour::<R>))
        .route(
            "/tours/{tour_id}/participants",
            get(handlers::export_participants::<R>),
        )
        .route(
            "/locations",
            get(handlers::list_locations::<R>).post(handlers::upsert_location::<R>),
        )
        .route(
            "/locations/{location_id}",
            delete(handlers::delete_location::<R>),
        )
        .route("/reviews", get(handlers::list_reviews::<R>))
        .route(
            "/reviews/{review_id}/status",
            put(handlers::update_review_status::<R>),
        )
        .route(
            "/surveys",
            get(handlers::list_surveys::<R>).post(handlers::create_survey::<R>),
        )
        .route("/surveys/{survey_id}", delete(handlers::delete_survey::<R>))
        .route(
            "/surveys/{survey_id}/active",
            put(handlers::set_survey_active::<R>),
        )
        .route("/expenses", post(handlers::add_expense::<R>))
        .route(
            "/expenses/{expense_id}",
            delete(handlers::delete_expense::<R>),
        )
        .route("/reports", get(handlers::tour_reports::<R>))
        .route("/site-settings", get(handlers::site_settings::<R>))
        .route("/site-config", put(handlers::update_site_config::<R>))
        .route("/sliders", put(handlers::replace_sliders::<R>))
        .route_layer(middleware::from_fn_with_state(
            reader.guard(UserType::Admin),
            require_role,
        ));

    let school = Router::new()
        .route("/dashboard", get(handlers::school_dashboard::<R>))
        .route(
            "/students/import",
            post(handlers::import_students::<R>).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/registrations/status",
            put(handlers::update_registration_status::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            reader.guard(UserType::School),
            require_role,
        ));

    let parent = Router::new()
        .route("/dashboard", get(handlers::parent_dashboard::<R>))
        .route("/student", post(handlers::upsert_student::<R>))
        .route("/registrations", post(handlers::register::<R>))
        .route("/reviews", post(handlers::submit_review::<R>))
        .route_layer(middleware::from_fn_with_state(
            reader.guard(UserType::Parent),
            require_role,
        ));

    Router::new()
        .route("/home", get(handlers::home::<R>))
        .route("/tours/{tour_id}", get(handlers::tour_detail::<R>))
        .route("/surveys/{survey_id}/vote", post(handlers::vote::<R>))
        .nest("/admin", admin)
        .nest("/school", school)
        .nest("/parent", parent)
        .with_state(state)
}
