//! Auth Router

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::SessionCodec;
use crate::domain::repository::{AdminRepository, ParentRepository, SchoolCredentialRepository};
use crate::domain::value_object::UserType;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{SessionReader, require_role};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: AdminRepository + SchoolCredentialRepository + ParentRepository + Send + Sync + 'static,
{
    let codec = Arc::new(SessionCodec::from_config(&config));
    let reader = SessionReader::new(codec.clone(), config.session_cookie_name.as_str());

    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        codec,
        reader: reader.clone(),
    };

    let admin_accounts = Router::new()
        .route(
            "/admins",
            get(handlers::list_admins::<R>).post(handlers::create_admin::<R>),
        )
        .route("/admins/{admin_id}", delete(handlers::delete_admin::<R>))
        .route(
            "/admins/{admin_id}/password",
            put(handlers::change_admin_password::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            reader.guard(UserType::Admin),
            require_role,
        ));

    Router::new()
        .route("/admin/login", post(handlers::admin_login::<R>))
        .route("/school/login", post(handlers::school_login::<R>))
        .route("/parent/login", post(handlers::parent_login::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .route("/session", get(handlers::session_status::<R>))
        .merge(admin_accounts)
        .with_state(state)
}
