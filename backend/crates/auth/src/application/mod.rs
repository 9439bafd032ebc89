//! Application Layer
//!
//! Use cases and application services.

pub mod admin_accounts;
pub mod admin_login;
pub mod config;
pub mod guard;
pub mod parent_login;
pub mod school_login;
pub mod session_codec;

// Re-exports
pub use admin_accounts::{AdminAccountsUseCase, AdminSummary, CreateAdminInput};
pub use admin_login::{AdminLoginInput, AdminLoginUseCase};
pub use config::AuthConfig;
pub use guard::{authorize, require};
pub use parent_login::{ParentLoginInput, ParentLoginUseCase};
pub use school_login::{SchoolLoginInput, SchoolLoginUseCase};
pub use session_codec::SessionCodec;
