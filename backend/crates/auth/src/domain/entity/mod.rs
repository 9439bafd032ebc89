//! Domain Entities

pub mod admin;
pub mod parent;
pub mod school_credential;
pub mod session;

pub use admin::Admin;
pub use parent::Parent;
pub use school_credential::SchoolCredential;
pub use session::Session;
