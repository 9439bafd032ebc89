//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{Admin, Parent, SchoolCredential, Session};
pub use repository::{AdminRepository, ParentRepository, SchoolCredentialRepository};
pub use value_object::{AccessCode, TcNo, UserType};
