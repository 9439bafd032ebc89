use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The three kinds of session holders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[display("admin")]
    Admin,
    #[display("school")]
    School,
    #[display("parent")]
    Parent,
}

impl UserType {
    /// Login page of the area guarded for this role
    #[inline]
    pub const fn login_path(&self) -> &'static str {
        match self {
            UserType::Admin => "/admin/login",
            UserType::School => "/school/login",
            UserType::Parent => "/parent/login",
        }
    }

    /// Landing page after a successful login
    #[inline]
    pub const fn home_path(&self) -> &'static str {
        match self {
            UserType::Admin => "/admin",
            UserType::School => "/school",
            UserType::Parent => "/parent",
        }
    }
}
