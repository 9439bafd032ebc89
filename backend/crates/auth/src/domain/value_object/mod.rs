//! Value Objects

pub mod access_code;
pub mod tc_no;
pub mod user_type;

pub use access_code::AccessCode;
pub use tc_no::TcNo;
pub use user_type::UserType;
