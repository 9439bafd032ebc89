//! Infrastructure Layer
//!
//! PostgreSQL repository and the spreadsheet adapter.

#[cfg(test)]
pub(crate) mod memory;
pub mod postgres;
pub mod spreadsheet;
