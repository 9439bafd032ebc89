//! Domain Services

pub mod pricing;
