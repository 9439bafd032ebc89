//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie building and extraction (session + flag cookies)
//! - Cryptographic helpers (HMAC-SHA256, constant-time compare, Base64)

pub mod cookie;
pub mod crypto;
