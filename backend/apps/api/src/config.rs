//! Server Configuration
//!
//! Everything the binary reads from the environment (after `.env`).

use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use booking::BookingConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub booking: BookingConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR is not a socket address")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("DATABASE_MAX_CONNECTIONS is not a number")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = parse_origins(
            &lookup("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let mut auth = if cfg!(debug_assertions) {
            AuthConfig::development()
        } else {
            AuthConfig::default()
        };
        if let Some(raw) = lookup("COOKIE_SECURE") {
            auth.cookie_secure = parse_bool(&raw).context("COOKIE_SECURE must be true or false")?;
        }
        match lookup("SESSION_SECRET") {
            // per-process key: sessions do not survive a restart
            Some(raw) if raw.trim() == "random" => auth = auth.with_random_secret(),
            Some(raw) => auth.session_secret = Some(parse_secret(&raw)?),
            None => {}
        }
        if let Some(username) = lookup("BOOTSTRAP_ADMIN_USERNAME") {
            auth.bootstrap_admin_username = username;
        }
        if let Some(password) = lookup("BOOTSTRAP_ADMIN_PASSWORD") {
            auth.bootstrap_admin_password = password;
        }

        let mut booking = BookingConfig::default();
        if let Some(raw) = lookup("MAX_UPLOAD_BYTES") {
            let bytes = raw
                .trim()
                .parse()
                .context("MAX_UPLOAD_BYTES is not a number")?;
            booking = booking.with_max_upload_bytes(bytes);
        }

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            frontend_origins,
            auth,
            booking,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Base64 of exactly 32 bytes
fn parse_secret(raw: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = platform::crypto::from_base64(raw.trim()).context("SESSION_SECRET is not valid base64")?;
    if bytes.len() != 32 {
        bail!("SESSION_SECRET must decode to 32 bytes, got {}", bytes.len());
    }

    let mut secret = [0u8; 32];
    secret.copy_from_slice(&bytes);
    Ok(secret)
}
