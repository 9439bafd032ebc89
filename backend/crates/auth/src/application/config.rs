//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::domain::value_object::UserType;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Client-readable cookie flagging an admin login
    pub admin_flag_cookie_name: String,
    /// Admin session lifetime (1 day)
    pub admin_session_ttl: Duration,
    /// School and parent session lifetime (7 days)
    pub member_session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// When set, session cookies are HMAC-signed with this key
    pub session_secret: Option<[u8; 32]>,
    /// Credentials that may create the very first admin account
    pub bootstrap_admin_username: String,
    pub bootstrap_admin_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session_token".to_string(),
            admin_flag_cookie_name: "isLoggedIn".to_string(),
            admin_session_ttl: Duration::from_secs(24 * 3600), // 1 day
            member_session_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            session_secret: None,
            bootstrap_admin_username: "admin".to_string(),
            bootstrap_admin_password: "admin123".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Sign sessions with a fresh random key (sessions die with the process)
    pub fn with_random_secret(self) -> Self {
        Self {
            session_secret: Some(platform::crypto::random_key()),
            ..self
        }
    }

    pub fn session_ttl(&self, user_type: UserType) -> Duration {
        match user_type {
            UserType::Admin => self.admin_session_ttl,
            UserType::School | UserType::Parent => self.member_session_ttl,
        }
    }

    /// Session cookie for a login of the given role
    pub fn session_cookie(&self, user_type: UserType) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl(user_type).as_secs() as i64),
        }
    }

    /// `isLoggedIn=true`, readable by client scripts, same lifetime as the admin session
    pub fn admin_flag_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.admin_flag_cookie_name.clone(),
            http_only: false,
            ..self.session_cookie(UserType::Admin)
        }
    }

    pub fn is_bootstrap_pair(&self, username: &str, password: &str) -> bool {
        username == self.bootstrap_admin_username && password == self.bootstrap_admin_password
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("admin_session_ttl", &self.admin_session_ttl)
            .field("member_session_ttl", &self.member_session_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .field("signed_sessions", &self.session_secret.is_some())
            .field("bootstrap_admin_username", &self.bootstrap_admin_username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_per_role() {
        let config = AuthConfig::default();
        assert_eq!(config.session_ttl(UserType::Admin).as_secs(), 86_400);
        assert_eq!(config.session_ttl(UserType::School).as_secs(), 604_800);
        assert_eq!(config.session_ttl(UserType::Parent).as_secs(), 604_800);
    }

    #[test]
    fn test_cookies() {
        let config = AuthConfig::development();
        let session = config.session_cookie(UserType::Parent);
        assert_eq!(session.name, "session_token");
        assert!(session.http_only);
        assert!(!session.secure);
        assert_eq!(session.max_age_secs, Some(604_800));

        let flag = config.admin_flag_cookie();
        assert_eq!(flag.name, "isLoggedIn");
        assert!(!flag.http_only);
        assert_eq!(flag.max_age_secs, Some(86_400));
    }

    #[test]
    fn test_bootstrap_pair() {
        let config = AuthConfig::default();
        assert!(config.is_bootstrap_pair("admin", "admin123"));
        assert!(!config.is_bootstrap_pair("admin", "admin1234"));
        assert!(!config.is_bootstrap_pair("root", "admin123"));
    }
}
