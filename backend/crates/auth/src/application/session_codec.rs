//! Session Codec
//!
//! Turns a [`Session`] into a cookie value and back.
//!
//! Value format: URL-safe base64 (no padding) of the JSON record. With a
//! secret configured the value becomes `payload.signature`, the signature
//! being HMAC-SHA256 over the payload text. Decoding never fails loudly:
//! anything unreadable is "no session".

use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};

use crate::application::config::AuthConfig;
use crate::domain::entity::Session;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct SessionCodec {
    secret: Option<[u8; 32]>,
}

impl SessionCodec {
    /// Plain codec; the record is readable and forgeable by the client
    pub fn unsigned() -> Self {
        Self { secret: None }
    }

    pub fn signed(secret: [u8; 32]) -> Self {
        Self {
            secret: Some(secret),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            secret: config.session_secret,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.secret.is_some()
    }

    pub fn encode(&self, session: &Session) -> AuthResult<String> {
        let json = serde_json::to_vec(session)
            .map_err(|e| AuthError::Internal(format!("session serialization failed: {e}")))?;
        let payload = to_base64_url(&json);

        Ok(match &self.secret {
            Some(secret) => {
                let signature = hmac_sha256(secret, payload.as_bytes());
                format!("{}.{}", payload, to_base64_url(&signature))
            }
            None => payload,
        })
    }

    pub fn decode(&self, raw: &str) -> Option<Session> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let payload = match &self.secret {
            Some(secret) => {
                let (payload, signature) = raw.split_once('.')?;
                let signature = from_base64_url(signature).ok()?;
                if !verify_hmac_sha256(secret, payload.as_bytes(), &signature) {
                    tracing::warn!("Session cookie signature mismatch");
                    return None;
                }
                payload
            }
            None => raw,
        };

        let json = from_base64_url(payload).ok()?;
        match serde_json::from_slice::<Session>(&json) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable session cookie");
                None
            }
        }
    }
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("signed", &self.is_signed())
            .finish()
    }
}
