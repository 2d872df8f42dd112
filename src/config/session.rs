use std::env;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha512};
use time::Duration;
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    Expiry, SessionManagerLayer,
};
use tower_sessions_sqlx_store::SqliteStore;
use tracing::warn;

/// Convenience alias for the signed session layer produced by `SessionConfig`.
pub type SessionLayer = SessionManagerLayer<SqliteStore, SignedCookie>;

pub const SESSION_TABLE: &str = "sessions";
const DEFAULT_TTL_HOURS: i64 = 24 * 7;
const MIN_PRODUCTION_SECRET_LEN: usize = 64;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SECRET_KEY must be set in production")]
    MissingSecret,
    #[error("SECRET_KEY must be at least 64 bytes in production")]
    SecretTooShort,
    #[error("SECRET_KEY appears to be a placeholder value")]
    PlaceholderSecret,
    #[error("SESSION_COOKIE_SECURE cannot be disabled in production")]
    InsecureCookie,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub expiry: Duration,
    pub name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        // Cross-site capable: the dashboard frontend is served from another origin.
        SessionConfig {
            secure: true,
            http_only: true,
            same_site: SameSite::None,
            expiry: Duration::hours(DEFAULT_TTL_HOURS),
            name: "session".to_string(),
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let mut config = SessionConfig::default();

        // Browsers drop `SameSite=None` cookies that are not `Secure`.
        if !env_flag(env::var("SESSION_COOKIE_SECURE").ok().as_deref(), true) {
            config.secure = false;
            config.same_site = SameSite::Lax;
        }

        if let Some(hours) = env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|h| *h > 0)
        {
            config.expiry = Duration::hours(hours);
        }

        config
    }

    pub fn create_layer(&self, store: SqliteStore) -> SessionLayer {
        let key = load_session_key();

        SessionManagerLayer::new(store)
            .with_secure(self.secure)
            .with_http_only(self.http_only)
            .with_same_site(self.same_site)
            .with_name(self.name.clone())
            .with_expiry(Expiry::OnInactivity(self.expiry))
            .with_signed(key)
    }
}

pub fn validate_production_config() -> Result<(), ConfigError> {
    if !is_production() {
        return Ok(());
    }

    if !env_flag(env::var("SESSION_COOKIE_SECURE").ok().as_deref(), true) {
        return Err(ConfigError::InsecureCookie);
    }

    let secret = env::var("SECRET_KEY")
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingSecret)?;

    if decode_secret_bytes(&secret).len() < MIN_PRODUCTION_SECRET_LEN {
        return Err(ConfigError::SecretTooShort);
    }

    let lowered = secret.to_ascii_lowercase();
    if lowered.contains("example") || lowered.contains("changeme") || lowered.contains("default") {
        return Err(ConfigError::PlaceholderSecret);
    }

    Ok(())
}

pub fn is_production() -> bool {
    env::var("ENVIRONMENT")
        .map(|e| e == "production")
        .unwrap_or(false)
}

fn env_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(v) => matches!(v, "1" | "true" | "TRUE" | "True"),
        None => default,
    }
}

fn load_session_key() -> Key {
    match env::var("SECRET_KEY") {
        Ok(secret) if !secret.is_empty() => {
            let bytes = decode_secret_bytes(&secret);
            key_from_secret_bytes(&bytes)
        }
        _ => {
            warn!("SECRET_KEY not set; generating ephemeral session key (development only)");
            Key::generate()
        }
    }
}

fn decode_secret_bytes(secret: &str) -> Vec<u8> {
    STANDARD
        .decode(secret.as_bytes())
        .unwrap_or_else(|_| secret.as_bytes().to_vec())
}

fn key_from_secret_bytes(bytes: &[u8]) -> Key {
    if bytes.len() >= 64 {
        Key::from(&bytes[..64])
    } else {
        let digest = Sha512::digest(bytes);
        Key::from(digest.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_flag() {
        assert!(env_flag(None, true));
        assert!(!env_flag(None, false));
        assert!(env_flag(Some("1"), false));
        assert!(env_flag(Some("true"), false));
        assert!(!env_flag(Some("false"), true));
        assert!(!env_flag(Some("0"), true));
    }

    #[test]
    fn test_short_secret_is_stretched() {
        let a = key_from_secret_bytes(b"short");
        let b = key_from_secret_bytes(b"short");
        assert_eq!(a.master(), b.master());
        assert_eq!(a.master().len(), 64);
    }

    #[test]
    fn test_defaults_are_cross_site_and_secure() {
        let config = SessionConfig::default();
        assert!(config.secure);
        assert!(config.http_only);
        assert_eq!(config.same_site, SameSite::None);
        assert_eq!(config.expiry, Duration::hours(168));
    }
}
