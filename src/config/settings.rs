//! Application settings loaded from environment variables.
//!
//! Loaded once at startup and treated as immutable afterwards; no
//! component reads the environment per request.

use std::env;

use super::constants::{
    DEFAULT_COOKIE_TTL_DAYS, DEFAULT_DATABASE_URL, DEFAULT_MEDIA_BASE_URL, DEFAULT_MEDIA_ROOT,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_TOKEN_TTL_DAYS, MIN_JWT_SECRET_LENGTH,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    /// Session token lifetime in days
    pub token_ttl_days: i64,
    /// Session cookie lifetime in days (independent of the token TTL)
    pub cookie_ttl_days: i64,
    /// Mark session cookies `Secure` (enable when serving over HTTPS)
    pub cookie_secure: bool,
    /// Directory uploaded media assets are written to
    pub media_root: String,
    /// URL prefix under which media assets are served
    pub media_base_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl_days", &self.token_ttl_days)
            .field("cookie_ttl_days", &self.cookie_ttl_days)
            .field("cookie_secure", &self.cookie_secure)
            .field("media_root", &self.media_root)
            .field("media_base_url", &self.media_base_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if JWT_SECRET is not set or is too short (security requirement).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                // Development mode: use default but warn
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                // Production mode: panic
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        // Validate JWT secret length
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            token_ttl_days: parse_days(env::var("TOKEN_TTL_DAYS").ok(), DEFAULT_TOKEN_TTL_DAYS),
            cookie_ttl_days: parse_days(env::var("COOKIE_TTL_DAYS").ok(), DEFAULT_COOKIE_TTL_DAYS),
            cookie_secure: env::var("COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            media_root: env::var("MEDIA_ROOT").unwrap_or_else(|_| DEFAULT_MEDIA_ROOT.to_string()),
            media_base_url: env::var("MEDIA_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MEDIA_BASE_URL.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Construct a config directly; used by tests to avoid touching the
    /// process environment.
    pub fn for_tests(jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: jwt_secret.into(),
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
            cookie_ttl_days: DEFAULT_COOKIE_TTL_DAYS,
            cookie_secure: false,
            media_root: DEFAULT_MEDIA_ROOT.to_string(),
            media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Parse a TTL in days, falling back to the default when the variable is
/// absent or non-numeric.
fn parse_days(value: Option<String>, default: i64) -> i64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_falls_back_when_absent() {
        assert_eq!(parse_days(None, DEFAULT_TOKEN_TTL_DAYS), 5);
    }

    #[test]
    fn ttl_falls_back_when_non_numeric() {
        assert_eq!(parse_days(Some("5d".to_string()), DEFAULT_TOKEN_TTL_DAYS), 5);
        assert_eq!(parse_days(Some("".to_string()), DEFAULT_COOKIE_TTL_DAYS), 5);
    }

    #[test]
    fn ttl_parses_numeric_values() {
        assert_eq!(parse_days(Some("14".to_string()), DEFAULT_TOKEN_TTL_DAYS), 14);
    }
}
