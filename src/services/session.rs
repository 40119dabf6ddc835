//! Session issuance - token claims, expiry policy, cookie transport.
//!
//! Shapes the signed claims and renders the cookie directive; signing
//! itself is delegated to the JWT primitive. TTLs come from the
//! startup config injected at construction, never from ad-hoc
//! environment reads.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{Config, SECONDS_PER_DAY, SESSION_COOKIE_NAME};
use crate::errors::AppResult;

/// Session token claims payload.
///
/// `id` carries the agent identifier, matching what callers present at
/// login, rather than the storage row id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// A freshly issued session: the signed token and its cookie directive.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub token: String,
    /// Full `Set-Cookie` value, e.g. `auth=...; Path=/; HttpOnly; ...`
    pub cookie: String,
}

/// Issues and verifies signed session tokens.
#[derive(Clone)]
pub struct SessionIssuer {
    secret: Vec<u8>,
    token_ttl_days: i64,
    cookie_ttl_days: i64,
    cookie_secure: bool,
}

impl SessionIssuer {
    pub fn new(config: &Config) -> Self {
        Self {
            secret: config.jwt_secret_bytes().to_vec(),
            token_ttl_days: config.token_ttl_days,
            cookie_ttl_days: config.cookie_ttl_days,
            cookie_secure: config.cookie_secure,
        }
    }

    /// Issue a session for an authenticated account.
    pub fn issue(&self, agent_id: &str, email: &str) -> AppResult<SessionToken> {
        let now = Utc::now();
        let expires_at = now + Duration::days(self.token_ttl_days);

        let claims = Claims {
            id: agent_id.to_string(),
            email: email.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )?;
        let cookie = self.cookie_directive(&token);

        Ok(SessionToken { token, cookie })
    }

    /// Verify a token and extract its claims.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Render the `Set-Cookie` value for a signed token. The cookie TTL
    /// is configured independently of the token TTL.
    fn cookie_directive(&self, token: &str) -> String {
        let max_age = self.cookie_ttl_days * SECONDS_PER_DAY;
        let mut cookie = format!(
            "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}"
        );
        if self.cookie_secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> SessionIssuer {
        SessionIssuer::new(&Config::for_tests("test-secret-key-for-testing-32ch!"))
    }

    #[test]
    fn issued_claims_round_trip() {
        let issuer = issuer();
        let session = issuer.issue("AG-1024", "agency@example.com").unwrap();

        let claims = issuer.verify(&session.token).unwrap();
        assert_eq!(claims.id, "AG-1024");
        assert_eq!(claims.email, "agency@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn cookie_directive_carries_name_and_max_age() {
        let session = issuer().issue("AG-1024", "agency@example.com").unwrap();

        assert!(session.cookie.starts_with("auth="));
        assert!(session.cookie.contains("HttpOnly"));
        // 5 day default cookie TTL
        assert!(session.cookie.contains("Max-Age=432000"));
        assert!(!session.cookie.contains("Secure"));
    }

    #[test]
    fn secure_flag_follows_config() {
        let mut config = Config::for_tests("test-secret-key-for-testing-32ch!");
        config.cookie_secure = true;

        let session = SessionIssuer::new(&config)
            .issue("AG-1024", "agency@example.com")
            .unwrap();
        assert!(session.cookie.ends_with("; Secure"));
    }

    #[test]
    fn foreign_signature_is_rejected() {
        let session = issuer().issue("AG-1024", "agency@example.com").unwrap();

        let other =
            SessionIssuer::new(&Config::for_tests("another-secret-key-32-chars-long!"));
        assert!(other.verify(&session.token).is_err());
    }
}
