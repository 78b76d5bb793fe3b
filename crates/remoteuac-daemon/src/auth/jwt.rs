//! JWT credential issuance and verification.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};

use super::claims::{ADMIN_SUBJECT, CAP_ADMIN, Claims};

/// Default credential lifetime: 60 minutes.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Manages credential creation and verification against the process-wide
/// signing secret.
///
/// Stateless apart from the fixed secret: verification is a deterministic
/// computation with no I/O, safe for unlimited concurrent use.
#[derive(Clone)]
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    default_ttl_secs: i64,
}

impl TokenManager {
    /// Create a new `TokenManager` with the given secret.
    pub fn new(secret: &[u8], default_ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            default_ttl_secs,
        }
    }

    /// Issue a signed credential for `subject` with the given capabilities.
    ///
    /// `ttl_secs` falls back to the manager default when `None`. Returns the
    /// encoded token and its absolute expiry (unix seconds).
    pub fn issue(
        &self,
        subject: &str,
        capabilities: &[&str],
        ttl_secs: Option<i64>,
    ) -> Result<(String, i64), jsonwebtoken::errors::Error> {
        let now = now_secs();
        let exp = now + ttl_secs.unwrap_or(self.default_ttl_secs);

        let claims = Claims {
            jti: uuid::Uuid::new_v4().to_string(),
            sub: subject.to_string(),
            capabilities: capabilities.iter().map(ToString::to_string).collect(),
            iat: now,
            exp,
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok((token, exp))
    }

    /// Issue an administrator credential.
    pub fn issue_admin(
        &self,
        ttl_secs: Option<i64>,
    ) -> Result<(String, i64), jsonwebtoken::errors::Error> {
        self.issue(ADMIN_SUBJECT, &[CAP_ADMIN], ttl_secs)
    }

    /// Validate a token's signature and expiry and return its claims.
    ///
    /// Expiry is a hard cutoff: a credential is invalid from its expiry
    /// instant onward, with no clock-skew allowance.
    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }

    /// Decide whether a presented credential authorizes administrator
    /// operations.
    ///
    /// Accepts an optional leading "Bearer " scheme marker. Every failure
    /// mode (malformed, bad signature, expired, missing capability)
    /// collapses to `false`; callers learn nothing about which one applied.
    pub fn authorize_admin(&self, credential: &str) -> bool {
        let token = credential
            .strip_prefix("Bearer ")
            .unwrap_or(credential)
            .trim();
        if token.is_empty() {
            return false;
        }
        self.validate(token).is_ok_and(|claims| claims.is_admin())
    }
}

fn now_secs() -> i64 {
    #[allow(clippy::cast_possible_wrap)]
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    secs
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_tokens() -> TokenManager {
        TokenManager::new(b"test-secret-key-for-testing", DEFAULT_TOKEN_TTL_SECS)
    }

    #[test]
    fn issue_and_validate_admin_credential() {
        let tokens = test_tokens();
        let (token, exp) = tokens.issue_admin(None).unwrap();

        let claims = tokens.validate(&token).unwrap();
        assert_eq!(claims.sub, ADMIN_SUBJECT);
        assert!(claims.is_admin());
        assert_eq!(claims.exp, exp);
        assert!(exp > now_secs());
    }

    #[test]
    fn admin_credential_authorizes() {
        let tokens = test_tokens();
        let (token, _) = tokens.issue_admin(None).unwrap();
        assert!(tokens.authorize_admin(&token));
    }

    #[test]
    fn bearer_prefix_is_stripped() {
        let tokens = test_tokens();
        let (token, _) = tokens.issue_admin(None).unwrap();
        assert!(tokens.authorize_admin(&format!("Bearer {token}")));
    }

    #[test]
    fn garbage_and_empty_credentials_fail() {
        let tokens = test_tokens();
        assert!(!tokens.authorize_admin(""));
        assert!(!tokens.authorize_admin("Bearer "));
        assert!(!tokens.authorize_admin("garbage"));
        assert!(!tokens.authorize_admin("Bearer not.a.jwt"));
    }

    #[test]
    fn expired_credential_fails() {
        let tokens = test_tokens();
        let (token, _) = tokens.issue_admin(Some(-7200)).unwrap();
        assert!(tokens.validate(&token).is_err());
        assert!(!tokens.authorize_admin(&token));
    }

    #[test]
    fn just_expired_credential_fails() {
        let tokens = test_tokens();
        // Expiry is a hard cutoff: even seconds past it must not verify.
        let (token, _) = tokens.issue_admin(Some(-30)).unwrap();
        assert!(tokens.validate(&token).is_err());
        assert!(!tokens.authorize_admin(&token));
    }

    #[test]
    fn wrong_secret_fails() {
        let tokens = test_tokens();
        let other = TokenManager::new(b"different-secret", DEFAULT_TOKEN_TTL_SECS);

        let (token, _) = other.issue_admin(None).unwrap();
        assert!(tokens.validate(&token).is_err());
        assert!(!tokens.authorize_admin(&token));
    }

    #[test]
    fn credential_without_admin_capability_fails() {
        let tokens = test_tokens();
        let (token, _) = tokens.issue("some_device", &[], None).unwrap();

        // Valid signature, valid expiry, wrong principal.
        assert!(tokens.validate(&token).is_ok());
        assert!(!tokens.authorize_admin(&token));
    }

    #[test]
    fn ttl_override_is_honored() {
        let tokens = test_tokens();
        let (_, exp) = tokens.issue_admin(Some(60)).unwrap();
        assert!(exp <= now_secs() + 60);
    }
}
