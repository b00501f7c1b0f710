use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::Claims;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(String),
}

/// Validates a bearer token into [`Claims`].
///
/// Trait so the HTTP layer does not care which algorithm or key source is in
/// use (tests and deployments can differ).
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str) -> Result<Claims, TokenError>;
}

/// HS256 (shared-secret) token validation.
pub struct Hs256TokenValidator {
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256TokenValidator {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl TokenValidator for Hs256TokenValidator {
    fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use jsonwebtoken::{EncodingKey, Header};

    fn mint(secret: &str, iat: i64, exp: i64) -> String {
        let claims = Claims {
            sub: "ada".to_string(),
            roles: vec![Role::customer()],
            iat,
            exp,
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    #[test]
    fn round_trips_valid_token() {
        let validator = Hs256TokenValidator::new(b"secret");
        let token = mint("secret", now(), now() + 600);

        let claims = validator.validate(&token).unwrap();
        assert_eq!(claims.sub, "ada");
        assert_eq!(claims.roles, vec![Role::customer()]);
    }

    #[test]
    fn rejects_wrong_secret() {
        let validator = Hs256TokenValidator::new(b"secret");
        let token = mint("other-secret", now(), now() + 600);

        assert!(matches!(
            validator.validate(&token),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let validator = Hs256TokenValidator::new(b"secret");
        let token = mint("secret", now() - 1200, now() - 600);

        assert!(matches!(validator.validate(&token), Err(TokenError::Expired)));
    }
}
