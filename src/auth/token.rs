use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims encoded within an issued token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the email of the user it was issued to.
    pub sub: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Issues and verifies signed tokens bound to a user's email.
///
/// The signing secret is injected at construction time, so issuance and
/// verification never touch the environment.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    ttl: chrono::Duration,
}

impl TokenIssuer {
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            ttl: chrono::Duration::hours(24),
        }
    }

    /// Issues an HS256 token whose subject is the given email, expiring
    /// after the configured TTL.
    pub fn issue(&self, email: &str) -> Result<String, AppError> {
        let expiration = chrono::Utc::now()
            .checked_add_signed(self.ttl)
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            sub: email.to_string(),
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("failed to issue token: {}", e)))
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// No route currently gates on this; it exists for callers that hold a
    /// token from `login` and want the identity it is bound to.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_issue_and_verify() {
        let issuer = TokenIssuer::new("test_secret_for_issue_verify".to_string());
        let token = issuer.issue("user@example.com").unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, "user@example.com");
        assert!(claims.exp > chrono::Utc::now().timestamp() as usize);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let secret = "test_secret_for_expiration";
        let issuer = TokenIssuer::new(secret.to_string());

        let expired = Claims {
            sub: "user@example.com".to_string(),
            exp: chrono::Utc::now()
                .checked_sub_signed(chrono::Duration::hours(2))
                .expect("valid timestamp")
                .timestamp() as usize,
        };
        let expired_token = encode(
            &Header::default(),
            &expired,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        match issuer.verify(&expired_token) {
            Err(AppError::InvalidToken(msg)) => {
                assert!(msg.contains("ExpiredSignature"), "unexpected: {}", msg);
            }
            Ok(_) => panic!("expired token must not verify"),
            Err(e) => panic!("unexpected error type: {:?}", e),
        }
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = TokenIssuer::new("secret_one".to_string());
        let other = TokenIssuer::new("secret_two".to_string());

        let token = issuer.issue("user@example.com").unwrap();

        match other.verify(&token) {
            Err(AppError::InvalidToken(msg)) => {
                assert!(
                    msg.contains("InvalidSignature") || msg.contains("InvalidToken"),
                    "unexpected: {}",
                    msg
                );
            }
            Ok(_) => panic!("token must not verify under a different secret"),
            Err(e) => panic!("unexpected error type: {:?}", e),
        }
    }
}
