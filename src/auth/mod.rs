pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::store::UserStore;

pub use password::PasswordHasher;
pub use token::{Claims, TokenIssuer};

/// Payload for a new account signup.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Payload for a login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to a successful login: the issued token plus the id of the
/// authenticated user.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Orchestrates signup and login against the user store.
///
/// All collaborators are injected at construction; the service holds no
/// other state and a successful login persists nothing.
pub struct AuthService {
    users: UserStore,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(users: UserStore, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Registers a new user: rejects an already-registered email, hashes
    /// the password, and stores the record. Nothing sensitive is returned.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), AppError> {
        if self.users.email_exists(&request.email).await? {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = self.hasher.hash(&request.password)?;
        self.users
            .insert(&request.username, &request.email, &password_hash)
            .await?;

        Ok(())
    }

    /// Authenticates by email and password and issues a token bound to the
    /// user's email. An unknown email and a wrong password produce the same
    /// `InvalidCredentials` error, so callers cannot probe which emails are
    /// registered.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        let user = self.users.find_by_email(&request.email).await?;

        match user {
            Some(user) => {
                if self.hasher.verify(&request.password, &user.password_hash)? {
                    let token = self.tokens.issue(&user.email)?;
                    Ok(AuthResponse {
                        token,
                        user_id: user.id,
                    })
                } else {
                    Err(AppError::InvalidCredentials)
                }
            }
            None => Err(AppError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_wire_shape() {
        let response = AuthResponse {
            token: "abc.def.ghi".to_string(),
            user_id: 42,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token"], "abc.def.ghi");
        assert_eq!(json["userId"], 42);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_signup_request_deserialization() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"username": "u1", "email": "u1@x.com", "password": "pw"}"#,
        )
        .unwrap();
        assert_eq!(request.username, "u1");
        assert_eq!(request.email, "u1@x.com");
        assert_eq!(request.password, "pw");
    }
}
