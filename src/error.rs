//!
//! # Error Handling
//!
//! This module defines the error type `AppError` used throughout the
//! application. Each variant corresponds to one failure the API can report:
//! the domain errors raised by the auth and task services, plus catch-all
//! variants for storage and runtime faults.
//!
//! `AppError` implements `actix_web::error::ResponseError`, so handlers can
//! return `Result<_, AppError>` and have failures rendered as JSON bodies of
//! the form `{"message": ...}` with the matching status code. `From`
//! implementations for `sqlx::Error`, `bcrypt::BcryptError`, and
//! `jsonwebtoken::errors::Error` keep `?` usable across the services.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Signup attempted with an email that is already registered (HTTP 400).
    DuplicateEmail,
    /// Login failed. Covers both an unknown email and a wrong password; the
    /// two are deliberately indistinguishable to the caller (HTTP 400).
    InvalidCredentials,
    /// A task operation referenced a user id that does not exist (HTTP 404).
    UserNotFound,
    /// A task operation referenced a task id that does not exist (HTTP 404).
    TaskNotFound,
    /// A presented token failed signature or expiry checks (HTTP 401).
    InvalidToken(String),
    /// An error from the storage layer (HTTP 500).
    Database(String),
    /// Any other unexpected server-side fault, e.g. hashing or token
    /// issuance failing (HTTP 500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::DuplicateEmail => write!(f, "Email already in use"),
            AppError::InvalidCredentials => write!(f, "Invalid email or password"),
            AppError::UserNotFound => write!(f, "User not found"),
            AppError::TaskNotFound => write!(f, "Task not found"),
            AppError::InvalidToken(msg) => write!(f, "{}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateEmail | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::UserNotFound | AppError::TaskNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::DuplicateEmail => "Email already in use".to_string(),
            AppError::InvalidCredentials => "Invalid email or password".to_string(),
            AppError::UserNotFound => "User not found".to_string(),
            AppError::TaskNotFound => "Task not found".to_string(),
            AppError::InvalidToken(msg) => msg.clone(),
            // Storage and runtime faults are logged with their detail but
            // reported to the client generically.
            AppError::Database(msg) => {
                log::error!("database error: {}", msg);
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                log::error!("internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        AppError::Database(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(format!("password hashing failed: {}", error))
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::InvalidToken(format!("Invalid token: {}", error))
    }
}
