use crate::{
    auth::{AuthService, LoginRequest, SignupRequest},
    error::AppError,
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;

/// Register a new user.
///
/// Rejects an already-registered email with `400 Email already in use`;
/// otherwise stores the account (password hashed) and confirms with a plain
/// message. No token is issued on signup; clients log in separately.
#[post("/signup")]
pub async fn signup(
    auth: web::Data<AuthService>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    auth.signup(&signup_data).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User registered successfully"
    })))
}

/// Log a user in.
///
/// On success returns the issued token and the user's id. Any failure —
/// unknown email or wrong password — answers `400 Invalid email or
/// password`, with no hint as to which it was.
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let response = auth.login(&login_data).await?;

    Ok(HttpResponse::Ok().json(response))
}
