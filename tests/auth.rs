use actix_web::middleware::Logger;
use actix_web::{test, web, App};
use dotenv::dotenv;
use serde_json::json;
use sqlx::PgPool;

use tasktracker::auth::{AuthResponse, AuthService, PasswordHasher, TokenIssuer};
use tasktracker::routes;
use tasktracker::store::{TaskStore, UserStore};
use tasktracker::tasks::TaskService;

const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Connects to the test database, or returns `None` (skipping the test)
/// when `DATABASE_URL` is not configured.
async fn test_pool() -> Option<PgPool> {
    dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set; skipping integration test");
            return None;
        }
    };
    Some(
        PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to test DB"),
    )
}

fn services(pool: &PgPool) -> (web::Data<AuthService>, web::Data<TaskService>) {
    let users = UserStore::new(pool.clone());
    let tasks = TaskStore::new(pool.clone());
    let auth = AuthService::new(
        users.clone(),
        PasswordHasher::new(4), // minimum bcrypt cost, keeps tests fast
        TokenIssuer::new(TEST_JWT_SECRET.to_string()),
    );
    (
        web::Data::new(auth),
        web::Data::new(TaskService::new(users, tasks)),
    )
}

async fn remove_user(pool: &PgPool, email: &str) {
    let _ = sqlx::query(
        "DELETE FROM tasks WHERE user_id IN (SELECT id FROM users WHERE email = $1)",
    )
    .bind(email)
    .execute(pool)
    .await;
    let _ = sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(email)
        .execute(pool)
        .await;
}

#[actix_rt::test]
async fn test_signup_and_login_flow() {
    let Some(pool) = test_pool().await else { return };
    let email = "signup_flow@example.com";
    remove_user(&pool, email).await;

    let (auth, tasks) = services(&pool);
    let app = test::init_service(
        App::new()
            .app_data(auth)
            .app_data(tasks)
            .wrap(Logger::default())
            .service(web::scope("/api").configure(routes::config)),
    )
    .await;

    // Sign up a new user
    let signup_payload = json!({
        "username": "signup_flow_user",
        "email": email,
        "password": "Password123!"
    });
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(&signup_payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_eq!(
        status,
        actix_web::http::StatusCode::OK,
        "Signup failed. Body: {:?}",
        String::from_utf8_lossy(&body)
    );
    let json_body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json_body["message"], "User registered successfully");

    // A second signup with the same email fails, even under another username
    let conflict_payload = json!({
        "username": "entirely_different_name",
        "email": email,
        "password": "OtherPassword456!"
    });
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(&conflict_payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_eq!(
        status,
        actix_web::http::StatusCode::BAD_REQUEST,
        "Duplicate signup did not fail. Body: {:?}",
        String::from_utf8_lossy(&body)
    );
    let json_body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json_body["message"], "Email already in use");

    // Login with the registered credentials
    let login_payload = json!({
        "email": email,
        "password": "Password123!"
    });
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(&login_payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_eq!(
        status,
        actix_web::http::StatusCode::OK,
        "Login failed. Body: {:?}",
        String::from_utf8_lossy(&body)
    );

    let login_response: AuthResponse =
        serde_json::from_slice(&body).expect("Failed to parse login response JSON");
    assert!(!login_response.token.is_empty());
    assert!(login_response.user_id > 0);

    // The token is bound to the email it was issued for
    let claims = TokenIssuer::new(TEST_JWT_SECRET.to_string())
        .verify(&login_response.token)
        .expect("issued token should verify");
    assert_eq!(claims.sub, email);

    remove_user(&pool, email).await;
}

#[actix_rt::test]
async fn test_login_failures_are_indistinguishable() {
    let Some(pool) = test_pool().await else { return };
    let email = "login_failures@example.com";
    remove_user(&pool, email).await;

    let (auth, tasks) = services(&pool);
    let app = test::init_service(
        App::new()
            .app_data(auth)
            .app_data(tasks)
            .wrap(Logger::default())
            .service(web::scope("/api").configure(routes::config)),
    )
    .await;

    let signup_payload = json!({
        "username": "login_failures_user",
        "email": email,
        "password": "Password123!"
    });
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(&signup_payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success(), "Setup: signup failed");

    // Wrong password for a known email
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": email, "password": "WrongPassword!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let wrong_password_status = resp.status();
    let wrong_password_body = test::read_body(resp).await;

    // Login for an email that was never signed up
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "nobody@example.com", "password": "Password123!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let unknown_email_status = resp.status();
    let unknown_email_body = test::read_body(resp).await;

    // Both failures answer identically, so callers cannot probe which
    // emails are registered.
    assert_eq!(wrong_password_status, actix_web::http::StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email_status, wrong_password_status);
    assert_eq!(wrong_password_body, unknown_email_body);

    let json_body: serde_json::Value = serde_json::from_slice(&wrong_password_body).unwrap();
    assert_eq!(json_body["message"], "Invalid email or password");

    remove_user(&pool, email).await;
}
