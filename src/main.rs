use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;

use tasktracker::auth::{AuthService, PasswordHasher, TokenIssuer};
use tasktracker::config::Config;
use tasktracker::routes;
use tasktracker::store::{TaskStore, UserStore};
use tasktracker::tasks::TaskService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    // All dependencies are wired here and handed to the services explicitly;
    // handlers receive the services through `web::Data`.
    let users = UserStore::new(pool.clone());
    let tasks = TaskStore::new(pool);

    let auth_service = web::Data::new(AuthService::new(
        users.clone(),
        PasswordHasher::default(),
        TokenIssuer::new(config.jwt_secret.clone()),
    ));
    let task_service = web::Data::new(TaskService::new(users, tasks));

    log::info!("Starting TaskTracker server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(auth_service.clone())
            .app_data(task_service.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(web::scope("/api").configure(routes::config))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
