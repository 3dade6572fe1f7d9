//! Persistence layer: key-based lookup and save operations over Postgres.
//!
//! The stores are deliberately thin. They run single-row statements with
//! bound parameters and report raw `sqlx::Error`s; classifying a miss as
//! `UserNotFound` vs `TaskNotFound` is the services' job.

pub mod tasks;
pub mod users;

pub use tasks::TaskStore;
pub use users::UserStore;
