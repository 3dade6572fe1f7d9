//! The `tasktracker` library crate.
//!
//! Contains the domain models, persistence stores, authentication and task
//! services, routing configuration, and error handling for the TaskTracker
//! backend. The binary (`main.rs`) wires these together and runs the server.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod tasks;
