//! The `todo_api` library crate.
//!
//! Business logic, domain models, authentication, routing configuration, and
//! error handling for the todo API. The binary (`main.rs`) uses this crate to
//! construct and run the application.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
