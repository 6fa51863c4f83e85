//! Backend for the Gatehouse member portal.
//!
//! The only operation is user registration: hash the password, persist the
//! user, answer with a `{statusCode, data, message}` envelope. Validation and
//! uniqueness are owned by the database schema (see `migrations/`).

pub mod app;
pub mod auth;
pub mod config;
pub mod response;
pub mod state;
