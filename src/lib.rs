//! Marklee - role-guarded admin console backend
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod auth;
pub mod cli;
pub mod client;
pub mod domain;
pub mod error;
pub mod models;
pub mod prelude;
pub mod server;
pub mod startup;
pub mod traits;
