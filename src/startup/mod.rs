//! Process startup: configuration and logging.
//!
//! - [`config`] - [`ServerConfig`] with builder setters and `MARKLEE_*` env loading
//! - [`logging`] - `tracing` subscriber with an env filter

pub mod config;
pub mod logging;

pub use config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TOKEN_TTL_SECS};
pub use logging::{init_logging, DEFAULT_LOG_FILTER};
