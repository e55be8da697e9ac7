//! Server configuration.

use std::fmt::Display;
use std::net::{SocketAddr, ToSocketAddrs};
use std::str::FromStr;

use crate::error::SystemError;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 4000;

/// Default bearer token lifetime, in seconds.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// Configuration for the Marklee server.
///
/// Use the builder pattern to customize it, or [`ServerConfig::from_env`]
/// to read the `MARKLEE_*` variables.
///
/// # Example
///
/// ```
/// use marklee::startup::ServerConfig;
///
/// let config = ServerConfig::default()
///     .with_port(8080)
///     .with_admin_email("root@example.com");
/// assert_eq!(config.port, 8080);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind (0 picks a free port)
    pub port: u16,
    /// Email of the seed admin account
    pub admin_email: String,
    /// Username of the seed admin account
    pub admin_username: String,
    /// Password of the seed admin account
    pub admin_password: String,
    /// Allowed CORS origin; `None` allows any origin
    pub cors_origin: Option<String>,
    /// How long a bearer token stays valid after login
    pub token_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            admin_email: "admin@marklee.local".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            cors_origin: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_admin_email(mut self, email: impl Into<String>) -> Self {
        self.admin_email = email.into();
        self
    }

    pub fn with_admin_username(mut self, username: impl Into<String>) -> Self {
        self.admin_username = username.into();
        self
    }

    pub fn with_admin_password(mut self, password: impl Into<String>) -> Self {
        self.admin_password = password.into();
        self
    }

    pub fn with_cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = Some(origin.into());
        self
    }

    pub fn with_token_ttl_secs(mut self, secs: u64) -> Self {
        self.token_ttl_secs = secs;
        self
    }

    /// Build a config from `MARKLEE_*` environment variables.
    ///
    /// Unset variables keep their defaults. Unparseable values are logged
    /// and ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("MARKLEE_HOST", defaults.host),
            port: parse_env_or("MARKLEE_PORT", defaults.port),
            admin_email: env_or("MARKLEE_ADMIN_EMAIL", defaults.admin_email),
            admin_username: env_or("MARKLEE_ADMIN_USERNAME", defaults.admin_username),
            admin_password: env_or("MARKLEE_ADMIN_PASSWORD", defaults.admin_password),
            cors_origin: std::env::var("MARKLEE_CORS_ORIGIN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            token_ttl_secs: parse_env_or("MARKLEE_TOKEN_TTL_SECS", defaults.token_ttl_secs),
        }
    }

    /// The socket address to bind.
    ///
    /// `host` may be an IPv4 or IPv6 literal (brackets optional) or a name
    /// such as `localhost`, which is resolved and the first address used.
    pub fn bind_addr(&self) -> Result<SocketAddr, SystemError> {
        let host = self.host.trim().trim_start_matches('[').trim_end_matches(']');
        let invalid = |message: String| SystemError::EnvironmentError {
            variable: "MARKLEE_HOST".to_string(),
            message: format!("invalid bind address '{}': {}", self.host, message),
        };

        (host, self.port)
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("no addresses resolved".to_string()))
    }
}

fn env_or(key: &str, default: String) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default,
    }
}

fn parse_env_or<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!("Invalid {key} value '{raw}': {e}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}
