//! Runtime configuration read from environment variables.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite:pets.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PET_DATABASE_URL`
    pub database_url: String,
    /// `PET_BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `PET_DB_MAX_CONNECTIONS`
    pub max_connections: u32,
    /// `PET_ALLOWED_ORIGIN`, the single origin the CORS layer admits
    pub allowed_origin: HeaderValue,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("PET_DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = lookup("PET_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("PET_BIND_ADDR is not a socket address: {}", bind_addr))?;

        let max_connections = match lookup("PET_DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| {
                    format!("PET_DB_MAX_CONNECTIONS must be a positive integer: {}", raw)
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let allowed_origin =
            lookup("PET_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin = allowed_origin
            .parse::<HeaderValue>()
            .with_context(|| format!("PET_ALLOWED_ORIGIN is not a valid origin: {}", allowed_origin))?;

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            allowed_origin,
        })
    }
}
