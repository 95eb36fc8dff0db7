//! Server configuration, read once from the environment at startup.
//!
//!   LZ_BIND_ADDR          — listen address (default: 0.0.0.0:9443)
//!   LZ_RESPONSE_TTL_SECS  — TTL reported on every response (default: 60)

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use landing_zone_core::response::DEFAULT_TTL;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9443";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub response_ttl: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("LZ_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("LZ_BIND_ADDR is not a socket address: {bind:?}"))?;

        let response_ttl = match lookup("LZ_RESPONSE_TTL_SECS") {
            Some(v) => {
                let secs = v
                    .parse::<u64>()
                    .with_context(|| format!("LZ_RESPONSE_TTL_SECS is not a number: {v:?}"))?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TTL,
        };

        Ok(Self {
            bind_addr,
            response_ttl,
        })
    }
}
