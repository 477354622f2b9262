//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ServerError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let bind_addr = parse_bind_addr(std::env::var("BIND_ADDR").ok().as_deref())?;
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.parse::<u16>().map_err(|_| ServerError::InvalidEnv { var: "PORT", value: v.to_owned() }),
    }
}

pub(crate) fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ServerError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_BIND_ADDR),
        Some(v) => v
            .parse::<IpAddr>()
            .map_err(|_| ServerError::InvalidEnv { var: "BIND_ADDR", value: v.to_owned() }),
    }
}
