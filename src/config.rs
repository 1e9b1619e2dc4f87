//! Host configuration parsed from environment variables.
//!
//! Leptos' own options (site address, `/pkg` root) come from
//! `[package.metadata.leptos]`; this layer only carries the host overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_BADGE_DIR: &str = "public/badges";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}': expected 1-65535")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Overrides the port of the Leptos `site-addr` when set.
    pub port: Option<u16>,
    /// Directory served under `/badges`.
    pub badge_dir: PathBuf,
}

impl ServerConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: overrides the Leptos site port
    /// - `BADGE_DIR`: badge image directory, default `public/badges`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `PORT` is set but not a valid
    /// non-zero port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let badge_dir = parse_badge_dir(std::env::var("BADGE_DIR").ok().as_deref());
        Ok(Self { port, badge_dir })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: None, badge_dir: PathBuf::from(DEFAULT_BADGE_DIR) }
    }
}

fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort(raw.to_owned())),
        Ok(port) => Ok(Some(port)),
    }
}

fn parse_badge_dir(raw: Option<&str>) -> PathBuf {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_BADGE_DIR), PathBuf::from)
}
