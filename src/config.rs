//! Host configuration parsed from environment variables.

use std::net::SocketAddr;

use leptos::prelude::LeptosOptions;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "target/site";
pub const DEFAULT_SITE_PKG_DIR: &str = "pkg";
pub const DEFAULT_OUTPUT_NAME: &str = "video-recipes";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub site_root: String,
    pub site_pkg_dir: String,
    pub output_name: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            site_root: DEFAULT_SITE_ROOT.to_owned(),
            site_pkg_dir: DEFAULT_SITE_PKG_DIR.to_owned(),
            output_name: DEFAULT_OUTPUT_NAME.to_owned(),
        }
    }
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LEPTOS_SITE_ROOT`: default `target/site`
    /// - `LEPTOS_SITE_PKG_DIR`: default `pkg`
    /// - `LEPTOS_OUTPUT_NAME`: default `video-recipes`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_root = env_or("LEPTOS_SITE_ROOT", DEFAULT_SITE_ROOT);
        let site_pkg_dir = env_or("LEPTOS_SITE_PKG_DIR", DEFAULT_SITE_PKG_DIR)
            .trim_matches('/')
            .to_owned();
        let output_name = env_or("LEPTOS_OUTPUT_NAME", DEFAULT_OUTPUT_NAME);

        Ok(Self { port, site_root, site_pkg_dir, output_name })
    }

    /// Listen address on all interfaces.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Leptos rendering options matching this config.
    pub fn leptos_options(&self) -> LeptosOptions {
        LeptosOptions::builder()
            .output_name(self.output_name.as_str())
            .site_root(self.site_root.as_str())
            .site_pkg_dir(self.site_pkg_dir.as_str())
            .site_addr(self.addr())
            .build()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
