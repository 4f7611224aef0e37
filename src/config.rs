//! Host configuration parsed from environment variables.

use std::path::PathBuf;

use portfolio_client::config::{BASE_PATH_ENV, BasePath, BasePathError};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORTFOLIO_BASE_PATH: {0}")]
    InvalidBasePath(#[from] BasePathError),
    #[error("invalid PORT: {raw:?}")]
    InvalidPort { raw: String },
    #[error("site directory {path:?} does not exist; build the client bundle first")]
    MissingSiteDir { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub base: BasePath,
    pub site_dir: PathBuf,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PORTFOLIO_BASE_PATH`: default `/`
    /// - `SITE_DIR`: default `client/dist` next to this manifest
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort { raw })?,
            None => DEFAULT_PORT,
        };
        let base = match lookup(BASE_PATH_ENV) {
            Some(raw) => BasePath::parse(&raw)?,
            None => BasePath::default(),
        };
        let site_dir = lookup("SITE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("client/dist"));
        if !site_dir.is_dir() {
            return Err(ConfigError::MissingSiteDir { path: site_dir });
        }

        Ok(Self { port, base, site_dir })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
