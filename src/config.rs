//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "website";
pub const DEFAULT_PKG_DIR: &str = "client/pkg";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    EmptyPath { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Root of the static site: HTML pages, assets, optional `404.html`.
    pub site_dir: PathBuf,
    /// Directory holding the wasm bundle, served under `/pkg`.
    pub pkg_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `website`
    /// - `PKG_DIR`: default `client/pkg`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unusable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let site_dir = dir_var(&lookup, "SITE_DIR", DEFAULT_SITE_DIR)?;
        let pkg_dir = dir_var(&lookup, "PKG_DIR", DEFAULT_PKG_DIR)?;
        Ok(Self { port, site_dir, pkg_dir })
    }
}

fn dir_var<F>(lookup: &F, var: &'static str, default: &str) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) if raw.trim().is_empty() => Err(ConfigError::EmptyPath { var }),
        Some(raw) => Ok(PathBuf::from(raw.trim())),
        None => Ok(PathBuf::from(default)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
