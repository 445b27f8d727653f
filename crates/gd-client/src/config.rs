//! Configuration for the API client.
//!
//! Either parsed from a TOML file, or read from environment variables:
//!
//! - `GD_HOST`       (default: "http://www.boomlings.com/database")
//! - `GD_ACCOUNT_ID` (optional)
//! - `GD_PASSWORD`   (optional; required together with `GD_ACCOUNT_ID`)

use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context};
use gd_protocol::Identity;
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "http://www.boomlings.com/database";

/// Client configuration.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// API base URL, without trailing slash.
    #[serde(default = "default_host")]
    pub host: String,

    /// Account used for authenticated endpoints.
    #[serde(default)]
    pub account_id: Option<u64>,

    #[serde(default)]
    pub password: Option<String>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            host: default_host(),
            account_id: None,
            password: None,
        }
    }
}

impl ClientConfig {
    /// Construct a `ClientConfig` from environment variables, falling back
    /// to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("GD_HOST").unwrap_or_else(default_host);
        let account_id = read_optional(&lookup, "GD_ACCOUNT_ID")?;
        let password = lookup("GD_PASSWORD");

        let config = ClientConfig {
            host,
            account_id,
            password,
        };
        config.identity()?;
        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let config: ClientConfig = toml::from_str(s).context("invalid client config")?;
        config.identity()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Credentials, if configured. Half-configured credentials are an error.
    pub fn identity(&self) -> anyhow::Result<Option<Identity>> {
        match (self.account_id, &self.password) {
            (Some(id), Some(pw)) => Ok(Some(Identity::new(id, pw.clone()))),
            (None, None) => Ok(None),
            (Some(_), None) => bail!("account_id is set but password is missing"),
            (None, Some(_)) => bail!("password is set but account_id is missing"),
        }
    }

    /// Full URL for an endpoint path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.host.trim_end_matches('/'), path)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("account_id", &self.account_id)
            .field("password", &self.password.as_ref().map(|_| "******"))
            .finish()
    }
}

fn read_optional<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(val) => Ok(Some(
            val.parse::<T>()
                .with_context(|| format!("{key} is not valid: {val:?}"))?,
        )),
        None => Ok(None),
    }
}
