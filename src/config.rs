//! Environment-driven runtime configuration.
//! Used by: main, state.

use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_UPSTREAM_URL: &str = "https://abof.myjosh.in/api/apps";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub upstream_url: Url,
    pub charts_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let raw_url = lookup("UPSTREAM_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.into());
        let upstream_url = parse_upstream_url(&raw_url)?;
        let charts_dir = lookup("CHARTS_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { bind_addr, upstream_url, charts_dir })
    }
}

fn parse_upstream_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::Config(format!("UPSTREAM_URL {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!("UPSTREAM_URL scheme must be http or https, got {other}"))),
    }
}
