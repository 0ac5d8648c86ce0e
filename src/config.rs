//! Server configuration from environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `3000` |
//! | `STATIC_DIR` | `static` |
//! | `PAGE_CACHE_CAPACITY` | `1000` |
//! | `PAGE_CACHE_TTL_SECS` | `300` |
//!
//! Unset means default; set but unparseable is an error.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub page_cache_capacity: u64,
    pub page_cache_ttl: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            static_dir: PathBuf::from("static"),
            page_cache_capacity: 1_000,
            page_cache_ttl: Duration::from_secs(300),
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has invalid value '{}'", name, raw)),
        None => Ok(default),
    }
}

impl SiteConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env` but reading from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let ttl_secs = parse_var(&lookup, "PAGE_CACHE_TTL_SECS", defaults.page_cache_ttl.as_secs())?;

        Ok(Self {
            host: parse_var(&lookup, "HOST", defaults.host)?,
            port: parse_var(&lookup, "PORT", defaults.port)?,
            static_dir,
            page_cache_capacity: parse_var(&lookup, "PAGE_CACHE_CAPACITY", defaults.page_cache_capacity)?,
            page_cache_ttl: Duration::from_secs(ttl_secs),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> anyhow::Result<SiteConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("STATIC_DIR", "/srv/hc1/static"),
            ("PAGE_CACHE_CAPACITY", "50"),
            ("PAGE_CACHE_TTL_SECS", " 60 "),
        ])
        .unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.static_dir, PathBuf::from("/srv/hc1/static"));
        assert_eq!(config.page_cache_capacity, 50);
        assert_eq!(config.page_cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = from_pairs(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(from_pairs(&[("PORT", "70000")]).is_err());
        assert!(from_pairs(&[("HOST", "localhost:3000")]).is_err());
        assert!(from_pairs(&[("PAGE_CACHE_TTL_SECS", "-5")]).is_err());
    }
}
