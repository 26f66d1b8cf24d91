//! Runtime configuration from environment variables.
//!
//! | Variable              | Default   |
//! |-----------------------|-----------|
//! | `BIND_ADDR`           | `0.0.0.0` |
//! | `PORT`                | `3000`    |
//! | `SITE_OUT_DIR`        | `dist`    |
//! | `PAGE_CACHE_CAPACITY` | `64`      |
//! | `PAGE_CACHE_TTL_SECS` | `300`     |
//!
//! Unparseable values are logged and replaced by the default, as is a
//! cache TTL above `MAX_PAGE_CACHE_TTL_SECS`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Upper bound for `PAGE_CACHE_TTL_SECS` (one year).
pub const MAX_PAGE_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub out_dir: PathBuf,
    pub page_cache_capacity: u64,
    pub page_cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            out_dir: PathBuf::from("dist"),
            page_cache_capacity: 64,
            page_cache_ttl: Duration::from_secs(300),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            bind_addr: parse_or(&lookup, "BIND_ADDR", defaults.bind_addr),
            port: parse_or(&lookup, "PORT", defaults.port),
            out_dir: lookup("SITE_OUT_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.out_dir),
            page_cache_capacity: parse_or(&lookup, "PAGE_CACHE_CAPACITY", defaults.page_cache_capacity),
            page_cache_ttl: cache_ttl(&lookup, defaults.page_cache_ttl),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    pub fn log_summary(&self) {
        tracing::info!("Configuration:");
        tracing::info!("  BIND_ADDR: {}", self.bind_addr);
        tracing::info!("  PORT: {}", self.port);
        tracing::info!("  SITE_OUT_DIR: {}", self.out_dir.display());
        tracing::info!("  PAGE_CACHE_CAPACITY: {}", self.page_cache_capacity);
        tracing::info!("  PAGE_CACHE_TTL_SECS: {}", self.page_cache_ttl.as_secs());
    }
}

fn cache_ttl<F>(lookup: &F, default: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    let secs = parse_or(lookup, "PAGE_CACHE_TTL_SECS", default.as_secs());
    if secs > MAX_PAGE_CACHE_TTL_SECS {
        tracing::warn!(
            "Ignoring PAGE_CACHE_TTL_SECS={} (max {}), using {}",
            secs,
            MAX_PAGE_CACHE_TTL_SECS,
            default.as_secs()
        );
        return default;
    }
    Duration::from_secs(secs)
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", "8080"),
            ("SITE_OUT_DIR", "public"),
            ("PAGE_CACHE_CAPACITY", "16"),
            ("PAGE_CACHE_TTL_SECS", "60"),
        ]);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.out_dir, PathBuf::from("public"));
        assert_eq!(config.page_cache_capacity, 16);
        assert_eq!(config.page_cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[("PORT", "negen"), ("BIND_ADDR", "nergens"), ("SITE_OUT_DIR", " ")]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr, Config::default().bind_addr);
        assert_eq!(config.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_oversized_cache_ttl_falls_back() {
        let config = config_from(&[("PAGE_CACHE_TTL_SECS", "99999999999")]);
        assert_eq!(config.page_cache_ttl, Config::default().page_cache_ttl);

        let max = MAX_PAGE_CACHE_TTL_SECS.to_string();
        let config = config_from(&[("PAGE_CACHE_TTL_SECS", max.as_str())]);
        assert_eq!(config.page_cache_ttl, Duration::from_secs(MAX_PAGE_CACHE_TTL_SECS));
    }
}
