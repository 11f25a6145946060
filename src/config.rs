//! Application configuration from environment variables

use std::env;
use std::time::Duration;

/// Configuration errors raised at start-up
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Currency code attached to every amount
    pub currency: String,
    pub confirmation_ttl: Duration,
    pub confirmation_cache_capacity: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            currency: "INR".to_string(),
            confirmation_ttl: Duration::from_secs(60 * 60),
            confirmation_cache_capacity: 10_000,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment, falling back to
    /// defaults for unset variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let ttl_secs = parse_var(&lookup, "CONFIRMATION_TTL_SECS", "number of seconds")?
            .unwrap_or(defaults.confirmation_ttl.as_secs());

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", "port number")?.unwrap_or(defaults.port),
            currency: lookup("CURRENCY").unwrap_or(defaults.currency),
            confirmation_ttl: Duration::from_secs(ttl_secs),
            confirmation_cache_capacity: parse_var(
                &lookup,
                "CONFIRMATION_CACHE_CAPACITY",
                "entry count",
            )?
            .unwrap_or(defaults.confirmation_cache_capacity),
        })
    }

    /// Address to bind the server to
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(
    lookup: &F,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map(Some).map_err(|_| ConfigError::Invalid {
                name,
                value,
                expected,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.currency, "INR");
        assert_eq!(config.confirmation_ttl, Duration::from_secs(3600));
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("CURRENCY", "EUR"),
            ("CONFIRMATION_TTL_SECS", "60"),
            ("CONFIRMATION_CACHE_CAPACITY", "5"),
        ]))
        .unwrap();
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.confirmation_ttl, Duration::from_secs(60));
        assert_eq!(config.confirmation_cache_capacity, 5);
    }

    #[test]
    fn test_invalid_number() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "PORT must be a valid port number, got 'eighty'"
        );
    }
}
