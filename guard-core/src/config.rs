use log::debug;
use std::env;

pub const API_BASE_ENV: &str = "GUARD_API_BASE_URL";
pub const PARENT_DOMAIN_ENV: &str = "GUARD_PARENT_DOMAIN";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v2";
pub const DEFAULT_PARENT_DOMAIN: &str = "globalguard.com.au";
pub const DEFAULT_API_PORT: u16 = 8000;

/// Where the backend lives when the page host doesn't tell us.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub default_base_url: String,
    /// Hosts ending with this suffix talk to the API on `api_port` of the same host.
    pub parent_domain: String,
    pub api_port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_base_url: DEFAULT_API_BASE_URL.into(),
            parent_domain: DEFAULT_PARENT_DOMAIN.into(),
            api_port: DEFAULT_API_PORT,
        }
    }
}

impl ApiConfig {
    /// Reads the process environment. Used by native tooling and tests.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads values baked in at compile time, for the wasm build where no
    /// process environment exists.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            API_BASE_ENV => option_env!("GUARD_API_BASE_URL").map(String::from),
            PARENT_DOMAIN_ENV => option_env!("GUARD_PARENT_DOMAIN").map(String::from),
            _ => None,
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            default_base_url: load(&lookup, API_BASE_ENV, DEFAULT_API_BASE_URL),
            parent_domain: load(&lookup, PARENT_DOMAIN_ENV, DEFAULT_PARENT_DOMAIN),
            api_port: DEFAULT_API_PORT,
        }
    }
}

fn load(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        Some(value) => value,
        None => {
            debug!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults_when_unset() {
        let config = ApiConfig::from_lookup(|_| None);
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = ApiConfig::from_lookup(|_| Some("   ".into()));
        assert_eq!(config.default_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.parent_domain, DEFAULT_PARENT_DOMAIN);
    }

    #[test]
    fn overrides_from_lookup() {
        let config = ApiConfig::from_lookup(|key| match key {
            API_BASE_ENV => Some("https://staging.example.net/api/v2".into()),
            _ => None,
        });
        assert_eq!(config.default_base_url, "https://staging.example.net/api/v2");
        assert_eq!(config.parent_domain, DEFAULT_PARENT_DOMAIN);
    }
}
