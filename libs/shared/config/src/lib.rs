use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_OPERATOR_LABEL: &str = "Admin User";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub api_base_url: String,
    pub operator_label: String,
    pub listen_addr: SocketAddr,
    pub request_timeout: Duration,
    pub reference_cache_ttl: Duration,
    api_base_url_explicit: bool,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("HOSPITAL_API_BASE_URL").filter(|v| !v.trim().is_empty());
        let api_base_url_explicit = api_base_url.is_some();

        let config = Self {
            api_base_url: api_base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| {
                    warn!("HOSPITAL_API_BASE_URL not set, using {}", DEFAULT_API_BASE_URL);
                    DEFAULT_API_BASE_URL.to_string()
                }),
            operator_label: lookup("ADMIN_OPERATOR_LABEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OPERATOR_LABEL.to_string()),
            listen_addr: lookup("ADMIN_LISTEN_ADDR")
                .and_then(|raw| {
                    raw.parse().map_err(|_| {
                        warn!("ADMIN_LISTEN_ADDR '{}' is not a socket address, using default", raw);
                    }).ok()
                })
                .unwrap_or_else(default_listen_addr),
            request_timeout: Duration::from_secs(
                parse_secs(&lookup, "HOSPITAL_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            ),
            reference_cache_ttl: Duration::from_secs(
                parse_secs(&lookup, "REFERENCE_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS),
            ),
            api_base_url_explicit,
        };

        if !config.is_configured() {
            warn!("Admin console not fully configured - backend URL falls back to the local default");
        }

        config
    }

    /// Config pointing at an explicit backend, everything else defaulted.
    pub fn for_base_url(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            operator_label: DEFAULT_OPERATOR_LABEL.to_string(),
            listen_addr: default_listen_addr(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            reference_cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            api_base_url_explicit: true,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_base_url_explicit && !self.api_base_url.is_empty()
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

fn parse_secs<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} '{}' is not a number of seconds, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = AdminConfig::from_lookup(|_| None);

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.operator_label, "Admin User");
        assert_eq!(config.listen_addr.port(), 3000);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.reference_cache_ttl, Duration::from_secs(60));
        assert!(!config.is_configured());
    }

    #[test]
    fn test_explicit_values_are_used() {
        let config = AdminConfig::from_lookup(lookup_from(&[
            ("HOSPITAL_API_BASE_URL", "https://hospital.example.com/"),
            ("ADMIN_OPERATOR_LABEL", "Front Desk"),
            ("ADMIN_LISTEN_ADDR", "127.0.0.1:8080"),
            ("HOSPITAL_API_TIMEOUT_SECS", "5"),
            ("REFERENCE_CACHE_TTL_SECS", "0"),
        ]));

        assert_eq!(config.api_base_url, "https://hospital.example.com");
        assert_eq!(config.operator_label, "Front Desk");
        assert_eq!(config.listen_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.reference_cache_ttl, Duration::ZERO);
        assert!(config.is_configured());
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = AdminConfig::from_lookup(lookup_from(&[
            ("HOSPITAL_API_TIMEOUT_SECS", "soon"),
            ("ADMIN_LISTEN_ADDR", "nowhere"),
        ]));

        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.listen_addr.port(), 3000);
    }

    #[test]
    fn test_for_base_url_trims_trailing_slash() {
        let config = AdminConfig::for_base_url("http://127.0.0.1:9999/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
        assert!(config.is_configured());
    }
}
