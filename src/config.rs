//! Transport configuration loaded from environment variables.

const DEFAULT_BASE_URL: &str = "http://localhost:5000/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Remote API endpoint configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base origin every API path is resolved against.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Connection-establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl ApiConfig {
    /// Load from `API_BASE_URL`, `API_TIMEOUT_SECS`, and
    /// `API_CONNECT_TIMEOUT_SECS`. Unset or unparsable values fall back to
    /// defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
            timeout_secs: env_parse("API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            connect_timeout_secs: env_parse("API_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
