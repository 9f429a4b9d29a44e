//! Client configuration.

/// Environment variable holding the todos API base URL.
pub const API_URL_ENV: &str = "TODOS_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `TODOS_API_URL`, falling back to the local mock server.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            Some(base_url) => Self { base_url },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_uses_default() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn blank_variable_uses_default() {
        let config = ClientConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn variable_overrides_default() {
        let config = ClientConfig::from_lookup(|key| {
            (key == API_URL_ENV).then(|| "https://api.example.test/".to_string())
        });
        assert_eq!(config.base_url, "https://api.example.test/");
    }
}
