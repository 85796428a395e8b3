use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8081/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Catalog REST API endpoint configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_API_URL: Base URL of the catalog API (default: "http://localhost:8081/api")
    /// - CATALOG_API_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CATALOG_API_URL").ok(),
            env::var("CATALOG_API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match timeout_secs {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    tracing::warn!(
                        "Ignoring CATALOG_API_TIMEOUT_SECS={:?}, using {}s",
                        raw,
                        DEFAULT_TIMEOUT_SECS
                    );
                    DEFAULT_TIMEOUT_SECS
                }
            },
        };

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        // Arrange & Act
        let config = ApiConfig::from_values(None, None);

        // Assert
        assert_eq!(config.base_url, "http://localhost:8081/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_read_explicit_values() {
        let config = ApiConfig::from_values(
            Some(" https://catalog.example.com/api ".to_string()),
            Some("5".to_string()),
        );

        assert_eq!(config.base_url, "https://catalog.example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn should_fall_back_on_invalid_timeout() {
        let config = ApiConfig::from_values(None, Some("soon".to_string()));
        assert_eq!(config.timeout, Duration::from_secs(30));

        let config = ApiConfig::from_values(None, Some("0".to_string()));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
