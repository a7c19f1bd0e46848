//! Application configuration loaded from environment variables.

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `APP_VERSION` — version string reported in responses (default: `"1.0.0"`)
/// - `ENVIRONMENT` — deployment environment name (default: `"development"`)
/// - `PORT` — listen port (default: `8080`)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub version: String,
    pub environment: String,
    pub port: u16,
}

impl AppConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            version: std::env::var("APP_VERSION").unwrap_or_else(|_| "1.0.0".to_string()),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Returns the bind address string, listening on all interfaces.
    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Whether the service runs in the development environment.
    ///
    /// Development gets a chattier default log filter.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            environment: "development".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.environment, "development");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_addr_formatting() {
        let config = AppConfig {
            version: "2.0.0".to_string(),
            environment: "staging".to_string(),
            port: 9090,
        };
        assert_eq!(config.addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_addr_default() {
        let config = AppConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_is_development() {
        let mut config = AppConfig::default();
        assert!(config.is_development());

        config.environment = "production".to_string();
        assert!(!config.is_development());
    }
}
