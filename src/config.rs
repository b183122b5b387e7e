//! API Configuration Module
//!
//! Configuration for the HTTP surface, loaded from environment variables
//! once at process start with development-friendly defaults.

/// API configuration for CORS and the HTTP surface.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `ROSTER_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("ROSTER_CORS_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .unwrap_or_default();

        Self { cors_origins }
    }

    /// Check if running with a restricted origin list (production mode).
    pub fn is_production(&self) -> bool {
        !self.cors_origins.is_empty()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert!(config.cors_origins.is_empty());
        assert!(!config.is_production());
    }

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("https://roster.example.com, https://app.example.com");
        assert_eq!(
            origins,
            vec![
                "https://roster.example.com".to_string(),
                "https://app.example.com".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_origins_skips_empty_entries() {
        let origins = parse_origins(" , https://roster.example.com,, ");
        assert_eq!(origins, vec!["https://roster.example.com".to_string()]);
    }

    #[test]
    fn test_is_production() {
        let config = ApiConfig {
            cors_origins: vec!["https://roster.example.com".to_string()],
        };
        assert!(config.is_production());
    }
}
