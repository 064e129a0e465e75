use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const STAGING_PORT: u16 = 3100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },
}

/// Server settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    /// Public origin used for canonical links and the sitemap, without a trailing slash.
    pub site_url: String,
    /// Origin allowed by CORS.
    pub frontend_url: String,
    /// Directory holding the built single-page app.
    pub frontend_dist: PathBuf,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None if environment == "staging" => STAGING_PORT,
            None => DEFAULT_PORT,
        };
        let site_url = url("SITE_URL", lookup("SITE_URL").unwrap_or_else(|| "https://bbcars.eu".to_string()))?;
        let frontend_url = url(
            "FRONTEND_URL",
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:8080".to_string()),
        )?;
        Ok(Self {
            environment,
            port,
            site_url,
            frontend_url,
            frontend_dist: lookup("FRONTEND_DIST").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("../frontend/dist")),
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.trim().is_empty()),
        })
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "staging")
    }
}

fn url(name: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty());
    if has_host {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidUrl { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.site_url, "https://bbcars.eu");
        assert_eq!(config.sentry_dsn, None);
        assert!(!config.is_production());
    }

    #[test]
    fn staging_uses_its_own_port() {
        assert_eq!(config(&[("ENVIRONMENT", "staging")]).unwrap().port, 3100);
        assert_eq!(config(&[("ENVIRONMENT", "staging"), ("PORT", "8000")]).unwrap().port, 8000);
    }

    #[test]
    fn production_covers_staging_but_not_development() {
        assert!(config(&[("ENVIRONMENT", "production")]).unwrap().is_production());
        assert!(config(&[("ENVIRONMENT", "staging")]).unwrap().is_production());
        assert!(!config(&[("ENVIRONMENT", "development")]).unwrap().is_production());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(config(&[("PORT", "eighty")]), Err(ConfigError::InvalidPort("eighty".into())));
        assert!(matches!(config(&[("SITE_URL", "bbcars.eu")]), Err(ConfigError::InvalidUrl { name: "SITE_URL", .. })));
    }

    #[test]
    fn trims_trailing_slash_and_blank_dsn() {
        let config = config(&[("SITE_URL", "https://www.bbcars.eu/"), ("SENTRY_DSN", " ")]).unwrap();
        assert_eq!(config.site_url, "https://www.bbcars.eu");
        assert_eq!(config.sentry_dsn, None);
    }
}
