//! Configuration types.

use std::time::Duration;

use reqwest::Url;

use crate::error::{ConfigError, Result};

/// Environment variable holding the server base URL.
pub const BASE_URL_ENV: &str = "LEAD_FORM_BASE_URL";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "LEAD_FORM_TIMEOUT_SECS";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server origin, e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
    /// Path of the per-step submission endpoint.
    pub submit_step_path: String,
    /// Path of the admin deletion endpoint.
    pub delete_user_path: String,
    /// Per-request timeout. `None` lets a request hang until the server answers.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            submit_step_path: "/submit_step".to_string(),
            delete_user_path: "/admin/delete_user".to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Build a config pointing at `base_url` with default paths.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load overrides from the environment on top of the defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> std::result::Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(base) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = base.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: TIMEOUT_ENV.to_string(),
                message: format!("expected whole seconds, got {raw:?}"),
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        // Reject a bad base URL up front.
        config.base()?;
        Ok(config)
    }

    fn base(&self) -> std::result::Result<Url, ConfigError> {
        Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            key: BASE_URL_ENV.to_string(),
            message: e.to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ConfigError> {
        self.base()?.join(path).map_err(|e| ConfigError::InvalidValue {
            key: "endpoint".to_string(),
            message: format!("{path}: {e}"),
        })
    }

    /// Absolute URL of the step submission endpoint.
    pub fn submit_step_url(&self) -> std::result::Result<Url, ConfigError> {
        self.endpoint(&self.submit_step_path)
    }

    /// Absolute URL of the deletion endpoint.
    pub fn delete_user_url(&self) -> std::result::Result<Url, ConfigError> {
        self.endpoint(&self.delete_user_path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert!(config.request_timeout.is_none());
        assert_eq!(
            config.submit_step_url().unwrap().as_str(),
            "http://127.0.0.1:5000/submit_step"
        );
        assert_eq!(
            config.delete_user_url().unwrap().as_str(),
            "http://127.0.0.1:5000/admin/delete_user"
        );
    }

    #[test]
    fn env_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (BASE_URL_ENV, "https://leads.example.com"),
            (TIMEOUT_ENV, "15"),
        ]))
        .unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(
            config.submit_step_url().unwrap().as_str(),
            "https://leads.example.com/submit_step"
        );
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == TIMEOUT_ENV));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[(BASE_URL_ENV, "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == BASE_URL_ENV));
    }
}
