//! Client configuration

use serde::{Deserialize, Serialize};

use crate::error::{BackendError, Result};

/// Where the backend listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// HTTP client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:8080`
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Base URL without surrounding whitespace or trailing slashes.
    ///
    /// # Errors
    /// `InvalidConfig` when the scheme is not http(s) or the host is missing.
    pub fn normalized_base_url(&self) -> Result<String> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| BackendError::InvalidConfig {
                detail: format!("base URL must start with http:// or https://: {trimmed:?}"),
            })?;
        if rest.is_empty() {
            return Err(BackendError::InvalidConfig {
                detail: format!("base URL has no host: {trimmed:?}"),
            });
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(
            ClientConfig::default().normalized_base_url().as_deref(),
            Ok("http://localhost:8080")
        );
    }

    #[test]
    fn trailing_slashes_and_spaces_removed() {
        let config = ClientConfig::new("  https://hub.example.com//  ");
        assert_eq!(
            config.normalized_base_url().as_deref(),
            Ok("https://hub.example.com")
        );
    }

    #[test]
    fn scheme_required() {
        let config = ClientConfig::new("localhost:8080");
        assert!(matches!(
            config.normalized_base_url(),
            Err(BackendError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn host_required() {
        let config = ClientConfig::new("http://");
        assert!(matches!(
            config.normalized_base_url(),
            Err(BackendError::InvalidConfig { .. })
        ));
    }
}
