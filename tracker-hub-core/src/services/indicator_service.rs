//! Connection status indicator

use std::sync::Arc;

use crate::error::{CoreError, log_failure};
use crate::services::ServiceContext;
use crate::types::{CredentialInput, Indicator, SnapshotFetch};

/// The one rule for the indicator: green with the active domain when the
/// snapshot is connected, red "disconnected" otherwise (fetch failures
/// included).
pub fn derive_indicator(fetch: &SnapshotFetch) -> Indicator {
    match fetch.active_connection() {
        Some(connection) => Indicator::connected(connection.domain.clone()),
        None => Indicator::disconnected(),
    }
}

/// Indicator service
pub struct IndicatorService {
    ctx: Arc<ServiceContext>,
}

impl IndicatorService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Indicator for the store's current state.
    pub async fn current(&self) -> Indicator {
        derive_indicator(&self.ctx.fetch_snapshot().await)
    }

    /// Verifies credentials typed by the user.
    ///
    /// Blank fields answer `false` without a request. A successful
    /// verification is also stored by the backend.
    pub async fn check_credentials(&self, input: &CredentialInput) -> bool {
        let Some(credentials) = input.to_connection() else {
            log::debug!("Credential check skipped, missing {:?}", input.missing_fields());
            return false;
        };

        match self.ctx.backend.test_credentials(&credentials).await {
            Ok(_) => true,
            Err(e) => {
                log_failure("Credential check", &CoreError::from(e));
                false
            }
        }
    }

    /// [`Self::check_credentials`] as an indicator, green labelled with the
    /// typed domain.
    pub async fn check_and_indicate(&self, input: &CredentialInput) -> Indicator {
        if self.check_credentials(input).await {
            Indicator::connected(input.domain.trim())
        } else {
            Indicator::disconnected()
        }
    }
}
