//! Credential form controller
//!
//! The only path from the form to the backend: validate, verify, then refresh
//! the registry on success.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{CoreError, CoreResult, log_failure};
use crate::i18n::t;
use crate::services::{RegistryService, ServiceContext};
use crate::types::{CredentialInput, FormState, SubmitOutcome};

/// Connection form controller
pub struct ConnectionFormController {
    ctx: Arc<ServiceContext>,
    registry: Arc<RegistryService>,
    /// Held while a submission is in flight
    submitting: Mutex<()>,
}

impl ConnectionFormController {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, registry: Arc<RegistryService>) -> Self {
        Self {
            ctx,
            registry,
            submitting: Mutex::new(()),
        }
    }

    /// Submits the typed credentials.
    ///
    /// - `Invalid`: a field is blank; no request
    /// - `Success`: the backend's message verbatim, fields cleared, registry refreshed
    /// - `Rejected`: the backend's reason (or the fallback text), fields kept
    /// - `Unavailable`: no usable answer, fields kept
    ///
    /// Only a concurrent submission is an error ([`CoreError::Busy`]).
    pub async fn submit(&self, input: CredentialInput) -> CoreResult<SubmitOutcome> {
        let _guard = self.submitting.try_lock().map_err(|_| {
            let err = CoreError::Busy("credential submission".to_string());
            log_failure("Submit connection", &err);
            err
        })?;

        let Some(credentials) = input.to_connection() else {
            let err = CoreError::InvalidLocalInput(input.missing_fields().join(", "));
            log_failure("Submit connection", &err);
            return Ok(SubmitOutcome {
                state: FormState::Invalid {
                    reason: t().form.missing_fields.to_string(),
                },
                input,
                registry: None,
            });
        };

        match self.ctx.backend.test_credentials(&credentials).await {
            Ok(response) => {
                log::info!("Connection verified: {}", credentials.display_name());
                let registry = self.registry.refresh().await;
                Ok(SubmitOutcome {
                    state: FormState::Success {
                        message: response.message,
                    },
                    input: CredentialInput::default(),
                    registry: Some(registry),
                })
            }
            Err(e) => {
                let err = CoreError::from(e);
                log_failure("Submit connection", &err);
                let state = match err {
                    CoreError::Rejected { message, .. } if !message.is_empty() => {
                        FormState::Rejected { message }
                    }
                    CoreError::Rejected { .. } => FormState::Rejected {
                        message: t().form.fallback_error.to_string(),
                    },
                    other => FormState::Unavailable {
                        reason: other.to_string(),
                    },
                };
                Ok(SubmitOutcome {
                    state,
                    input,
                    registry: None,
                })
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.try_lock().is_err()
    }
}
