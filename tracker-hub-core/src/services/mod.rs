//! Business logic service layer

mod form_controller;
mod indicator_service;
mod query_service;
mod registry_service;

pub use form_controller::ConnectionFormController;
pub use indicator_service::{IndicatorService, derive_indicator};
pub use query_service::QueryService;
pub use registry_service::RegistryService;

use std::sync::Arc;

use tracker_hub_backend::TrackerBackend;

use crate::error::{CoreError, log_failure};
use crate::types::SnapshotFetch;

/// Service context - holds all dependencies
///
/// The front-end creates it once and injects the backend implementation.
pub struct ServiceContext {
    /// Connection store, verification and queries
    pub backend: Arc<dyn TrackerBackend>,
}

impl ServiceContext {
    #[must_use]
    pub fn new(backend: Arc<dyn TrackerBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn TrackerBackend> {
        &self.backend
    }

    /// Reads the store's current state.
    ///
    /// Every failure (transport, non-success status, undecodable body) becomes
    /// [`SnapshotFetch::Unavailable`].
    pub async fn fetch_snapshot(&self) -> SnapshotFetch {
        match self.backend.connection_status().await {
            Ok(snapshot) => SnapshotFetch::Ready(snapshot),
            Err(e) => {
                let err = CoreError::from(e);
                log_failure("Connection status", &err);
                SnapshotFetch::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Bundle of all services over one context.
pub struct Services {
    pub registry: Arc<RegistryService>,
    pub indicator: IndicatorService,
    pub form: ConnectionFormController,
    pub query: QueryService,
}

impl Services {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let registry = Arc::new(RegistryService::new(Arc::clone(&ctx)));
        Self {
            indicator: IndicatorService::new(Arc::clone(&ctx)),
            form: ConnectionFormController::new(Arc::clone(&ctx), Arc::clone(&registry)),
            query: QueryService::new(ctx),
            registry,
        }
    }
}
