//! Backend factory.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpBackend;
use crate::traits::TrackerBackend;

/// Creates a [`TrackerBackend`] talking HTTP to the configured base URL.
///
/// The returned backend is wrapped in `Arc<dyn TrackerBackend>` so it can be
/// shared across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use tracker_hub_backend::{create_backend, ClientConfig, TrackerBackend};
///
/// let backend = create_backend(&ClientConfig::new("http://localhost:8080")).unwrap();
/// assert_eq!(backend.name(), "http://localhost:8080");
/// ```
pub fn create_backend(config: &ClientConfig) -> Result<Arc<dyn TrackerBackend>> {
    let backend = HttpBackend::new(config)?;
    log::info!("Backend client created for {}", backend.base_url());
    Ok(Arc::new(backend))
}
