//! HTTP backend

mod backend;
mod requests;

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{BackendError, Result};

pub(crate) const CONNECTION_STATUS: &str = "/connection_status";
pub(crate) const GET_CONNECTIONS: &str = "/getconnections";
pub(crate) const DELETE_CONNECTION: &str = "/deleteconnection";
pub(crate) const SET_CURRENT: &str = "/setcurrent";
pub(crate) const TEST_CREDENTIALS: &str = "/testjira";
pub(crate) const EXECUTE: &str = "/execute";

/// [`TrackerBackend`](crate::TrackerBackend) over the backend's HTTP API.
pub struct HttpBackend {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl HttpBackend {
    /// Creates a backend client. No request is sent.
    ///
    /// The client applies no timeout of its own; requests rely on the
    /// transport defaults.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.normalized_base_url()?;
        let client = Client::builder()
            .build()
            .map_err(|e| BackendError::InvalidConfig {
                detail: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client, base_url })
    }

    /// Normalised base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}
