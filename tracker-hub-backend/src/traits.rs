use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    Connection, ConnectionList, ConnectionSnapshot, ExecuteRequest, ExecuteResult, VerifyResponse,
};

/// Connection backend contract.
///
/// The backend owns the connection store (list + `current` pointer + `active`
/// flag), verifies credentials against the remote tracker and runs queries.
/// Callers treat it as the single source of truth: every mutation is followed
/// by a fresh read.
#[async_trait]
pub trait TrackerBackend: Send + Sync {
    /// Short identifier used in logs (the base URL for HTTP backends).
    fn name(&self) -> &str;

    /// `GET /connection_status`: list, pointer and active flag.
    async fn connection_status(&self) -> Result<ConnectionSnapshot>;

    /// `GET /getconnections`: list and pointer.
    async fn list_connections(&self) -> Result<ConnectionList>;

    /// `GET /deleteconnection?index=`. The backend shifts later indices and
    /// fixes up `current`.
    async fn delete_connection(&self, index: usize) -> Result<()>;

    /// `GET /setcurrent?index=`. The backend validates the index.
    async fn set_current(&self, index: usize) -> Result<()>;

    /// `POST /testjira`: verifies the triple against the tracker. On success the
    /// backend also saves it (or updates the existing entry for the same
    /// domain + account) and marks it current.
    async fn test_credentials(&self, credentials: &Connection) -> Result<VerifyResponse>;

    /// `POST /execute`: runs the selected queries.
    async fn execute(&self, request: &ExecuteRequest) -> Result<ExecuteResult>;
}
