//! Data query service

use std::sync::Arc;

use tokio::sync::Mutex;
use tracker_hub_backend::{Connection, ExecuteRequest};

use crate::error::{CoreError, CoreResult, log_failure};
use crate::services::ServiceContext;
use crate::types::{QuerySelection, ResultTables};

/// Query service
pub struct QueryService {
    ctx: Arc<ServiceContext>,
    running: Mutex<()>,
}

impl QueryService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            running: Mutex::new(()),
        }
    }

    /// Active connection of a fresh read, `None` when disconnected or unavailable.
    pub async fn stored_credentials(&self) -> Option<Connection> {
        self.ctx.fetch_snapshot().await.active_connection().cloned()
    }

    /// Runs a query with the active stored connection and renders the payload.
    pub async fn execute(&self, selection: QuerySelection) -> CoreResult<ResultTables> {
        let _guard = self.running.try_lock().map_err(|_| {
            let err = CoreError::Busy("query".to_string());
            log_failure("Execute query", &err);
            err
        })?;

        let Some(credentials) = self
            .stored_credentials()
            .await
            .filter(Connection::is_complete)
        else {
            let err = CoreError::NoActiveConnection;
            log_failure("Execute query", &err);
            return Err(err);
        };

        let request = ExecuteRequest {
            credentials,
            projects: selection.projects,
            workflows: selection.workflows,
            statuses: selection.statuses,
        };
        let result = self.ctx.backend.execute(&request).await.map_err(|e| {
            let err = CoreError::from(e);
            log_failure("Execute query", &err);
            err
        })?;

        let tables = ResultTables::from_result(&result);
        log::info!("Query returned {} table(s)", tables.tables.len());
        Ok(tables)
    }

    pub fn is_running(&self) -> bool {
        self.running.try_lock().is_err()
    }
}
