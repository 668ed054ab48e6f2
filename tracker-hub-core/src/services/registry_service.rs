//! Connection registry client
//!
//! The backend store is the only source of truth. Nothing here caches it: every
//! read re-fetches and every mutation is followed by a full re-read.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tracker_hub_backend::Connection;

use crate::error::{CoreError, CoreResult, log_failure};
use crate::services::ServiceContext;
use crate::services::indicator_service::derive_indicator;
use crate::types::{ConnectionListView, RegistryView, RowAction, SnapshotFetch};

/// Registry service
pub struct RegistryService {
    ctx: Arc<ServiceContext>,
    /// Held for the whole of a mutate-then-refresh chain
    mutation: Mutex<()>,
}

impl RegistryService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            mutation: Mutex::new(()),
        }
    }

    // ===== Reads =====

    /// Reads the store. Never fails; see [`ServiceContext::fetch_snapshot`].
    pub async fn fetch_snapshot(&self) -> SnapshotFetch {
        self.ctx.fetch_snapshot().await
    }

    /// Rows for every saved connection. An empty list when the read fails,
    /// never stale rows.
    pub async fn list_connections(&self) -> ConnectionListView {
        match self.ctx.backend.list_connections().await {
            Ok(list) => ConnectionListView::from_list(&list),
            Err(e) => {
                log_failure("List connections", &CoreError::from(e));
                ConnectionListView::default()
            }
        }
    }

    /// List, then indicator, read one after the other.
    pub async fn refresh(&self) -> RegistryView {
        let list = self.list_connections().await;
        let indicator = derive_indicator(&self.fetch_snapshot().await);
        RegistryView { list, indicator }
    }

    pub async fn is_any_active(&self) -> bool {
        self.fetch_snapshot().await.is_connected()
    }

    pub async fn active_connection(&self) -> Option<Connection> {
        self.fetch_snapshot().await.active_connection().cloned()
    }

    /// Bounds check against a fresh read; `false` when the store is unavailable.
    pub async fn is_index_valid(&self, index: i64) -> bool {
        self.fetch_snapshot()
            .await
            .snapshot()
            .is_some_and(|s| s.is_index_valid(index))
    }

    // ===== Mutations =====

    /// Asks the backend to make `index` current. The backend validates it.
    ///
    /// The caller must refresh afterwards; [`Self::select_and_refresh`] does both.
    pub async fn select_connection(&self, index: usize) -> CoreResult<()> {
        self.ctx.backend.set_current(index).await.map_err(|e| {
            let err = CoreError::from(e);
            log_failure("Select connection", &err);
            err
        })?;
        log::info!("Connection {index} selected");
        Ok(())
    }

    /// Asks the backend to delete `index`. Later indices shift down, so no
    /// index survives this call.
    pub async fn delete_connection(&self, index: usize) -> CoreResult<()> {
        self.ctx.backend.delete_connection(index).await.map_err(|e| {
            let err = CoreError::from(e);
            log_failure("Delete connection", &err);
            err
        })?;
        log::info!("Connection {index} deleted");
        Ok(())
    }

    /// Select, then re-read everything.
    ///
    /// On failure nothing is re-read: the caller keeps its current view.
    pub async fn select_and_refresh(&self, index: usize) -> CoreResult<RegistryView> {
        let _guard = self.begin_mutation("select connection")?;
        self.select_connection(index).await?;
        Ok(self.refresh().await)
    }

    /// Delete, then re-read everything.
    pub async fn delete_and_refresh(&self, index: usize) -> CoreResult<RegistryView> {
        let _guard = self.begin_mutation("delete connection")?;
        self.delete_connection(index).await?;
        Ok(self.refresh().await)
    }

    /// Dispatches a row action.
    pub async fn perform(&self, action: RowAction) -> CoreResult<RegistryView> {
        match action {
            RowAction::Connect(index) => self.select_and_refresh(index).await,
            RowAction::Delete(index) => self.delete_and_refresh(index).await,
        }
    }

    /// Whether a select or delete chain is running.
    pub fn is_busy(&self) -> bool {
        self.mutation.try_lock().is_err()
    }

    fn begin_mutation(&self, operation: &str) -> CoreResult<MutexGuard<'_, ()>> {
        self.mutation.try_lock().map_err(|_| {
            let err = CoreError::Busy(operation.to_string());
            log_failure(operation, &err);
            err
        })
    }
}
