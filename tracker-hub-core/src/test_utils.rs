//! Test helpers
//!
//! `MockBackend` keeps the store in memory and follows the backend's rules:
//! set-current validates the index, delete shifts later indices, verification
//! adds or updates the entry and makes it current.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};
use tracker_hub_backend::{
    BackendError, Connection, ConnectionList, ConnectionSnapshot, ExecuteRequest, ExecuteResult,
    NO_CURRENT, Result, TrackerBackend, VerifyResponse,
};

use crate::services::ServiceContext;

pub const CONNECTION_STATUS: &str = "/connection_status";
pub const GET_CONNECTIONS: &str = "/getconnections";
pub const DELETE_CONNECTION: &str = "/deleteconnection";
pub const SET_CURRENT: &str = "/setcurrent";
pub const TEST_CREDENTIALS: &str = "/testjira";
pub const EXECUTE: &str = "/execute";

pub const SAVED_MESSAGE: &str = "¡Conexión exitosa y guardada!";
pub const DUPLICATE_MESSAGE: &str = "Ya existe la conexión!";

// ===== MockBackend =====

pub struct MockBackend {
    store: RwLock<ConnectionSnapshot>,
    /// Per-endpoint failure returned instead of the normal answer
    failures: RwLock<HashMap<&'static str, BackendError>>,
    /// Per-endpoint one-shot gate: the next call waits for a notification
    gates: RwLock<HashMap<&'static str, Arc<Notify>>>,
    calls: RwLock<Vec<&'static str>>,
    execute_result: RwLock<ExecuteResult>,
    last_execute: RwLock<Option<ExecuteRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::with_store(ConnectionSnapshot::default())
    }

    pub fn with_store(store: ConnectionSnapshot) -> Self {
        Self {
            store: RwLock::new(store),
            failures: RwLock::new(HashMap::new()),
            gates: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
            execute_result: RwLock::new(ExecuteResult::default()),
            last_execute: RwLock::new(None),
        }
    }

    /// Store holding one connection per domain.
    pub fn with_domains(domains: &[&str], current: i64, active: bool) -> Self {
        Self::with_store(ConnectionSnapshot {
            connections: domains.iter().map(|d| conn(d)).collect(),
            current,
            active,
        })
    }

    pub async fn store(&self) -> ConnectionSnapshot {
        self.store.read().await.clone()
    }

    pub async fn fail(&self, endpoint: &'static str, err: BackendError) {
        self.failures.write().await.insert(endpoint, err);
    }

    /// Makes the next call to `endpoint` wait until the returned handle is notified.
    pub async fn gate(&self, endpoint: &'static str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates.write().await.insert(endpoint, Arc::clone(&notify));
        notify
    }

    pub async fn set_execute_result(&self, result: ExecuteResult) {
        *self.execute_result.write().await = result;
    }

    pub async fn last_execute(&self) -> Option<ExecuteRequest> {
        self.last_execute.read().await.clone()
    }

    pub async fn calls(&self, endpoint: &str) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| **c == endpoint)
            .count()
    }

    pub async fn total_calls(&self) -> usize {
        self.calls.read().await.len()
    }

    /// Call sequence, in order.
    pub async fn call_log(&self) -> Vec<&'static str> {
        self.calls.read().await.clone()
    }

    /// Yields until `endpoint` has been called `count` times.
    pub async fn wait_for_calls(&self, endpoint: &str, count: usize) {
        for _ in 0..10_000 {
            if self.calls(endpoint).await >= count {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("{endpoint} was not called {count} time(s)");
    }

    /// Records the call, honours a pending gate and returns any injected failure.
    async fn enter(&self, endpoint: &'static str) -> Result<()> {
        self.calls.write().await.push(endpoint);
        let gate = self.gates.write().await.remove(endpoint);
        if let Some(gate) = gate {
            gate.notified().await;
        }
        match self.failures.read().await.get(endpoint) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn out_of_range(endpoint: &str) -> BackendError {
    rejected(endpoint, 400, "Índice fuera de rango")
}

#[async_trait]
impl TrackerBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn connection_status(&self) -> Result<ConnectionSnapshot> {
        self.enter(CONNECTION_STATUS).await?;
        Ok(self.store().await)
    }

    async fn list_connections(&self) -> Result<ConnectionList> {
        self.enter(GET_CONNECTIONS).await?;
        let store = self.store.read().await;
        Ok(ConnectionList {
            connections: store.connections.clone(),
            current: store.current,
        })
    }

    async fn delete_connection(&self, index: usize) -> Result<()> {
        self.enter(DELETE_CONNECTION).await?;
        let mut store = self.store.write().await;
        if index >= store.connections.len() {
            return Err(out_of_range(DELETE_CONNECTION));
        }
        store.connections.remove(index);

        let removed = i64::try_from(index).unwrap();
        if store.connections.is_empty() || store.current == removed {
            store.current = NO_CURRENT;
            store.active = false;
        } else if store.current > removed {
            store.current -= 1;
        }
        Ok(())
    }

    async fn set_current(&self, index: usize) -> Result<()> {
        self.enter(SET_CURRENT).await?;
        let mut store = self.store.write().await;
        if index >= store.connections.len() {
            return Err(out_of_range(SET_CURRENT));
        }
        store.current = i64::try_from(index).unwrap();
        store.active = true;
        Ok(())
    }

    async fn test_credentials(&self, credentials: &Connection) -> Result<VerifyResponse> {
        self.enter(TEST_CREDENTIALS).await?;
        let mut store = self.store.write().await;
        let existing = store
            .connections
            .iter()
            .position(|c| c.domain == credentials.domain && c.account == credentials.account);

        let (index, message) = match existing {
            Some(i) => {
                store.connections[i].token.clone_from(&credentials.token);
                (i, DUPLICATE_MESSAGE)
            }
            None => {
                store.connections.push(credentials.clone());
                (store.connections.len() - 1, SAVED_MESSAGE)
            }
        };
        store.current = i64::try_from(index).unwrap();
        store.active = true;

        Ok(VerifyResponse {
            message: message.to_string(),
        })
    }

    async fn execute(&self, request: &ExecuteRequest) -> Result<ExecuteResult> {
        self.enter(EXECUTE).await?;
        *self.last_execute.write().await = Some(request.clone());
        let full = self.execute_result.read().await.clone();
        Ok(ExecuteResult {
            statuses: full.statuses.filter(|_| request.statuses),
            projects: full.projects.filter(|_| request.projects),
            workflows: full.workflows.filter(|_| request.workflows),
        })
    }
}

// ===== Factory helpers =====

pub fn conn(domain: &str) -> Connection {
    Connection::new(domain, format!("me@{domain}"), format!("tok-{domain}"))
}

pub fn rejected(endpoint: &str, status: u16, message: &str) -> BackendError {
    BackendError::Rejected {
        endpoint: endpoint.to_string(),
        status,
        message: message.to_string(),
    }
}

pub fn unreachable(endpoint: &str) -> BackendError {
    BackendError::NetworkError {
        endpoint: endpoint.to_string(),
        detail: "connection refused".to_string(),
    }
}

pub fn create_test_context(backend: &Arc<MockBackend>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(Arc::clone(backend) as Arc<dyn TrackerBackend>))
}
