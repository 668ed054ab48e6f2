//! Wire types exchanged with the connection backend

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Value of `current` when no connection is selected.
pub const NO_CURRENT: i64 = -1;

const fn no_current() -> i64 {
    NO_CURRENT
}

/// Accepts a missing or `null` array as an empty one.
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ============ Connections ============

/// One stored credential triple for the remote tracker.
///
/// The token is round-tripped to the backend but never shown: the `Debug`
/// output redacts it, and the display helpers leave it out.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    /// Tracker instance, e.g. `acme.atlassian.net`
    pub domain: String,
    /// Account identifier (an e-mail address for Jira Cloud)
    #[serde(rename = "correo")]
    pub account: String,
    /// API token
    pub token: String,
}

impl Connection {
    pub fn new(
        domain: impl Into<String>,
        account: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            account: account.into(),
            token: token.into(),
        }
    }

    /// Row label: `domain — account`.
    pub fn display_name(&self) -> String {
        format!("{} — {}", self.domain, self.account)
    }

    /// Whether all three fields carry a non-blank value.
    pub fn is_complete(&self) -> bool {
        !self.domain.trim().is_empty()
            && !self.account.trim().is_empty()
            && !self.token.trim().is_empty()
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("domain", &self.domain)
            .field("account", &self.account)
            .field("token", &"***")
            .finish()
    }
}

/// Resolves a raw `current` value against a list length.
///
/// Anything negative or past the end means "nothing selected".
fn resolve_index(current: i64, len: usize) -> Option<usize> {
    usize::try_from(current).ok().filter(|&i| i < len)
}

/// Full registry state as returned by `GET /connection_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSnapshot {
    /// Saved connections, in display order
    #[serde(default, deserialize_with = "nullable_vec")]
    pub connections: Vec<Connection>,
    /// Index of the selected connection, `-1` (or out of range) for none
    #[serde(default = "no_current")]
    pub current: i64,
    /// Gate for `current`: when false the registry is disconnected
    #[serde(default)]
    pub active: bool,
}

impl Default for ConnectionSnapshot {
    fn default() -> Self {
        Self {
            connections: Vec::new(),
            current: NO_CURRENT,
            active: false,
        }
    }
}

impl ConnectionSnapshot {
    /// Whether `index` addresses an entry of this snapshot.
    pub fn is_index_valid(&self, index: i64) -> bool {
        resolve_index(index, self.connections.len()).is_some()
    }

    /// `current` as a list index, when it is in range.
    ///
    /// Says nothing about `active`; use [`Self::active_index`] for that.
    pub fn current_index(&self) -> Option<usize> {
        resolve_index(self.current, self.connections.len())
    }

    /// Index of the active connection.
    ///
    /// `Some` iff `active` is set, the list is non-empty and `current` is in range.
    pub fn active_index(&self) -> Option<usize> {
        if self.active {
            self.current_index()
        } else {
            None
        }
    }

    /// Whether the snapshot denotes a connected registry.
    pub fn is_connected(&self) -> bool {
        self.active_index().is_some()
    }

    /// The active connection, if the snapshot is connected.
    pub fn active_connection(&self) -> Option<&Connection> {
        self.active_index().and_then(|i| self.connections.get(i))
    }
}

/// Registry listing as returned by `GET /getconnections`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionList {
    #[serde(default, deserialize_with = "nullable_vec")]
    pub connections: Vec<Connection>,
    #[serde(default = "no_current")]
    pub current: i64,
}

impl Default for ConnectionList {
    fn default() -> Self {
        Self {
            connections: Vec::new(),
            current: NO_CURRENT,
        }
    }
}

impl ConnectionList {
    /// `current` as a list index, when it is in range.
    pub fn current_index(&self) -> Option<usize> {
        resolve_index(self.current, self.connections.len())
    }
}

// ============ Verification ============

/// Body of a `POST /testjira` response (success and rejection alike).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub message: String,
}

// ============ Query execution ============

/// Body of `POST /execute`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecuteRequest {
    #[serde(flatten)]
    pub credentials: Connection,
    #[serde(rename = "Proyectos")]
    pub projects: bool,
    #[serde(rename = "Workflows")]
    pub workflows: bool,
    #[serde(rename = "Estados")]
    pub statuses: bool,
}

/// Payload returned by `POST /execute`.
///
/// Each collection is independently optional; the backend merges fresh results
/// into what it already holds for the domain, so any of them may be present
/// even when not requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteResult {
    #[serde(default, rename = "estados")]
    pub statuses: Option<Vec<TrackerStatus>>,
    #[serde(default, rename = "proyectos")]
    pub projects: Option<Vec<TrackerProject>>,
    #[serde(default)]
    pub workflows: Option<Vec<TrackerWorkflow>>,
}

impl ExecuteResult {
    pub fn is_empty(&self) -> bool {
        self.statuses.is_none() && self.projects.is_none() && self.workflows.is_none()
    }
}

/// Issue status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerStatus {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerProject {
    pub key: String,
    pub name: String,
    #[serde(rename = "projectCategory", skip_serializing_if = "Option::is_none")]
    pub category: Option<ProjectCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectCategory {
    pub name: String,
}

/// Workflow with its transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerWorkflow {
    pub id: WorkflowId,
    #[serde(deserialize_with = "nullable_vec")]
    pub transitions: Vec<Transition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowId {
    pub name: String,
}

/// Edge of a workflow. An empty `from` marks the initial transition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transition {
    #[serde(deserialize_with = "nullable_vec")]
    pub from: Vec<String>,
    pub to: String,
}
