//! Registry views: snapshot reads, the status indicator and connection rows

use serde::Serialize;
use tracker_hub_backend::{Connection, ConnectionList, ConnectionSnapshot};

use crate::i18n::t;

/// Outcome of a status read. Never an error: an unusable answer is just
/// "unavailable", which renders as disconnected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotFetch {
    Ready(ConnectionSnapshot),
    Unavailable { reason: String },
}

impl SnapshotFetch {
    pub fn snapshot(&self) -> Option<&ConnectionSnapshot> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            Self::Unavailable { .. } => None,
        }
    }

    /// Active connection, when the read succeeded and denotes "connected".
    pub fn active_connection(&self) -> Option<&Connection> {
        self.snapshot().and_then(ConnectionSnapshot::active_connection)
    }

    pub fn is_connected(&self) -> bool {
        self.active_connection().is_some()
    }
}

// ============ Indicator ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndicatorColor {
    Green,
    Red,
}

/// Connected/disconnected badge shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub color: IndicatorColor,
    pub label: String,
}

impl Indicator {
    /// Green, labelled with the connection's domain.
    pub fn connected(domain: impl Into<String>) -> Self {
        Self {
            color: IndicatorColor::Green,
            label: domain.into(),
        }
    }

    /// Red, labelled with the localised "disconnected" text.
    pub fn disconnected() -> Self {
        Self {
            color: IndicatorColor::Red,
            label: t().indicator.disconnected.to_string(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.color == IndicatorColor::Green
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Self::disconnected()
    }
}

// ============ Rows ============

/// Action a row can dispatch. Carries the row's own index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RowAction {
    Connect(usize),
    Delete(usize),
}

impl RowAction {
    pub fn index(self) -> usize {
        match self {
            Self::Connect(index) | Self::Delete(index) => index,
        }
    }

    /// Notice text once the action went through.
    pub fn done_message(self) -> &'static str {
        match self {
            Self::Connect(_) => t().registry.selected,
            Self::Delete(_) => t().registry.deleted,
        }
    }

    /// Notice prefix when the action failed.
    pub fn failed_message(self) -> &'static str {
        match self {
            Self::Connect(_) => t().registry.select_failed,
            Self::Delete(_) => t().registry.delete_failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowButton {
    pub label: String,
    pub enabled: bool,
}

/// One saved connection as rendered in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionRow {
    pub index: usize,
    /// `domain — account`
    pub label: String,
    pub is_current: bool,
    pub connect: RowButton,
    pub delete: RowButton,
}

impl ConnectionRow {
    pub fn new(index: usize, connection: &Connection, is_current: bool) -> Self {
        let texts = &t().registry;
        let connect_label = if is_current {
            texts.connected
        } else {
            texts.connect
        };
        Self {
            index,
            label: connection.display_name(),
            is_current,
            connect: RowButton {
                label: connect_label.to_string(),
                enabled: !is_current,
            },
            delete: RowButton {
                label: texts.delete.to_string(),
                enabled: true,
            },
        }
    }

    /// Actions this row currently offers, in button order.
    pub fn actions(&self) -> Vec<RowAction> {
        let mut actions = Vec::with_capacity(2);
        if let Some(connect) = self.connect_action() {
            actions.push(connect);
        }
        if let Some(delete) = self.delete_action() {
            actions.push(delete);
        }
        actions
    }

    pub fn connect_action(&self) -> Option<RowAction> {
        self.connect.enabled.then_some(RowAction::Connect(self.index))
    }

    pub fn delete_action(&self) -> Option<RowAction> {
        self.delete.enabled.then_some(RowAction::Delete(self.index))
    }
}

/// The rendered connection list. Rebuilt from scratch on every read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionListView {
    pub rows: Vec<ConnectionRow>,
}

impl ConnectionListView {
    pub fn from_list(list: &ConnectionList) -> Self {
        let current = list.current_index();
        let rows = list
            .connections
            .iter()
            .enumerate()
            .map(|(index, connection)| ConnectionRow::new(index, connection, current == Some(index)))
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&ConnectionRow> {
        self.rows.get(index)
    }
}

/// List plus indicator, produced by one refresh cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistryView {
    pub list: ConnectionListView,
    pub indicator: Indicator,
}
