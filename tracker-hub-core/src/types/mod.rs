//! Presentation types derived from backend snapshots

mod form;
mod query;
mod registry;
mod view_model;

pub use form::{CredentialInput, FormState, SubmitOutcome};
pub use query::{QuerySelection, ResultTables, Table};
pub use registry::{
    ConnectionListView, ConnectionRow, Indicator, IndicatorColor, RegistryView, RowAction,
    RowButton, SnapshotFetch,
};
pub use view_model::{Notice, NoticeLevel, ViewModel};

// Re-export the backend types the views are built from
pub use tracker_hub_backend::{
    Connection, ConnectionList, ConnectionSnapshot, ExecuteResult, NO_CURRENT,
};
