use tracker_hub_core::CoreResult;
use tracker_hub_core::types::{
    ConnectionListView, CredentialInput, Indicator, QuerySelection, RegistryView, ResultTables,
    RowAction, SubmitOutcome,
};

/// Backend work requested by the update layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List, then indicator
    Refresh,
    /// Verify and store the typed credentials
    Submit(CredentialInput),
    /// Verify the typed credentials for the indicator
    Check(CredentialInput),
    /// Connect or delete a row, then re-read
    Row(RowAction),
    Execute(QuerySelection),
}

/// Result of a finished [`Command`].
#[derive(Debug, Clone)]
pub enum BackendEvent {
    Refreshed(RegistryView),
    Submitted(CoreResult<SubmitOutcome>),
    Checked {
        indicator: Indicator,
        /// Re-read list after a passing check
        list: Option<ConnectionListView>,
    },
    RowActionDone {
        action: RowAction,
        result: CoreResult<RegistryView>,
    },
    QueryDone(CoreResult<ResultTables>),
}
