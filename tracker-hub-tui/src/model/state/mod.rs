//! Per-page and modal state

mod connections;
mod data;
mod modal;
mod pending;

pub use connections::ConnectionsState;
pub use data::{DataState, QueryOption};
pub use modal::{Modal, ModalState};
pub use pending::PendingRequests;
