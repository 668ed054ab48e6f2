//! Model layer: everything the view reads
//!
//! `App` wraps the core `ViewModel` (indicator, list, form, results, notice)
//! and adds what only the terminal needs: page, focus, highlighted row,
//! requests in flight and the open modal.

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FormField;
pub use navigation::NavigationState;
pub use page::Page;
pub use state::{ConnectionsState, DataState, Modal, ModalState, PendingRequests};
