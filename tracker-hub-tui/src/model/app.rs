use tracker_hub_core::i18n::t;
use tracker_hub_core::types::{ConnectionRow, Notice, ViewModel};

use super::{ConnectionsState, DataState, ModalState, NavigationState, Page, PendingRequests};

/// Application state
pub struct App {
    pub should_quit: bool,

    pub navigation: NavigationState,

    /// Core presentation state: indicator, list, form, results, notice
    pub view: ViewModel,

    /// Transient status text (e.g. "Loading...")
    pub status_message: Option<String>,

    // === Page state ===
    pub connections: ConnectionsState,
    pub data: DataState,

    pub pending: PendingRequests,

    pub modal: ModalState,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            navigation: NavigationState::new(),
            view: ViewModel::default(),
            status_message: None,
            connections: ConnectionsState::new(),
            data: DataState::new(),
            pending: PendingRequests::default(),
            modal: ModalState::new(),
        }
    }

    pub fn current_page(&self) -> Page {
        self.navigation.current()
    }

    /// Row under the highlight, if the list has any.
    pub fn selected_row(&self) -> Option<&ConnectionRow> {
        self.view.registry.row(self.connections.selected)
    }

    /// Shows a notice in the status bar; errors also open a modal.
    pub fn show_notice(&mut self, notice: Notice) {
        if notice.is_error() {
            self.modal.show_notice(notice.clone());
        }
        self.view.notify(notice);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clears the loading text once nothing is in flight.
    pub fn settle_status(&mut self) {
        if !self.pending.any() {
            self.clear_status();
        }
    }

    pub fn set_loading(&mut self) {
        self.set_status(t().status_bar.loading);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
