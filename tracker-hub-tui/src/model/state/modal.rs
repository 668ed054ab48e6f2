use tracker_hub_core::types::Notice;

/// Modal kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Delete confirmation for one row
    ConfirmDelete {
        index: usize,
        /// `domain — account` of the row
        label: String,
        /// 0 = Cancel, 1 = Confirm
        focus: usize,
    },
    /// Error notice that needs acknowledging
    Notice(Notice),
    Help,
}

/// Modal state
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.active = Some(Modal::Notice(notice));
    }

    /// Opens the delete confirmation with Cancel focused.
    pub fn confirm_delete(&mut self, index: usize, label: impl Into<String>) {
        self.active = Some(Modal::ConfirmDelete {
            index,
            label: label.into(),
            focus: 0,
        });
    }
}
