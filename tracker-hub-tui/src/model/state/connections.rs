use crate::model::FormField;

/// Connections page state
#[derive(Debug, Clone, Default)]
pub struct ConnectionsState {
    /// Focused form field, or the list
    pub focus: FormField,
    /// Highlighted row
    pub selected: usize,
}

impl ConnectionsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keeps the highlight on an existing row after the list was replaced.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
