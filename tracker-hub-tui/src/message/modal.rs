/// Modal messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    Close,

    /// Confirm (delete modal) or acknowledge (notice, help)
    Confirm,

    /// Move focus between Cancel and Confirm in the delete modal
    ToggleDeleteFocus,
}
