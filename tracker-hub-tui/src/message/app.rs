use super::{BackendEvent, ContentMessage, ModalMessage, NavigationMessage};

/// Top-level message
#[derive(Debug, Clone)]
pub enum AppMessage {
    Quit,

    /// Page switching
    Navigation(NavigationMessage),

    /// Input for the current page
    Content(ContentMessage),

    /// Input for the open modal
    Modal(ModalMessage),

    /// A backend command finished
    Backend(BackendEvent),

    /// Re-read the connection list and the indicator
    Refresh,

    ShowHelp,

    /// Terminal height changed
    Resize(u16),

    /// Cycle the UI language
    SwitchLanguage,

    /// Clear the notice shown in the status bar
    DismissNotice,

    /// Ignored input
    Noop,
}
