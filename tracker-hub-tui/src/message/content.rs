/// Messages for the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== Focus and selection ==========
    /// Focus the next form field (wraps to the list)
    NextField,
    /// Focus the previous form field
    PrevField,
    /// Highlight the previous row or option
    SelectPrevious,
    /// Highlight the next row or option
    SelectNext,

    // ========== Text input ==========
    Input(char),
    Backspace,

    // ========== Connections page ==========
    /// Save the typed credentials
    Submit,
    /// Verify the typed credentials without leaving the form
    Check,
    /// Make the highlighted connection current
    Connect,
    /// Ask to delete the highlighted connection
    Delete,

    // ========== Data page ==========
    /// Flip the highlighted query option
    Toggle,
    /// Run the query
    Execute,
    ScrollUp,
    ScrollDown,
}
