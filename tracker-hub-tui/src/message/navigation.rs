use crate::model::Page;

/// Page navigation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    Next,
    Previous,
    /// Jump straight to a page
    Go(Page),
}
