/// Requests in flight. A control whose request is pending renders disabled
/// and ignores input until the matching backend event arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingRequests {
    pub refresh: bool,
    pub submit: bool,
    pub check: bool,
    /// Connect or delete on a row
    pub row: bool,
    pub query: bool,
}

impl PendingRequests {
    pub fn any(&self) -> bool {
        self.refresh || self.submit || self.check || self.row || self.query
    }
}
