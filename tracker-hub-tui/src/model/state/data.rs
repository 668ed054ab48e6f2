use tracker_hub_core::i18n::t;
use tracker_hub_core::types::QuerySelection;

/// One checkbox on the data page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOption {
    Projects,
    Workflows,
    Statuses,
}

impl QueryOption {
    pub const ALL: [QueryOption; 3] = [
        QueryOption::Projects,
        QueryOption::Workflows,
        QueryOption::Statuses,
    ];

    pub fn label(self) -> &'static str {
        let texts = &t().query;
        match self {
            QueryOption::Projects => texts.projects,
            QueryOption::Workflows => texts.workflows,
            QueryOption::Statuses => texts.statuses,
        }
    }

    pub fn is_set(self, selection: &QuerySelection) -> bool {
        match self {
            QueryOption::Projects => selection.projects,
            QueryOption::Workflows => selection.workflows,
            QueryOption::Statuses => selection.statuses,
        }
    }

    pub fn toggle(self, selection: &mut QuerySelection) {
        let flag = match self {
            QueryOption::Projects => &mut selection.projects,
            QueryOption::Workflows => &mut selection.workflows,
            QueryOption::Statuses => &mut selection.statuses,
        };
        *flag = !*flag;
    }
}

/// Data page state
#[derive(Debug, Clone, Default)]
pub struct DataState {
    /// Highlighted checkbox
    pub cursor: usize,
    /// Vertical scroll of the result tables
    pub scroll: u16,
    /// Rendered lines of the current results
    pub content_lines: u16,
    /// Visible lines of the results panel
    pub viewport: u16,
}

impl DataState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_option(&self) -> QueryOption {
        QueryOption::ALL[self.cursor.min(QueryOption::ALL.len() - 1)]
    }

    pub fn select_next(&mut self) {
        self.cursor = (self.cursor + 1) % QueryOption::ALL.len();
    }

    pub fn select_previous(&mut self) {
        self.cursor = self
            .cursor
            .checked_sub(1)
            .unwrap_or(QueryOption::ALL.len() - 1);
    }

    /// New results: back to the top.
    pub fn set_content(&mut self, lines: usize) {
        self.content_lines = u16::try_from(lines).unwrap_or(u16::MAX);
        self.scroll = 0;
    }

    pub fn set_viewport(&mut self, height: u16) {
        self.viewport = height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Last scroll offset that still fills the panel.
    pub fn max_scroll(&self) -> u16 {
        self.content_lines.saturating_sub(self.viewport)
    }

    fn page(&self) -> u16 {
        self.viewport.max(1)
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(self.page()).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(self.page());
    }
}
