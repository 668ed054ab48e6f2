use super::Page;

/// Navigation entry
#[derive(Debug, Clone)]
pub struct NavItem {
    pub page: Page,
    pub icon: &'static str,
}

/// Left navigation panel
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub items: Vec<NavItem>,
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    page: Page::Connections,
                    icon: "🔑",
                },
                NavItem {
                    page: Page::Data,
                    icon: "📊",
                },
            ],
            selected: 0,
        }
    }

    pub fn current(&self) -> Page {
        self.items
            .get(self.selected)
            .map_or_else(Page::default, |item| item.page)
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.items.len() - 1);
    }

    pub fn select_page(&mut self, page: Page) {
        if let Some(index) = self.items.iter().position(|item| item.page == page) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
