use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use tracker_hub_core::i18n::t;

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// Title bar and status bar rows.
const BARS_HEIGHT: u16 = 2;

/// Visible result lines on the data page for a terminal `height` rows tall.
pub fn results_viewport(height: u16) -> u16 {
    // Page block borders
    pages::data::results_viewport(height.saturating_sub(BARS_HEIGHT + 2))
}

/// Renders the whole screen.
pub fn render(app: &App, frame: &mut Frame) {
    // Title bar, main area, status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(frame, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(1)])
        .split(rows[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, rows[2]);

    // Modals last, on top
    components::modal::render(app, frame);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION"));
    let paragraph =
        Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let page = app.current_page();
    let block = Block::default()
        .title(format!(" {} ", page.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(!app.modal.is_open()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match page {
        Page::Connections => pages::connections::render(app, frame, inner),
        Page::Data => pages::data::render(app, frame, inner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_viewport_leaves_room_for_chrome() {
        // bars 2, page borders 2, options 6, results borders 2
        assert_eq!(results_viewport(40), 28);
        assert_eq!(results_viewport(5), 0);
    }
}
