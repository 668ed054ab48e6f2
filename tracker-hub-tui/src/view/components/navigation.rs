use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

/// Left navigation panel
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            let content = format!("{prefix}{} {}", item.icon, item.page.title());
            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
