use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use tracker_hub_core::i18n::t;
use tracker_hub_core::types::{ConnectionRow, RowButton};

use crate::model::{App, FormField};
use crate::view::theme::{Styles, colors};

/// Credential form above the saved connection list.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(area);

    render_form(app, frame, chunks[0]);
    render_list(app, frame, chunks[1]);
}

fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().form;
    let c = colors();
    let form_focused = app.connections.focus.is_text();
    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(form_focused));

    let input = &app.view.input;
    let masked = "•".repeat(input.token.chars().count().min(32));
    let mut lines = vec![
        field_line(app, FormField::Domain, texts.domain, &input.domain),
        field_line(app, FormField::Account, texts.account, &input.account),
        field_line(app, FormField::Token, texts.token, &masked),
        Line::from(""),
    ];

    let submit_label = if app.pending.submit {
        texts.submitting
    } else {
        texts.submit
    };
    let check_label = if app.pending.check {
        texts.checking
    } else {
        texts.check
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        button_span(submit_label, !app.pending.submit),
        Span::styled(" Enter   ", Style::default().fg(c.muted)),
        button_span(check_label, !app.pending.check),
        Span::styled(" Alt+t", Style::default().fg(c.muted)),
    ]));

    if let Some(message) = app.view.form.message() {
        let color = if app.view.form.is_success() {
            c.success
        } else {
            c.error
        };
        lines.push(Line::styled(format!("  {message}"), Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// `label: value` with a cursor on the focused field.
fn field_line(app: &App, field: FormField, label: &str, value: &str) -> Line<'static> {
    let c = colors();
    let focused = app.connections.focus == field;
    let (marker, value_style) = if focused {
        ("▶ ", Style::default().fg(c.highlight))
    } else {
        ("  ", Style::default().fg(c.fg))
    };
    let cursor = if focused && !app.pending.submit {
        "▎"
    } else {
        ""
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(c.highlight)),
        Span::styled(format!("{label:<10}"), Style::default().fg(c.muted)),
        Span::styled(format!("{value}{cursor}"), value_style),
    ])
}

fn button_span(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Styles::button()
    } else {
        Styles::button_disabled()
    };
    Span::styled(format!("[{label}]"), style)
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().registry;
    let list_focused = !app.connections.focus.is_text();
    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(list_focused));

    if app.view.registry.is_empty() {
        let empty = Paragraph::new(Line::styled(
            format!("  {}", texts.empty),
            Style::default().fg(colors().muted),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .view
        .registry
        .rows
        .iter()
        .map(|row| {
            let highlighted = list_focused && row.index == app.connections.selected;
            ListItem::new(row_line(row, highlighted, app.pending.row))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.connections.selected));

    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

/// One row: current marker, label, then its buttons.
fn row_line(row: &ConnectionRow, highlighted: bool, busy: bool) -> Line<'static> {
    let c = colors();
    let label_style = if highlighted {
        Styles::selected()
    } else if row.is_current {
        Style::default().fg(c.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let marker = if row.is_current { "● " } else { "  " };

    Line::from(vec![
        Span::styled(format!(" {marker}"), Style::default().fg(c.success)),
        Span::styled(row.label.clone(), label_style),
        Span::raw("  "),
        row_button(&row.connect, busy),
        Span::raw(" "),
        row_button(&row.delete, busy),
    ])
}

/// A row button is pressable only when the row offers it and no other row
/// action is running.
fn row_button(button: &RowButton, busy: bool) -> Span<'static> {
    button_span(&button.label, button.enabled && !busy)
}
