use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use tracker_hub_core::i18n::{current_language, t};
use tracker_hub_core::types::Notice;

use crate::model::{App, Modal};
use crate::view::theme::colors;

/// Renders the active modal, if any.
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { label, focus, .. } => render_confirm_delete(frame, label, *focus),
        Modal::Notice(notice) => render_notice(frame, notice),
        Modal::Help => render_help(frame),
    }
}

/// Centred area clipped to the screen.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Clears the area, draws the frame and returns the inner area.
fn modal_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().modal_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn render_confirm_delete(frame: &mut Frame, label: &str, focus: usize) {
    let texts = t();
    let c = colors();
    let area = centered_rect(56, 9, frame.area());
    let inner = modal_frame(frame, area, texts.modal.confirm_delete_title, c.error);

    let button = |text: &str, focused: bool, color: Color| {
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        Span::styled(format!(" {text} "), style)
    };

    let lines = vec![
        Line::from(texts.modal.confirm_delete_message),
        Line::from(""),
        Line::styled(format!("  {label}"), Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(vec![
            button(texts.common.cancel, focus == 0, Color::White),
            Span::raw("   "),
            button(texts.registry.delete, focus == 1, c.error),
        ])
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_notice(frame: &mut Frame, notice: &Notice) {
    let texts = t();
    let c = colors();
    let (title, border) = if notice.is_error() {
        (texts.modal.error_title, c.error)
    } else {
        (texts.modal.notice_title, c.highlight)
    };
    let area = centered_rect(60, 10, frame.area());
    let inner = modal_frame(frame, area, title, border);

    let lines = vec![
        Line::styled(notice.time_label(), Style::default().fg(c.muted)),
        Line::styled(notice.message.clone(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {}", texts.common.close), Style::default().fg(c.muted)),
        ])
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let area = centered_rect(60, 24, frame.area());
    let inner = modal_frame(frame, area, texts.help.title, c.highlight);

    let heading = |text: &str| {
        Line::styled(
            text.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {key:<16}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc.to_string(), Style::default().fg(c.fg)),
        ])
    };

    let h = &texts.hints;
    let lines = vec![
        heading(texts.help.global_shortcuts),
        entry("Alt+p/o, Alt+1/2", h.switch_page),
        entry("Alt+r", h.refresh),
        entry("Alt+l", texts.help.language),
        entry("Esc", h.dismiss),
        entry("Alt+h / ?", h.help),
        entry("Alt+q / Ctrl+C", h.quit),
        Line::from(""),
        heading(texts.help.connections_shortcuts),
        entry("Tab", h.next_field),
        entry("Enter", h.submit),
        entry("Alt+t", h.check),
        entry("↑↓ / j k", h.move_up_down),
        entry("Enter / c", h.connect),
        entry("Alt+d / x", h.delete),
        Line::from(""),
        heading(texts.help.data_shortcuts),
        entry("↑↓", h.move_up_down),
        entry("Space", h.toggle),
        entry("Enter", h.execute),
        Line::from(""),
        Line::styled(
            format!(
                "{}: {}",
                texts.help.language,
                current_language().display_name()
            ),
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
