use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use tracker_hub_core::i18n::t;
use tracker_hub_core::types::{Indicator, IndicatorColor, Notice};

use crate::model::{App, Page};
use crate::view::theme::{Styles, colors};

/// Status bar: indicator, key hints, then the latest notice or status text.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let separator = || Span::styled(" │ ", Style::default().fg(Color::DarkGray));
    let mut spans = indicator_spans(&app.view.indicator);

    for (key, desc) in get_hints(app) {
        spans.push(separator());
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, Styles::hint_desc()));
    }

    if let Some(status) = &app.status_message {
        spans.push(separator());
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Yellow)));
    } else if let Some(notice) = &app.view.notice {
        spans.push(separator());
        spans.extend(notice_spans(notice));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::statusbar()), area);
}

/// `HH:MM` then the message, red for errors.
fn notice_spans(notice: &Notice) -> Vec<Span<'static>> {
    let color = if notice.is_error() {
        colors().error
    } else {
        Color::White
    };
    vec![
        Span::styled(
            format!("{} ", notice.time_label()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            notice.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]
}

/// Coloured dot plus label.
fn indicator_spans(indicator: &Indicator) -> Vec<Span<'static>> {
    let c = colors();
    let dot_color = match indicator.color {
        IndicatorColor::Green => c.success,
        IndicatorColor::Red => c.error,
    };
    vec![
        Span::styled(" ● ", Style::default().fg(dot_color).add_modifier(Modifier::BOLD)),
        Span::styled(indicator.label.clone(), Style::default().fg(Color::White)),
    ]
}

/// Key hints for the current page and focus.
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = &t().hints;
    let mut hints = vec![("Alt+p", texts.switch_page)];

    match app.current_page() {
        Page::Connections if app.connections.focus.is_text() => {
            hints.push(("Tab", texts.next_field));
            hints.push(("Enter", texts.submit));
            hints.push(("Alt+t", texts.check));
        }
        Page::Connections => {
            hints.push(("↑↓", texts.move_up_down));
            hints.push(("Enter", texts.connect));
            hints.push(("Alt+d", texts.delete));
        }
        Page::Data => {
            hints.push(("Space", texts.toggle));
            hints.push(("Enter", texts.execute));
        }
    }

    hints.push(("Alt+r", texts.refresh));
    if app.view.notice.is_some() {
        hints.push(("Esc", texts.dismiss));
    }
    hints.push(("Alt+h", texts.help));
    hints.push(("Alt+q", texts.quit));
    hints
}
