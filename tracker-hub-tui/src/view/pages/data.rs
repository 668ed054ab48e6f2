use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use tracker_hub_core::i18n::t;
use tracker_hub_core::types::{ResultTables, Table};

use crate::model::App;
use crate::model::state::QueryOption;
use crate::view::theme::{Styles, colors};

const COLUMN_GAP: usize = 2;
/// Checkbox panel: three options, the button, two borders.
const OPTIONS_HEIGHT: u16 = 6;

/// Query options, then the result tables.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(OPTIONS_HEIGHT), Constraint::Min(3)])
        .split(area);

    render_options(app, frame, chunks[0]);
    render_results(app, frame, chunks[1]);
}

fn render_options(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().query;
    let c = colors();
    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true));

    let mut lines: Vec<Line> = QueryOption::ALL
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let checked = if option.is_set(&app.view.selection) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if i == app.data.cursor {
                Styles::selected()
            } else if app.pending.query {
                Styles::button_disabled()
            } else {
                Style::default().fg(c.fg)
            };
            Line::from(Span::styled(format!("  {checked} {}", option.label()), style))
        })
        .collect();

    let (label, enabled) = if app.pending.query {
        (texts.running, false)
    } else {
        (texts.execute, true)
    };
    let button_style = if enabled {
        Styles::button()
    } else {
        Styles::button_disabled()
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("[{label}]"), button_style),
        Span::styled(" Enter", Style::default().fg(c.muted)),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_results(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().query;
    let block = Block::default()
        .title(format!(" {} ", texts.results))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let lines = match &app.view.results {
        Some(tables) if !tables.is_empty() => tables_to_lines(tables),
        Some(_) => vec![muted_line(texts.empty_result)],
        None => Vec::new(),
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.data.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Visible result lines for a page body of `height` rows.
pub fn results_viewport(height: u16) -> u16 {
    height.saturating_sub(OPTIONS_HEIGHT + 2)
}

/// Lines the results panel renders for `tables`.
pub fn result_line_count(tables: &ResultTables) -> usize {
    if tables.is_empty() {
        1
    } else {
        tables_to_lines(tables).len()
    }
}

fn muted_line(text: &str) -> Line<'static> {
    Line::styled(format!("  {text}"), Style::default().fg(colors().muted))
}

/// All tables one after the other, separated by a blank line.
fn tables_to_lines(tables: &ResultTables) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(table_to_lines(table));
    }
    lines
}

/// Title, header and one or more lines per row. Multi-line cells push
/// the row down; columns are padded to their widest line.
fn table_to_lines(table: &Table) -> Vec<Line<'static>> {
    let c = colors();
    let widths = column_widths(table);

    let mut lines = vec![Line::styled(
        format!(" {}", table.title),
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )];

    let header: Vec<&str> = table.headers.iter().map(String::as_str).collect();
    lines.push(Line::styled(
        format_cells(&header, &widths),
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    ));
    let total: usize = widths.iter().sum::<usize>() + COLUMN_GAP * widths.len();
    lines.push(Line::styled(
        format!(" {}", "─".repeat(total)),
        Style::default().fg(c.border),
    ));

    for row in &table.rows {
        let cells: Vec<Vec<&str>> = row.iter().map(|cell| cell.lines().collect()).collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
        for line_index in 0..height {
            let parts: Vec<&str> = cells
                .iter()
                .map(|cell| cell.get(line_index).copied().unwrap_or(""))
                .collect();
            lines.push(Line::styled(
                format_cells(&parts, &widths),
                Style::default().fg(c.fg),
            ));
        }
    }

    lines
}

/// Display width of the widest line in each column, header included.
fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.width()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            let widest = cell.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(widest),
                None => widths.push(widest),
            }
        }
    }
    widths
}

fn format_cells(cells: &[&str], widths: &[usize]) -> String {
    let mut out = String::from(" ");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).copied().unwrap_or("");
        out.push_str(cell);
        let padding = width.saturating_sub(cell.width()) + COLUMN_GAP;
        out.push_str(&" ".repeat(padding));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn columns_align_on_display_width() {
        let table = Table {
            title: "Estados".into(),
            headers: vec!["ID".into(), "Nombre".into()],
            rows: vec![
                vec!["1".into(), "Año".into()],
                vec!["10".into(), "Hecho".into()],
            ],
        };

        let lines = plain(&table_to_lines(&table));

        assert_eq!(lines[0], " Estados");
        assert_eq!(lines[1], " ID  Nombre");
        assert_eq!(lines[3], " 1   Año");
        assert_eq!(lines[4], " 10  Hecho");
    }

    #[test]
    fn multi_line_cells_take_several_lines() {
        let table = Table {
            title: "Workflows".into(),
            headers: vec!["Workflow".into(), "Transiciones".into()],
            rows: vec![vec![
                "Default".into(),
                "Desde: Inicio → Hasta: 1\nDesde: 1 → Hasta: 3".into(),
            ]],
        };

        let lines = plain(&table_to_lines(&table));

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], " Default   Desde: Inicio → Hasta: 1");
        assert_eq!(lines[4], "           Desde: 1 → Hasta: 3");
    }

    #[test]
    fn tables_are_separated_by_blank_line() {
        let table = Table {
            title: "T".into(),
            headers: vec!["A".into()],
            rows: vec![],
        };
        let tables = ResultTables {
            tables: vec![table.clone(), table],
        };

        let lines = plain(&tables_to_lines(&tables));

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[3], "");
        assert_eq!(result_line_count(&tables), 7);
    }
}
