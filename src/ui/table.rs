//! "Live cases by country" table.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::shaping::{group_thousands, SortedTableRow};

use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

const TITLE: &str = " Live cases by country ";

/// Width of the cases column; fits "999,999,999".
const CASES_WIDTH: u16 = 13;

/// Render rows starting at `offset`.
pub fn render(frame: &mut Frame, area: Rect, rows: &[SortedTableRow], offset: usize, loading: bool) {
    let block = Block::default()
        .title(Span::styled(
            TITLE,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    if rows.is_empty() {
        let text = if loading { "Loading countries…" } else { "No data" };
        let placeholder = Paragraph::new(Span::styled(text, Style::default().fg(COLOR_DIM)));
        frame.render_widget(placeholder.block(block), area);
        return;
    }

    let offset = offset.min(rows.len().saturating_sub(1));
    let body = rows[offset..].iter().map(|row| {
        Row::new(vec![
            Cell::from(row.name.as_str()),
            Cell::from(Line::from(group_thousands(row.cases)).right_aligned()),
        ])
    });

    let header = Row::new(vec![
        Cell::from("Country"),
        Cell::from(Line::from("Cases").right_aligned()),
    ])
    .style(Style::default().fg(COLOR_DIM));

    let table = Table::new(body, [Constraint::Fill(1), Constraint::Length(CASES_WIDTH)])
        .header(header)
        .block(block);

    frame.render_widget(table, area);
}
