//! The three aggregate counter boxes.
//!
//! ```text
//! ╭ Coronavirus Cases ╮╭ Recovered ─────────╮╭ Deaths ────────────╮
//! │ +5                ││ +2                 ││ +1                 │
//! │ 100 Total         ││ 50 Total           ││ 10 Total           │
//! ╰───────────────────╯╰────────────────────╯╰────────────────────╯
//! ```

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::MetricType;
use crate::view_state::{CounterView, DashboardView};

use super::theme::{metric_color, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Render the counters and return each box's area for click handling.
pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView) -> Vec<(Rect, MetricType)> {
    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

    view.counters
        .iter()
        .zip(columns.iter())
        .map(|(counter, &column)| {
            render_counter(frame, column, counter);
            (column, counter.metric)
        })
        .collect()
}

fn render_counter(frame: &mut Frame, area: Rect, counter: &CounterView) {
    let color = metric_color(counter.metric);

    let (border_style, title_style) = if counter.active {
        (
            Style::default().fg(color),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(COLOR_BORDER),
            Style::default().fg(COLOR_HEADER),
        )
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", counter.title), title_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let lines = vec![
        Line::from(Span::styled(
            counter.today.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(counter.total.clone()),
            Span::styled(" Total", Style::default().fg(COLOR_DIM)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
