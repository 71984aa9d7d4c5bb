//! One-line status bar: loading marker or last error on the left, key
//! hints on the right.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view_state::DashboardView;

use super::helpers::{spinner, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR};

const KEY_HINTS: &str = "1-3 metric \u{00b7} r region \u{00b7} w worldwide \u{00b7} j/k scroll \u{00b7} q quit ";

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView, tick: u64) {
    if area.height == 0 {
        return;
    }

    let hints_width = KEY_HINTS.chars().count();
    let left_width = (area.width as usize).saturating_sub(hints_width + 1);

    let left = if let Some(error) = view.error {
        let text = format!(" {} {} (Esc to dismiss)", error.code, error.message);
        Line::from(Span::styled(
            truncate_to_width(&text, left_width),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ))
    } else if view.loading {
        Line::from(vec![
            Span::styled(format!(" {} ", spinner(tick)), Style::default().fg(COLOR_ACCENT)),
            Span::styled("Loading", Style::default().fg(COLOR_DIM)),
        ])
    } else {
        Line::default()
    };

    let [left_area, hints_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(hints_width as u16)])
            .areas(area);

    frame.render_widget(Paragraph::new(left), left_area);
    frame.render_widget(
        Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Right),
        hints_area,
    );
}
