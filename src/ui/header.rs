//! Dashboard header: title on the left, selected region on the right.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view_state::DashboardView;

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

const TITLE: &str = "COVID-19 TRACKER";

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView) {
    if area.height == 0 {
        return;
    }

    let title = Line::from(Span::styled(
        format!(" {}", TITLE),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    ));
    let region = Line::from(vec![
        Span::styled("region ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!("{} \u{25be} ", view.region_name),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]);
    let [title_area, region_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(region.width() as u16)])
            .areas(area);

    frame.render_widget(Paragraph::new(title), title_area);
    frame.render_widget(Paragraph::new(region).alignment(Alignment::Right), region_area);
}
