//! Region picker dialog
//!
//! Centered overlay listing the worldwide entry and every country, filtered
//! by the typed query.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::RegionPicker;
use crate::models::RegionOption;

use super::helpers::{centered_rect, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 20;

/// Rows used by the filter line, its spacer and the hint line
const CHROME_ROWS: u16 = 3;

pub fn render(frame: &mut Frame, picker: &mut RegionPicker, options: &[RegionOption], selected_iso: &str) {
    let dialog_area = centered_rect(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            " Select Region ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    let visible_rows = inner.height.saturating_sub(CHROME_ROWS) as usize;
    picker.ensure_visible(visible_rows);

    let filtered = picker.filtered(options);
    let name_width = (inner.width as usize).saturating_sub(2);

    let mut lines: Vec<Line> = Vec::with_capacity(visible_rows + CHROME_ROWS as usize);
    lines.push(Line::from(vec![
        Span::styled("filter ", Style::default().fg(COLOR_DIM)),
        Span::styled(format!("{}_", picker.query), Style::default().fg(COLOR_ACCENT)),
    ]));
    lines.push(Line::from(""));

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled("No matching region", Style::default().fg(COLOR_DIM))));
    }

    for (idx, option) in filtered
        .iter()
        .enumerate()
        .skip(picker.scroll_offset)
        .take(visible_rows)
    {
        let is_selected = idx == picker.selected_index;
        let marker = if is_selected { "▶ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else if option.iso_code.eq_ignore_ascii_case(selected_iso) {
            Style::default().fg(COLOR_HEADER)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(truncate_to_width(&option.display_name, name_width), style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);

    if inner.height > 0 {
        let hint_area = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Enter select \u{00b7} Esc cancel",
                Style::default().fg(COLOR_DIM),
            )),
            hint_area,
        );
    }
}
