//! "Worldwide new {metric}" line chart.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::models::ChartPoint;
use crate::shaping::group_thousands;
use crate::view_state::DashboardView;

use super::theme::{metric_color, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

const DATE_FORMAT: &str = "%m/%d";

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", view.chart_title()),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let (Some(first), Some(last)) = (view.chart.first(), view.chart.last()) else {
        let placeholder = Paragraph::new(Span::styled("No history yet", Style::default().fg(COLOR_DIM)));
        frame.render_widget(placeholder.block(block), area);
        return;
    };

    let data = series(&view.chart);
    let max = view.chart.iter().map(|p| p.value).max().unwrap_or(0);
    let y_top = (max as f64 * 1.1).max(1.0);
    let x_top = (data.len().saturating_sub(1) as f64).max(1.0);

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(metric_color(view.metric)))
        .data(&data);

    let x_axis = Axis::default()
        .style(Style::default().fg(COLOR_DIM))
        .bounds([0.0, x_top])
        .labels(vec![
            first.date.format(DATE_FORMAT).to_string(),
            last.date.format(DATE_FORMAT).to_string(),
        ]);
    let y_axis = Axis::default()
        .style(Style::default().fg(COLOR_DIM))
        .bounds([0.0, y_top])
        .labels(vec!["0".to_string(), group_thousands(max)]);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Points as `(day index, new count)`.
fn series(points: &[ChartPoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_series_uses_day_index() {
        let day = |d| NaiveDate::from_ymd_opt(2021, 3, d).unwrap();
        let points = vec![
            ChartPoint { date: day(1), value: 7 },
            ChartPoint { date: day(2), value: 0 },
        ];
        assert_eq!(series(&points), vec![(0.0, 7.0), (1.0, 0.0)]);
    }
}
