//! Braille world map with one circle per country.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Map, MapResolution, Points},
        Block, BorderType, Borders,
    },
    Frame,
};

use crate::state::DEFAULT_ZOOM;
use crate::view_state::MapView;

use super::theme::{metric_color, COLOR_BORDER, COLOR_HEADER, COLOR_MAP};

pub fn render(frame: &mut Frame, area: Rect, map: &MapView) {
    let color = metric_color(map.metric);
    let resolution = if map.viewport.zoom > DEFAULT_ZOOM {
        MapResolution::High
    } else {
        MapResolution::Low
    };
    let centers: Vec<(f64, f64)> = map.visible_markers().map(|m| (m.long, m.lat)).collect();

    let block = Block::default()
        .title(Span::styled(
            format!(" Map \u{00b7} {} ", map.metric),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(map.x_bounds)
        .y_bounds(map.y_bounds)
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution,
                color: COLOR_MAP,
            });
            ctx.layer();
            // Circles reaching into view from off-screen centers still draw
            for marker in &map.markers {
                ctx.draw(&Circle {
                    x: marker.long,
                    y: marker.lat,
                    radius: marker.radius,
                    color,
                });
            }
            ctx.draw(&Points {
                coords: &centers,
                color,
            });
        });

    frame.render_widget(canvas, area);
}
