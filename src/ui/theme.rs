//! Color theme constants for the dashboard
//!
//! Dark palette with a red accent for cases and deaths and a green accent
//! for recoveries.

use ratatui::style::Color;

use crate::models::MetricType;

// ============================================================================
// Chrome
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the selection marker
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for the region picker dialog
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Status line error text
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Metrics
// ============================================================================

/// Cases and deaths
pub const COLOR_RED: Color = Color::Rgb(204, 16, 52); // #CC1034

/// Recovered
pub const COLOR_GREEN: Color = Color::Rgb(125, 215, 29); // #7DD71D

/// Coastlines on the map
pub const COLOR_MAP: Color = Color::Gray;

/// Accent color for a metric
pub fn metric_color(metric: MetricType) -> Color {
    if metric.is_red() {
        COLOR_RED
    } else {
        COLOR_GREEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_colors() {
        assert_eq!(metric_color(MetricType::Cases), COLOR_RED);
        assert_eq!(metric_color(MetricType::Deaths), COLOR_RED);
        assert_eq!(metric_color(MetricType::Recovered), COLOR_GREEN);
    }
}
