//! Overview rendering: the four metric tiles and the time-series chart.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::timestamp::format_axis_label;
use crate::data::SensorData;

/// Render the Overview: four headline numbers above the lux-over-time line.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Metric tiles
        Constraint::Min(8),    // Line chart
    ])
    .split(area);

    render_tiles(frame, app, data, chunks[0]);
    render_chart(frame, app, data, chunks[1]);
}

fn render_tiles(frame: &mut Frame, app: &App, data: &SensorData, area: Rect) {
    let tiles = Layout::horizontal([
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
    ])
    .split(area);

    let stats = &data.stats;
    render_tile(frame, app, tiles[0], "Current", stats.current);
    render_tile(frame, app, tiles[1], "Mean", stats.mean);
    render_tile(frame, app, tiles[2], "Max", stats.max);
    render_tile(frame, app, tiles[3], "Min", stats.min);
}

fn render_tile(frame: &mut Frame, app: &App, area: Rect, label: &str, value: f64) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let paragraph = Paragraph::new(format!("{:.2} lux", value))
        .style(app.theme.metric_value)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

fn render_chart(frame: &mut Frame, app: &App, data: &SensorData, area: Rect) {
    let points: Vec<(f64, f64)> = data
        .series
        .readings
        .iter()
        .map(|r| (r.timestamp.and_utc().timestamp() as f64, r.value))
        .collect();

    let (x_min, x_max) = padded_bounds(points.iter().map(|p| p.0), 60.0);
    let (y_min, y_max) = padded_bounds(points.iter().map(|p| p.1), 1.0);

    let dataset = Dataset::default()
        .name(data.series.label.clone())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(app.theme.series_line))
        .data(&points);

    let x_labels = edge_and_mid_labels(&data.series);
    let y_labels = vec![
        format!("{:.0}", y_min),
        format!("{:.0}", (y_min + y_max) / 2.0),
        format!("{:.0}", y_max),
    ];

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(" Luminosity over time ")
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.border))
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.border))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Min/max of a value stream, padded so a flat series still has a range.
fn padded_bounds(values: impl Iterator<Item = f64>, pad: f64) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, pad);
    }
    if min == max {
        (min - pad, max + pad)
    } else {
        (min, max)
    }
}

/// First, middle, and last timestamps as axis labels.
fn edge_and_mid_labels(series: &crate::data::ReadingSeries) -> Vec<String> {
    let readings = &series.readings;
    match readings.len() {
        0 => Vec::new(),
        1 => vec![format_axis_label(readings[0].timestamp)],
        n => vec![
            format_axis_label(readings[0].timestamp),
            format_axis_label(readings[n / 2].timestamp),
            format_axis_label(readings[n - 1].timestamp),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_bounds_spread_values() {
        let (min, max) = padded_bounds([120.0, 450.0, 300.0].into_iter(), 1.0);
        assert_eq!(min, 120.0);
        assert_eq!(max, 450.0);
    }

    #[test]
    fn test_padded_bounds_flat_series() {
        let (min, max) = padded_bounds([42.0].into_iter(), 1.0);
        assert_eq!(min, 41.0);
        assert_eq!(max, 43.0);
    }

    #[test]
    fn test_padded_bounds_empty() {
        let (min, max) = padded_bounds(std::iter::empty(), 60.0);
        assert!(min < max);
    }
}
