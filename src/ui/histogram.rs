//! Distribution view: histogram of the measured values.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::app::App;

/// Bin count used by the source dashboard's histogram.
const DEFAULT_BINS: usize = 25;

/// Horizontal cells per bar (bar plus gap).
const BAR_WIDTH: u16 = 3;
const BAR_GAP: u16 = 1;

/// Render the value distribution as a bar chart.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        return;
    };

    let values: Vec<f64> = data.series.values().collect();

    // Fit the default bin count to the terminal width
    let usable = area.width.saturating_sub(2);
    let max_bins = (usable / (BAR_WIDTH + BAR_GAP)).max(1) as usize;
    let bins = DEFAULT_BINS.min(max_bins);

    let counts = bin_counts(&values, bins);
    let (min, width) = bin_layout(&values, bins);

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::default()
                .label(format!("{:.0}", min + width * i as f64).into())
                .value(count)
        })
        .collect();

    let title = format!(" Distribution ({} bins of {:.1} lux) ", bins, width);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(app.theme.histogram_bar))
        .value_style(Style::default().fg(app.theme.highlight));

    frame.render_widget(chart, area);
}

/// Lower bound and width of the bins for a value set.
fn bin_layout(values: &[f64], bins: usize) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() {
        return (0.0, 0.0);
    }
    (min, (max - min) / bins as f64)
}

/// Spread values into `bins` equal-width buckets between min and max.
///
/// The maximum lands in the last bucket; a flat series collapses into the
/// first one.
fn bin_counts(values: &[f64], bins: usize) -> Vec<u64> {
    let mut counts = vec![0u64; bins];
    if values.is_empty() {
        return counts;
    }

    let (min, width) = bin_layout(values, bins);
    let range = width * bins as f64;

    for &v in values {
        let index = if range > 0.0 {
            (((v - min) / range) * bins as f64) as usize
        } else {
            0
        };
        counts[index.min(bins - 1)] += 1;
    }

    counts
}
