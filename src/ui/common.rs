//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};

/// Render the header bar with the headline numbers.
///
/// Displays: reading count, current value, time span, and the source.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        let line = Line::from(vec![
            Span::styled(
                " LUXWATCH ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(if app.has_source() {
                "| waiting for data..."
            } else {
                "| no file loaded"
            }),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let span = match (data.series.readings.first(), data.series.readings.last()) {
        (Some(first), Some(last)) => format!(
            "{} → {}",
            first.timestamp.format("%H:%M:%S"),
            last.timestamp.format("%H:%M:%S")
        ),
        _ => "-".to_string(),
    };

    let mut spans = vec![
        Span::styled(" ● ", Style::default().fg(app.theme.highlight)),
        Span::styled("LUXWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            format!("{}", data.series.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" readings │ "),
        Span::styled(
            format!("{:.2} lux", data.stats.current),
            Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" now │ "),
        Span::raw(span),
    ];

    if let Some(desc) = app.source_description() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            desc.to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![
        Line::from(" 1:Overview "),
        Line::from(" 2:Distribution "),
        Line::from(" 3:Readings "),
    ];

    let selected = match app.current_view {
        View::Overview => 0,
        View::Distribution => 1,
        View::Readings => 2,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows the idle prompt, the single per-upload error message, or the
/// available controls. Temporary status messages take precedence.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if let Some(ref data) = app.data {
        let elapsed = data.last_updated.elapsed();

        // Context-sensitive controls
        let controls = match app.current_view {
            View::Overview => "Tab:switch e:export r:reload ?:help q:quit",
            View::Distribution => "Tab:switch e:export r:reload ?:help q:quit",
            View::Readings => "↑↓:scroll PgUp/PgDn:page Tab:switch ?:help q:quit",
        };

        format!(
            " {} | Updated {:.1}s ago | {}",
            app.current_view.label(),
            elapsed.as_secs_f64(),
            controls,
        )
    } else if let Some(ref err) = app.load_error {
        format!(" Error: {} | q:quit r:retry", err)
    } else if app.has_source() {
        " Waiting for readings... | q:quit".to_string()
    } else {
        " Load a CSV file of lux readings to begin: luxwatch --file <path> | q:quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Switch views"),
        Line::from("  1/2/3       Jump to a view"),
        Line::from("  ↑/↓ j/k     Scroll readings"),
        Line::from("  PgUp/PgDn   Scroll 10 rows"),
        Line::from("  Home/End    First/last row"),
        Line::from("  Esc         Back to overview"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Reload the file"),
        Line::from("  e         Export to JSON"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 20u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
