//! Readings view: the normalized rows, as a scrollable table.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::timestamp::format_timestamp;

/// Render the raw readings table, windowed by the app's scroll offset.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        return;
    };

    let header = Row::new(vec![
        Cell::from("Time"),
        Cell::from(data.series.label.as_str()),
    ])
    .height(1)
    .style(app.theme.header);

    // Window the rows to the visible height (borders + table header)
    let visible = area.height.saturating_sub(3) as usize;
    let offset = app.table_offset.min(data.series.len().saturating_sub(1));

    let rows: Vec<Row> = data
        .series
        .readings
        .iter()
        .skip(offset)
        .take(visible.max(1))
        .map(|r| {
            Row::new(vec![
                Cell::from(format_timestamp(r.timestamp)),
                Cell::from(format!("{:.2}", r.value))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    let widths = [Constraint::Fill(1), Constraint::Fill(1)];

    let title = format!(
        " Readings [{}-{}/{}] ",
        offset + 1,
        (offset + rows.len()).min(data.series.len()),
        data.series.len()
    );

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(table, area);
}
