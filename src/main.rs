// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod app;
mod data;
mod events;
mod source;
mod ui;

use app::{App, View};
use data::{SensorData, SystemClock};
use source::{DataSource, FileSource};
use ui::Theme;

#[derive(Parser, Debug)]
#[command(name = "luxwatch")]
#[command(about = "Terminal dashboard for luminosity sensor CSV logs")]
struct Args {
    /// Path to the CSV file of lux readings.
    /// Omit it to start idle; the dashboard then shows a prompt.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Refresh interval in seconds (how often the file is re-checked)
    #[arg(short, long, default_value = "1")]
    refresh: u64,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeArg::Auto)]
    theme: ThemeArg,

    /// Export the processed readings to a JSON file and exit
    #[arg(short, long, requires = "file")]
    export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    /// Pick from the terminal background
    Auto,
    Light,
    Dark,
}

impl ThemeArg {
    fn resolve(self) -> Theme {
        match self {
            ThemeArg::Auto => Theme::auto_detect(),
            ThemeArg::Light => Theme::light(),
            ThemeArg::Dark => Theme::dark(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Handle export mode (non-interactive)
    if let (Some(file), Some(export_path)) = (&args.file, &args.export) {
        return export_to_file(file, export_path);
    }

    let source = args
        .file
        .as_ref()
        .map(|path| Box::new(FileSource::new(path)) as Box<dyn DataSource>);

    run_tui(source, args.theme.resolve(), Duration::from_secs(args.refresh))
}

/// Run the TUI with the given data source
fn run_tui(
    source: Option<Box<dyn DataSource>>,
    theme: Theme,
    refresh_interval: Duration,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and load initial data
    let mut app = App::new(source, Box::new(SystemClock));
    app.theme = theme;
    let _ = app.reload_data();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, refresh_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(0, area.height / 2 - 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(8),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            // Render header with the headline numbers
            ui::common::render_header(frame, app, chunks[0]);

            // Render tabs
            ui::common::render_tabs(frame, app, chunks[1]);

            // Render current view
            match app.current_view {
                View::Overview => ui::overview::render(frame, app, chunks[2]),
                View::Distribution => ui::histogram::render(frame, app, chunks[2]),
                View::Readings => ui::readings::render(frame, app, chunks[2]),
            }

            // Render status bar
            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Auto-refresh data periodically
        if last_refresh.elapsed() >= refresh_interval {
            let _ = app.reload_data();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

/// Process a CSV file and write the summary JSON, without entering the TUI
fn export_to_file(file: &std::path::Path, export_path: &std::path::Path) -> Result<()> {
    let data = SensorData::load(file, &SystemClock)?;
    app::write_export(export_path, &data)?;

    println!(
        "Exported {} readings to: {}",
        data.series.len(),
        export_path.display()
    );
    Ok(())
}
