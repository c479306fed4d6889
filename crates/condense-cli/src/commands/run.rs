use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use condense_core::AppConfig;
use condense_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{ContentWidget, HeaderWidget, StatusBarWidget},
    App, Theme,
};

pub async fn run(config: AppConfig) -> Result<()> {
    let frame_interval = config.animation.frame_interval();
    let tick_rate_ms = config.ui.tick_rate_ms;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(config.ui.title.as_str()))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, Theme::default());
    let mut event_handler = EventHandler::new(tick_rate_ms);

    info!(
        header_height = app.panel.header_height(),
        condensed_height = app.panel.condensed_header_height(),
        "Panel ready"
    );

    // Main loop
    let result = loop {
        if let Err(e) = terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: panel + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            app.sync_viewport(main_layout[0].height);

            ContentWidget::render(frame, main_layout[0], &app);
            HeaderWidget::render(frame, main_layout[0], &app);
            StatusBarWidget::render(frame, main_layout[1], &app);
        }) {
            break Err(e.into());
        }

        // Wake up for animation frames while a smooth scroll is running
        let event = if app.is_animating() {
            tokio::select! {
                event = event_handler.next() => event,
                _ = tokio::time::sleep(frame_interval) => Some(AppEvent::Tick),
            }
        } else {
            event_handler.next().await
        };

        match event {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, &app);
                app.handle_action(action);
            }
            // The next draw picks up the new size
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) => {}
            None => break Ok(()),
        }

        if app.is_animating() {
            app.on_frame();
        }

        if app.should_quit {
            break Ok(());
        }
    };

    app.panel.cancel_animation();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(scroll_events = app.scroll_events, "Exiting");
    result
}
