use condense_core::panel::HeaderState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let state_color = match app.panel.header_state() {
            HeaderState::Expanded => theme.accent,
            HeaderState::Hidden => theme.grey1,
            HeaderState::Condensed => theme.info,
            HeaderState::Interpolated => theme.warning,
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " y: {:.0} | scroll: {:.0} | margin: {:.0} | {}",
                app.panel.y(),
                app.scroll_top(),
                app.panel.header_margin(),
                flags(app),
            )
        };

        let state = format!(" {} ", app.panel.header_state().label().to_uppercase());
        let help_hint = " q:quit j/k:scroll c:condense gg:top C/f/r/K/x/t:toggle ";
        let used = state.chars().count() + status_text.chars().count() + help_hint.len();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(state, Style::default().fg(theme.bg0).bg(state_color)),
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Compact list of the enabled toggles.
fn flags(app: &App) -> String {
    let options = app.panel.options();
    let enabled: Vec<&str> = [
        (options.condenses, "condenses"),
        (options.fixed, "fixed"),
        (options.no_reveal, "no-reveal"),
        (options.keep_condensed_header, "keep-condensed"),
        (options.no_dissolve, "no-dissolve"),
        (options.scroll_away_topbar, "scroll-away-topbar"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect();

    if enabled.is_empty() {
        "defaults".to_string()
    } else {
        enabled.join(" ")
    }
}
