use condense_core::panel::Layer;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

/// Draws the header over the top of the panel using the layer styles the
/// panel last applied.
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let rows = app.panel.header_height().round() as i32;
        let sink = app.panel.sink();

        // Header-local row shown on the first screen row
        let shift = (-sink.translate(Layer::HeaderContainer)).round() as i32;
        let bg_shift = sink.translate(Layer::HeaderBackground).round() as i32;
        let top_bar_row = sink.translate(Layer::TopBar).round() as i32;
        let headline_row = rows - 2;

        let bg = app.theme.header_color(
            sink.opacity(Layer::HeaderBackground),
            sink.opacity(Layer::CondensedBackground),
        );

        for screen_row in 0..area.height {
            let local = screen_row as i32 + shift;
            if local >= rows {
                break;
            }
            if local < 0 {
                continue;
            }

            let line = if local == top_bar_row {
                top_bar_line(app)
            } else if local == headline_row {
                headline(app)
            } else {
                texture_line(local - bg_shift, area.width, &app.theme)
            };

            let row_area = Rect {
                x: area.x,
                y: area.y + screen_row,
                width: area.width,
                height: 1,
            };
            frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), row_area);
        }
    }
}

fn top_bar_line(app: &App) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " ≡ ",
            Style::default()
                .fg(app.theme.top_bar_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.config.ui.title.clone(),
            Style::default().fg(app.theme.top_bar_fg),
        ),
    ])
}

fn headline(app: &App) -> Line<'static> {
    Line::from(Span::styled(
        format!("   {}", app.config.ui.title.to_uppercase()),
        Style::default()
            .fg(app.theme.header_texture)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Background texture for a background-local row; shifting the row index is
/// what makes the parallax visible.
fn texture_line(pattern_row: i32, width: u16, theme: &Theme) -> Line<'static> {
    let text: String = (0..width as i32)
        .map(|col| {
            if (pattern_row * 5 + col * 3).rem_euclid(13) == 0 {
                '·'
            } else {
                ' '
            }
        })
        .collect();
    Line::from(Span::styled(text, Style::default().fg(theme.header_texture)))
}
