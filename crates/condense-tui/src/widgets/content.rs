use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct ContentWidget;

impl ContentWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let inset = app.panel.content_inset();
        let top = (inset.top.round() as u16).min(area.height);
        let padding = inset.padding_top.round() as usize;
        let scroll_top = app.scroll_top().round() as usize;
        let height = area.height - top;

        let lines: Vec<Line> = (0..height as usize)
            .map(|row| {
                let virtual_row = scroll_top + row;
                virtual_row
                    .checked_sub(padding)
                    .and_then(|idx| app.lines.get(idx))
                    .map(|text| Line::styled(text.clone(), Style::default().fg(app.theme.fg0)))
                    .unwrap_or_default()
            })
            .collect();

        let content_area = Rect {
            x: area.x,
            y: area.y + top,
            width: area.width,
            height,
        };
        let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.bg0));
        frame.render_widget(paragraph, content_area);
    }
}
