use condense_core::panel::{PanelEvent, RecordingSink, ScrollHeaderPanel, ScrollRegion, Scroller};
use condense_core::AppConfig;
use tracing::{debug, trace};

use crate::header::TerminalHeader;
use crate::input::Action;
use crate::theme::Theme;

/// Application state for the header panel demo
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub panel: ScrollHeaderPanel,
    /// Demo content, one entry per row
    pub lines: Vec<String>,
    /// Height of the panel area, status bar excluded
    pub viewport_height: u16,
    /// First key of a two-key sequence
    pub pending_key: Option<char>,
    pub status_message: Option<String>,
    /// Displacement carried by the most recent header transform
    pub last_transform: Option<f64>,
    /// Number of content scroll notifications seen
    pub scroll_events: u64,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        let header = TerminalHeader::new(config.ui.header_rows);
        let mut panel = ScrollHeaderPanel::from_config(
            ScrollRegion::default(),
            RecordingSink::new(),
            &config.panel,
            config.animation.duration(),
        )
        .with_header(header);

        if config.panel.header_height.is_none() {
            panel.measure_header_height();
        }

        let lines = (1..=config.ui.content_lines)
            .map(|n| format!("{:>4}  {}", n, filler(n)))
            .collect();

        let mut app = Self {
            config,
            theme,
            panel,
            lines,
            viewport_height: 0,
            pending_key: None,
            status_message: None,
            last_transform: None,
            scroll_events: 0,
            should_quit: false,
        };
        app.dispatch_panel_events();
        app
    }

    /// Resize the scroll region for a panel area of `height` rows.
    pub fn sync_viewport(&mut self, height: u16) {
        self.viewport_height = height;
        let inset = self.panel.content_inset();
        let content = inset.padding_top + self.lines.len() as f64;
        let viewport = (height as f64 - inset.top).max(0.0);
        self.panel.scroller_mut().set_extent(content, viewport);
        self.dispatch_panel_events();
    }

    /// Check if display frames are needed
    pub fn is_animating(&self) -> bool {
        self.panel.is_animating()
    }

    /// Advance a running smooth scroll by one frame.
    pub fn on_frame(&mut self) {
        self.panel.animation_frame();
        self.dispatch_panel_events();
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn scroll_top(&self) -> f64 {
        self.panel.scroller().scroll_top()
    }

    pub fn handle_action(&mut self, action: Action) {
        if action != Action::PendingG {
            self.pending_key = None;
        }
        self.status_message = None;

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.panel.scroller_mut().scroll_by(1.0),
            Action::ScrollUp => self.panel.scroller_mut().scroll_by(-1.0),
            Action::ScrollHalfPageDown => {
                let half = self.half_page();
                self.panel.scroller_mut().scroll_by(half);
            }
            Action::ScrollHalfPageUp => {
                let half = self.half_page();
                self.panel.scroller_mut().scroll_by(-half);
            }
            Action::JumpToTop => self.panel.scroll_to_top(true),
            Action::JumpToBottom => {
                let bottom = self.panel.scroller().max_scroll();
                self.panel.scroll(bottom, true);
            }
            Action::PendingG => self.pending_key = Some('g'),
            Action::Condense => self.panel.condense(true),
            Action::ToggleCondenses => {
                let on = !self.panel.options().condenses;
                self.panel.set_condenses(on);
                self.set_status(format!("condenses: {}", on_off(on)));
            }
            Action::ToggleFixed => {
                let on = !self.panel.options().fixed;
                self.panel.set_fixed(on);
                // The content moves between padded and offset layouts
                let height = self.viewport_height;
                self.sync_viewport(height);
                self.set_status(format!("fixed: {}", on_off(on)));
            }
            Action::ToggleNoReveal => {
                let on = !self.panel.options().no_reveal;
                self.panel.set_no_reveal(on);
                self.set_status(format!("no-reveal: {}", on_off(on)));
            }
            Action::ToggleKeepCondensed => {
                let on = !self.panel.options().keep_condensed_header;
                self.panel.set_keep_condensed_header(on);
                self.set_status(format!("keep-condensed: {}", on_off(on)));
            }
            Action::ToggleNoDissolve => {
                let on = !self.panel.options().no_dissolve;
                self.panel.set_no_dissolve(on);
                self.set_status(format!("no-dissolve: {}", on_off(on)));
            }
            Action::ToggleScrollAwayTopbar => {
                let on = !self.panel.options().scroll_away_topbar;
                self.panel.set_scroll_away_topbar(on);
                self.set_status(format!("scroll-away-topbar: {}", on_off(on)));
            }
            Action::None => {}
        }

        self.dispatch_panel_events();
    }

    /// Forward pending scroller notifications to the panel and consume the
    /// events it raised.
    fn dispatch_panel_events(&mut self) {
        if self.panel.scroller_mut().take_scroll_event() {
            self.panel.handle_scroll();
        }

        let events: Vec<PanelEvent> = self.panel.drain_events().collect();
        for event in events {
            match event {
                PanelEvent::HeaderTransform { y, height, condensed_height } => {
                    trace!(?y, height, condensed_height, "Header transform");
                    self.last_transform = y;
                }
                PanelEvent::ContentScroll { scroll_top } => {
                    trace!(scroll_top, "Content scroll");
                    self.scroll_events += 1;
                }
                PanelEvent::HeaderStateChanged { from, to } => {
                    debug!(%from, %to, "Header state");
                }
            }
        }
    }

    fn half_page(&self) -> f64 {
        (self.panel.scroller().viewport_height() / 2.0).floor().max(1.0)
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

fn filler(n: usize) -> &'static str {
    const WORDS: [&str; 6] = [
        "Scroll down to push the header away.",
        "Scroll back up and it slides into view again.",
        "With condensing on, the header shrinks to its top bar.",
        "The backgrounds crossfade while it shrinks.",
        "Press c to condense smoothly, gg to return to the top.",
        "Toggle options from the status bar hints.",
    ];
    WORDS[n % WORDS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use condense_core::panel::{HeaderState, Layer};

    fn app(toml: &str) -> App {
        let config = AppConfig::from_toml(toml).unwrap();
        let mut app = App::new(config, Theme::default());
        app.sync_viewport(30);
        app
    }

    #[test]
    fn test_header_measured_from_rows() {
        let app = app("[ui]\nheader_rows = 9\n");
        assert_eq!(app.panel.header_height(), 9.0);
        assert_eq!(app.panel.condensed_header_height(), 3.0);
    }

    #[test]
    fn test_configured_height_skips_measurement() {
        let app = app("[panel]\nheader_height = 12.0\n[ui]\nheader_rows = 9\n");
        assert_eq!(app.panel.header_height(), 12.0);
    }

    #[test]
    fn test_line_scroll_moves_header() {
        let mut app = app("");
        for _ in 0..4 {
            app.handle_action(Action::ScrollDown);
        }

        assert_eq!(app.scroll_top(), 4.0);
        assert_eq!(app.panel.y(), 4.0);
        assert_eq!(app.panel.header_state(), HeaderState::Interpolated);
        assert_eq!(app.panel.sink().translate(Layer::HeaderContainer), -4.0);
        assert_eq!(app.scroll_events, 4);
        assert_eq!(app.last_transform, Some(4.0));
    }

    #[test]
    fn test_condense_animates_to_margin() {
        let mut app = app("[panel]\ncondenses = true\n[animation]\nduration_ms = 0\n");
        app.handle_action(Action::Condense);

        assert!(!app.is_animating());
        assert_eq!(app.scroll_top(), 6.0);
        assert_eq!(app.panel.header_state(), HeaderState::Condensed);
    }

    #[test]
    fn test_fixed_toggle_moves_content_below_header() {
        let mut app = app("");
        app.handle_action(Action::ToggleFixed);

        assert!(app.panel.options().fixed);
        assert_eq!(app.panel.scroller().viewport_height(), 21.0);
        assert_eq!(app.panel.scroller().content_height(), 200.0);
        assert_eq!(app.status_message.as_deref(), Some("fixed: on"));
    }

    #[test]
    fn test_pending_g_cleared_by_other_keys() {
        let mut app = app("");
        app.handle_action(Action::PendingG);
        assert_eq!(app.pending_key, Some('g'));

        app.handle_action(Action::ScrollDown);
        assert_eq!(app.pending_key, None);
    }
}
