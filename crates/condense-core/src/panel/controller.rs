//! The header scroll controller.
//!
//! [`ScrollHeaderPanel`] owns the scroll state for one panel. The host feeds
//! it scroll notifications ([`ScrollHeaderPanel::handle_scroll`]), display
//! frames ([`ScrollHeaderPanel::animation_frame`]) and header resizes
//! ([`ScrollHeaderPanel::measure_header_height`]); the panel writes layer
//! styles to its [`TransformSink`] and queues [`PanelEvent`]s.

use std::time::Duration;

use tracing::debug;

use super::events::PanelEvent;
use super::host::{HeaderElement, ScrollRegion, Scroller};
use super::options::{Dimensions, PanelOptions};
use super::state::{HeaderState, ScrollState};
use super::tracker;
use super::transform::{Layer, RecordingSink, TransformApplier, TransformSink};
use crate::config::PanelConfig;
use crate::scroll::{Clock, FrameStep, SmoothScroll, SystemClock};

/// How the scroller is offset to make room for the header.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentInset {
    /// Space reserved inside the scrollable content, under the header.
    pub padding_top: f64,
    /// Offset of the scroller itself below the panel's top edge.
    pub top: f64,
}

/// Scroll-driven header controller.
pub struct ScrollHeaderPanel<S = ScrollRegion, K = RecordingSink> {
    options: PanelOptions,
    dims: Dimensions,
    state: ScrollState,
    header: Option<Box<dyn HeaderElement>>,
    scroller: S,
    sink: K,
    smooth: SmoothScroll,
    clock: Box<dyn Clock>,
    events: Vec<PanelEvent>,
}

impl<S: Scroller, K: TransformSink> ScrollHeaderPanel<S, K> {
    pub fn new(scroller: S, sink: K) -> Self {
        Self {
            options: PanelOptions::default(),
            dims: Dimensions::default(),
            state: ScrollState::default(),
            header: None,
            scroller,
            sink,
            smooth: SmoothScroll::default(),
            clock: Box::new(SystemClock),
            events: Vec::new(),
        }
    }

    /// Build a panel from the `[panel]` and `[animation]` config sections.
    pub fn from_config(
        scroller: S,
        sink: K,
        panel: &PanelConfig,
        animation_duration: Duration,
    ) -> Self {
        let mut this = Self::new(scroller, sink).with_animation_duration(animation_duration);
        this.set_options(panel.options());
        if let Some(height) = panel.header_height {
            this.set_header_height(height);
        }
        if let Some(condensed) = panel.condensed_header_height {
            this.set_condensed_header_height(condensed);
        }
        this
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_header(mut self, header: impl HeaderElement + 'static) -> Self {
        self.header = Some(Box::new(header));
        self
    }

    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.smooth.set_duration(duration);
        self
    }

    pub fn with_options(mut self, options: PanelOptions) -> Self {
        self.set_options(options);
        self
    }

    // ---- accessors ------------------------------------------------------

    #[inline]
    pub fn header_state(&self) -> HeaderState {
        self.state.header_state
    }

    /// Current header displacement.
    #[inline]
    pub fn y(&self) -> f64 {
        self.state.y
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.state
    }

    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    pub fn header_height(&self) -> f64 {
        self.dims.header_height()
    }

    pub fn condensed_header_height(&self) -> f64 {
        self.dims.condensed_header_height()
    }

    pub fn header_margin(&self) -> f64 {
        self.dims.header_margin()
    }

    pub fn header_max_delta(&self) -> f64 {
        self.dims.header_max_delta(&self.options)
    }

    pub fn content_inset(&self) -> ContentInset {
        if self.options.fixed {
            ContentInset {
                padding_top: 0.0,
                top: self.dims.header_height(),
            }
        } else {
            ContentInset {
                padding_top: self.dims.header_height(),
                top: 0.0,
            }
        }
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut S {
        &mut self.scroller
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Check if a smooth scroll still needs display frames
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.smooth.has_scheduled()
    }

    /// Take every event raised since the last drain, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, PanelEvent> {
        self.events.drain(..)
    }

    // ---- configuration --------------------------------------------------

    pub fn set_options(&mut self, options: PanelOptions) {
        self.options.no_dissolve = options.no_dissolve;
        self.options.no_reveal = options.no_reveal;
        self.options.keep_condensed_header = options.keep_condensed_header;
        self.options.scroll_away_topbar = options.scroll_away_topbar;
        self.set_fixed(options.fixed);
        self.set_condenses(options.condenses);
    }

    pub fn set_condenses(&mut self, condenses: bool) {
        if self.options.condenses != condenses {
            self.options.condenses = condenses;
            self.condenses_changed();
        }
    }

    pub fn set_fixed(&mut self, fixed: bool) {
        if self.options.fixed != fixed {
            self.options.fixed = fixed;
            self.setup();
        }
    }

    pub fn set_no_reveal(&mut self, no_reveal: bool) {
        self.options.no_reveal = no_reveal;
    }

    pub fn set_no_dissolve(&mut self, no_dissolve: bool) {
        self.options.no_dissolve = no_dissolve;
    }

    pub fn set_keep_condensed_header(&mut self, keep: bool) {
        self.options.keep_condensed_header = keep;
    }

    pub fn set_scroll_away_topbar(&mut self, scroll_away: bool) {
        self.options.scroll_away_topbar = scroll_away;
    }

    pub fn set_header_height(&mut self, height: f64) {
        if self.dims.header_height() == height {
            return;
        }
        self.dims.set_header_height(height);
        debug!(
            height,
            condensed = self.dims.condensed_header_height(),
            "Header height changed"
        );
        self.setup();
        self.condenses_changed();
    }

    pub fn set_condensed_header_height(&mut self, height: f64) {
        let before = self.dims.condensed();
        self.dims.set_condensed_header_height(height);
        if self.dims.condensed() != before {
            debug!(condensed = ?self.dims.condensed(), "Condensed header height changed");
            self.setup();
        }
    }

    // ---- host operations ------------------------------------------------

    /// Re-read the header's extent. A zero extent means layout is not ready
    /// and is ignored.
    pub fn measure_header_height(&mut self) {
        let height = match &self.header {
            Some(header) => header.offset_height(),
            None => return,
        };
        if height != 0.0 {
            self.set_header_height(height);
        }
    }

    /// The scroller moved: update the header and report the scroll.
    pub fn handle_scroll(&mut self) {
        if self.header.is_none() {
            return;
        }
        let scroll_top = self.scroller.scroll_top();
        self.update_scroll_state(scroll_top);
        self.events.push(PanelEvent::ContentScroll { scroll_top });
    }

    /// Scroll the content to `top`, optionally animating over the
    /// configured duration.
    pub fn scroll(&mut self, top: f64, smooth: bool) {
        if !smooth {
            self.smooth.cancel();
            self.scroller.set_scroll_top(top);
            // The scroller may clamp the write
            let reached = self.scroller.scroll_top();
            self.update_scroll_state(reached);
            return;
        }

        let from = self.scroller.scroll_top();
        let (_, first) = self.smooth.start(from, top, self.clock.now());
        self.apply_frame_step(first);
    }

    /// Advance any running smooth scroll by one display frame.
    pub fn animation_frame(&mut self) {
        if let Some(step) = self.smooth.frame(self.clock.now()) {
            self.apply_frame_step(step);
        }
    }

    /// Scroll just far enough to show the condensed header.
    pub fn condense(&mut self, smooth: bool) {
        if !self.options.condenses || self.options.fixed || self.options.no_reveal {
            return;
        }

        match self.state.header_state {
            HeaderState::Hidden => {
                let top = self.scroller.scroll_top()
                    - (self.header_max_delta() - self.header_margin());
                self.scroll(top, smooth);
            }
            HeaderState::Expanded | HeaderState::Interpolated => {
                let top = self.header_margin();
                self.scroll(top, smooth);
            }
            HeaderState::Condensed => {}
        }
    }

    pub fn scroll_to_top(&mut self, smooth: bool) {
        self.scroll(0.0, smooth);
    }

    /// Stop a running smooth scroll where it is.
    pub fn cancel_animation(&mut self) {
        self.smooth.cancel();
    }

    // ---- internals ------------------------------------------------------

    fn apply_frame_step(&mut self, step: FrameStep) {
        match step {
            FrameStep::Progress(offset) => self.scroller.set_scroll_top(offset),
            FrameStep::Finished(target) => {
                self.scroller.set_scroll_top(target);
                let reached = self.scroller.scroll_top();
                self.update_scroll_state(reached);
            }
        }
    }

    fn update_scroll_state(&mut self, scroll_top: f64) {
        let next = tracker::step(&self.state, scroll_top, &self.options, &self.dims);

        self.set_header_state(next.header_state);
        if !self.options.fixed && next.y != self.state.y {
            self.transform_header(Some(next.y));
        }

        self.state.prev_scroll_top = next.prev_scroll_top;
        self.state.y = next.y;
    }

    fn set_header_state(&mut self, state: HeaderState) {
        let from = self.state.header_state;
        if from != state {
            debug!(%from, to = %state, "Header state changed");
            self.state.header_state = state;
            self.events
                .push(PanelEvent::HeaderStateChanged { from, to: state });
        }
    }

    /// Reconfiguration waits until the header has a height.
    fn is_measured(&self) -> bool {
        self.dims.header_height() != 0.0
    }

    fn setup(&mut self) {
        if !self.is_measured() {
            return;
        }
        if self.options.fixed {
            self.set_header_state(HeaderState::Expanded);
            self.transform_header(None);
            return;
        }

        match self.state.header_state {
            HeaderState::Hidden => self.transform_header(Some(self.header_max_delta())),
            HeaderState::Condensed => self.transform_header(Some(self.header_margin())),
            HeaderState::Expanded | HeaderState::Interpolated => {}
        }
    }

    fn condenses_changed(&mut self) {
        if !self.is_measured() {
            return;
        }
        let scroll_top = self.scroller.scroll_top();
        self.update_scroll_state(scroll_top);

        let top_bar = self.top_bar();
        TransformApplier::new(&self.options, &self.dims).condense_header(
            None,
            top_bar,
            &mut self.sink,
        );
    }

    fn transform_header(&mut self, y: Option<f64>) {
        let top_bar = self.top_bar();
        TransformApplier::new(&self.options, &self.dims).transform_header(
            y,
            top_bar,
            &mut self.sink,
        );

        self.events.push(PanelEvent::HeaderTransform {
            y,
            height: self.dims.header_height(),
            condensed_height: self.dims.condensed_header_height(),
        });
    }

    fn top_bar(&self) -> Option<Layer> {
        self.header.as_ref().and_then(|header| header.top_bar())
    }
}
