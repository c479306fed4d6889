//! Capabilities the presentation layer provides to a panel.

use super::transform::Layer;

/// The header content placed in the panel.
pub trait HeaderElement {
    /// Rendered extent along the scroll axis. Zero while layout is pending.
    fn offset_height(&self) -> f64;

    /// Layer the header's top bar is drawn into, if it has one.
    fn top_bar(&self) -> Option<Layer> {
        None
    }
}

/// The scrollable region holding the panel's content.
pub trait Scroller {
    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&mut self, top: f64);
}

/// A header with a fixed, known extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticHeader {
    pub height: f64,
    pub has_top_bar: bool,
}

impl StaticHeader {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            has_top_bar: false,
        }
    }

    pub fn with_top_bar(mut self) -> Self {
        self.has_top_bar = true;
        self
    }
}

impl HeaderElement for StaticHeader {
    fn offset_height(&self) -> f64 {
        self.height
    }

    fn top_bar(&self) -> Option<Layer> {
        self.has_top_bar.then_some(Layer::TopBar)
    }
}

/// In-memory scroll container.
///
/// Writes are clamped to the scrollable range. A write that actually moves
/// the offset raises a pending scroll notification, which the host collects
/// with [`ScrollRegion::take_scroll_event`] and forwards to the panel.
#[derive(Debug, Clone, Default)]
pub struct ScrollRegion {
    scroll_top: f64,
    content_height: f64,
    viewport_height: f64,
    pending_event: bool,
}

impl ScrollRegion {
    pub fn new(content_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top: 0.0,
            content_height,
            viewport_height,
            pending_event: false,
        }
    }

    /// Largest reachable offset.
    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Resize the content or viewport, re-clamping the current offset.
    pub fn set_extent(&mut self, content_height: f64, viewport_height: f64) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        let top = self.scroll_top;
        self.set_scroll_top(top);
    }

    pub fn scroll_by(&mut self, delta: f64) {
        let top = self.scroll_top + delta;
        self.set_scroll_top(top);
    }

    /// Returns `true` once per batch of offset changes.
    pub fn take_scroll_event(&mut self) -> bool {
        std::mem::take(&mut self.pending_event)
    }
}

impl Scroller for ScrollRegion {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, top: f64) {
        let top = top.clamp(0.0, self.max_scroll());
        if top != self.scroll_top {
            self.scroll_top = top;
            self.pending_event = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_are_clamped() {
        let mut region = ScrollRegion::new(500.0, 100.0);
        region.set_scroll_top(1000.0);
        assert_eq!(region.scroll_top(), 400.0);

        region.set_scroll_top(-20.0);
        assert_eq!(region.scroll_top(), 0.0);
    }

    #[test]
    fn test_scroll_event_only_on_change() {
        let mut region = ScrollRegion::new(500.0, 100.0);
        region.set_scroll_top(0.0);
        assert!(!region.take_scroll_event());

        region.scroll_by(25.0);
        region.scroll_by(25.0);
        assert!(region.take_scroll_event());
        assert!(!region.take_scroll_event());
        assert_eq!(region.scroll_top(), 50.0);
    }

    #[test]
    fn test_shrinking_content_reclamps() {
        let mut region = ScrollRegion::new(500.0, 100.0);
        region.set_scroll_top(350.0);
        region.take_scroll_event();

        region.set_extent(300.0, 100.0);
        assert_eq!(region.scroll_top(), 200.0);
        assert!(region.take_scroll_event());
    }

    #[test]
    fn test_static_header_top_bar() {
        assert_eq!(StaticHeader::new(90.0).top_bar(), None);
        assert_eq!(
            StaticHeader::new(90.0).with_top_bar().top_bar(),
            Some(Layer::TopBar)
        );
    }
}
