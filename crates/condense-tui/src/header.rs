use condense_core::panel::{HeaderElement, Layer};

/// Header drawn by [`crate::widgets::HeaderWidget`]; one unit is one row.
#[derive(Debug, Clone, Copy)]
pub struct TerminalHeader {
    pub rows: u16,
    pub top_bar: bool,
}

impl TerminalHeader {
    pub fn new(rows: u16) -> Self {
        Self { rows, top_bar: true }
    }
}

impl HeaderElement for TerminalHeader {
    fn offset_height(&self) -> f64 {
        self.rows as f64
    }

    fn top_bar(&self) -> Option<Layer> {
        self.top_bar.then_some(Layer::TopBar)
    }
}
