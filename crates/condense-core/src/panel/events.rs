use serde::Serialize;

use super::state::HeaderState;

/// Notifications a panel raises for its host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum PanelEvent {
    /// The header was moved. `y` is `None` when the transform was reset.
    HeaderTransform {
        y: Option<f64>,
        height: f64,
        condensed_height: f64,
    },
    /// The content region scrolled and the header state was updated.
    ContentScroll { scroll_top: f64 },
    /// The discrete header state changed.
    HeaderStateChanged { from: HeaderState, to: HeaderState },
}
