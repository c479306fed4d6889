//! Scroll-driven header panel: state tracking, transforms and the controller
//! that ties them to a host.

pub mod controller;
pub mod events;
pub mod host;
pub mod options;
pub mod state;
pub mod tracker;
pub mod transform;

pub use controller::{ContentInset, ScrollHeaderPanel};
pub use events::PanelEvent;
pub use host::{HeaderElement, ScrollRegion, Scroller, StaticHeader};
pub use options::{CondensedHeight, Dimensions, PanelOptions};
pub use state::{HeaderState, ScrollState};
pub use transform::{Layer, LayerStyle, RecordingSink, TransformApplier, TransformSink};
