pub mod config;
pub mod error;
pub mod panel;
pub mod scroll;

pub use config::{AnimationConfig, AppConfig, PanelConfig};
pub use error::{Error, Result};
pub use panel::{
    HeaderElement, HeaderState, Layer, PanelEvent, PanelOptions, ScrollHeaderPanel, ScrollRegion,
    Scroller,
};
