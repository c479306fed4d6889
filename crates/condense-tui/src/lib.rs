pub mod app;
pub mod event;
pub mod header;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use header::TerminalHeader;
pub use theme::Theme;
