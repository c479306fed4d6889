mod content;
mod header;
mod status_bar;

pub use content::ContentWidget;
pub use header::HeaderWidget;
pub use status_bar::StatusBarWidget;
