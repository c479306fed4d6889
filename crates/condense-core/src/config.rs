use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::panel::PanelOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log files live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Header panel behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Condense the header as content scrolls
    #[serde(default)]
    pub condenses: bool,
    /// Disable the background crossfade
    #[serde(default)]
    pub no_dissolve: bool,
    /// Do not reveal the header when scrolling back up
    #[serde(default)]
    pub no_reveal: bool,
    /// Pin the header; it never moves
    #[serde(default)]
    pub fixed: bool,
    /// Keep the condensed header on screen
    #[serde(default)]
    pub keep_condensed_header: bool,
    /// Let the top bar scroll away with the header
    #[serde(default)]
    pub scroll_away_topbar: bool,
    /// Full header height; measured from the header when unset
    #[serde(default)]
    pub header_height: Option<f64>,
    /// Condensed header height; one third of the header when unset
    #[serde(default)]
    pub condensed_header_height: Option<f64>,
}

impl PanelConfig {
    pub fn options(&self) -> PanelOptions {
        PanelOptions {
            condenses: self.condenses,
            no_dissolve: self.no_dissolve,
            no_reveal: self.no_reveal,
            fixed: self.fixed,
            keep_condensed_header: self.keep_condensed_header,
            scroll_away_topbar: self.scroll_away_topbar,
        }
    }
}

/// Smooth scroll animation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Smooth scroll duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub duration_ms: u64,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_animation_duration(),
            fps: default_animation_fps(),
        }
    }
}

impl AnimationConfig {
    #[inline]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Time between animation frames
    #[inline]
    pub fn frame_interval(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.fps as u64)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Header height in terminal rows
    #[serde(default = "default_header_rows")]
    pub header_rows: u16,
    /// Number of demo content lines
    #[serde(default = "default_content_lines")]
    pub content_lines: usize,
    /// Title shown in the header's top bar
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            header_rows: default_header_rows(),
            content_lines: default_content_lines(),
            title: default_title(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("condense")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_animation_duration() -> u64 {
    200
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

fn default_header_rows() -> u16 {
    9
}

fn default_content_lines() -> usize {
    200
}

fn default_title() -> String {
    "condense".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/condense/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("condense")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("condense.log")
    }

    fn validate(&self) -> crate::Result<()> {
        if self.ui.header_rows == 0 {
            return Err(crate::Error::Config(
                "ui.header_rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
