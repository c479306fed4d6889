//! Discrete header states and the mutable scroll state they live in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Where the header currently sits relative to its full and condensed extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderState {
    /// Fully shown, no displacement.
    #[default]
    Expanded,
    /// Scrolled completely out of view.
    Hidden,
    /// Shrunk to the condensed height and pinned there.
    Condensed,
    /// Somewhere between the other states.
    Interpolated,
}

impl HeaderState {
    pub const ALL: [HeaderState; 4] = [
        HeaderState::Expanded,
        HeaderState::Hidden,
        HeaderState::Condensed,
        HeaderState::Interpolated,
    ];

    /// Stable numeric code, matching the ordering hosts historically relied on.
    pub fn code(self) -> u8 {
        match self {
            HeaderState::Expanded => 0,
            HeaderState::Hidden => 1,
            HeaderState::Condensed => 2,
            HeaderState::Interpolated => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeaderState::Expanded => "expanded",
            HeaderState::Hidden => "hidden",
            HeaderState::Condensed => "condensed",
            HeaderState::Interpolated => "interpolated",
        }
    }
}

impl TryFrom<u8> for HeaderState {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        HeaderState::ALL
            .into_iter()
            .find(|state| state.code() == code)
            .ok_or(Error::InvalidHeaderState(code))
    }
}

impl fmt::Display for HeaderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scroll tracking state owned by a single panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollState {
    /// Current header displacement, never negative.
    pub y: f64,
    /// Scroll offset seen by the previous update, never negative.
    pub prev_scroll_top: f64,
    pub header_state: HeaderState,
}
