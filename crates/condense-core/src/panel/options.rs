//! Host-settable toggles and measured header dimensions.

use serde::{Deserialize, Serialize};

/// Behavior toggles for a scroll header panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelOptions {
    /// Shrink the header to the condensed height as content scrolls.
    pub condenses: bool,
    /// Skip the crossfade between the full and condensed backgrounds.
    pub no_dissolve: bool,
    /// Do not slide the header back in when scrolling up.
    pub no_reveal: bool,
    /// Keep the header pinned at the top; it never moves.
    pub fixed: bool,
    /// Keep the condensed header visible instead of hiding it.
    pub keep_condensed_header: bool,
    /// Let the header's top bar scroll away with the rest of the header.
    pub scroll_away_topbar: bool,
}

/// Condensed height tracking: derived from the header height until a host
/// supplies its own value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum CondensedHeight {
    Default(f64),
    Custom(f64),
}

impl CondensedHeight {
    pub fn value(self) -> f64 {
        match self {
            CondensedHeight::Default(v) | CondensedHeight::Custom(v) => v,
        }
    }

    pub fn is_default(self) -> bool {
        matches!(self, CondensedHeight::Default(_))
    }
}

/// One third of the full header, rounded to the nearest whole unit.
pub fn default_condensed_height(header_height: f64) -> f64 {
    (header_height / 3.0).round()
}

/// Measured header extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    header_height: f64,
    condensed: CondensedHeight,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Dimensions {
    pub fn new(header_height: f64) -> Self {
        Self {
            header_height,
            condensed: CondensedHeight::Default(default_condensed_height(header_height)),
        }
    }

    pub fn with_condensed(header_height: f64, condensed_header_height: f64) -> Self {
        let mut dims = Self::new(header_height);
        dims.set_condensed_header_height(condensed_header_height);
        dims
    }

    #[inline]
    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    #[inline]
    pub fn condensed_header_height(&self) -> f64 {
        self.condensed.value()
    }

    pub fn condensed(&self) -> CondensedHeight {
        self.condensed
    }

    /// Travel distance between the full and the condensed header.
    #[inline]
    pub fn header_margin(&self) -> f64 {
        self.header_height - self.condensed_header_height()
    }

    /// Largest displacement before the header is fully hidden (or, when the
    /// condensed header is kept, fully condensed).
    #[inline]
    pub fn header_max_delta(&self, options: &PanelOptions) -> f64 {
        if options.keep_condensed_header {
            self.header_margin()
        } else {
            self.header_height
        }
    }

    /// Update the full height, re-deriving the condensed height while it is
    /// still the default.
    pub fn set_header_height(&mut self, header_height: f64) {
        self.header_height = header_height;
        if self.condensed.is_default() {
            self.condensed = CondensedHeight::Default(default_condensed_height(header_height));
        }
    }

    /// Store a host-provided condensed height.
    ///
    /// A value equal to the current default keeps default tracking. Zero
    /// means "unset" and restores it.
    pub fn set_condensed_header_height(&mut self, condensed_header_height: f64) {
        if condensed_header_height == 0.0 {
            self.condensed =
                CondensedHeight::Default(default_condensed_height(self.header_height));
            return;
        }

        match self.condensed {
            CondensedHeight::Default(current) if current == condensed_header_height => {}
            _ => self.condensed = CondensedHeight::Custom(condensed_header_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_condensed_height_follows_header() {
        let mut dims = Dimensions::default();
        dims.set_header_height(300.0);
        assert_eq!(dims.condensed_header_height(), 100.0);

        dims.set_header_height(200.0);
        assert_eq!(dims.condensed_header_height(), 67.0);
        assert!(dims.condensed().is_default());
    }

    #[test]
    fn test_custom_condensed_height_sticks() {
        let mut dims = Dimensions::default();
        dims.set_header_height(300.0);
        dims.set_condensed_header_height(50.0);
        dims.set_header_height(600.0);

        assert_eq!(dims.condensed_header_height(), 50.0);
        assert_eq!(dims.condensed(), CondensedHeight::Custom(50.0));
    }

    #[test]
    fn test_setting_current_default_keeps_tracking() {
        let mut dims = Dimensions::new(300.0);
        dims.set_condensed_header_height(100.0);
        assert!(dims.condensed().is_default());

        dims.set_header_height(90.0);
        assert_eq!(dims.condensed_header_height(), 30.0);
    }

    #[test]
    fn test_zero_restores_default() {
        let mut dims = Dimensions::with_condensed(120.0, 64.0);
        assert!(!dims.condensed().is_default());

        dims.set_condensed_header_height(0.0);
        assert_eq!(dims.condensed(), CondensedHeight::Default(40.0));
    }

    #[test]
    fn test_margin_and_max_delta() {
        let dims = Dimensions::with_condensed(120.0, 80.0);
        assert_eq!(dims.header_margin(), 40.0);

        let mut options = PanelOptions::default();
        assert_eq!(dims.header_max_delta(&options), 120.0);

        options.keep_condensed_header = true;
        assert_eq!(dims.header_max_delta(&options), 40.0);
    }
}
