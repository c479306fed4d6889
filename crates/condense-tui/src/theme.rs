use ratatui::style::Color;

/// Runtime theme colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey1: Color,
    pub grey2: Color,

    // Header layers
    pub header_bg: Color,
    pub condensed_bg: Color,
    pub header_texture: Color,
    pub top_bar_fg: Color,

    // Semantic colors
    pub accent: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            header_bg: Color::Rgb(0xe7, 0x8a, 0x4e),
            condensed_bg: Color::Rgb(0x45, 0x85, 0x88),
            header_texture: Color::Rgb(0xfb, 0xf1, 0xc7),
            top_bar_fg: Color::Rgb(0x1d, 0x20, 0x21),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            warning: Color::Rgb(0xd8, 0xa6, 0x57),
            info: Color::Rgb(0x7d, 0xae, 0xa3),
        }
    }
}

/// Mix `over` onto `under` with the given opacity.
///
/// Non-RGB colors cannot be mixed; the more opaque side wins.
pub fn blend(under: Color, over: Color, opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (under, over) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * opacity).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ if opacity >= 0.5 => over,
        _ => under,
    }
}

impl Theme {
    /// Visible header color for the two background layers' opacities.
    ///
    /// The full background is stacked above the condensed one, both above
    /// the panel background.
    pub fn header_color(&self, header_opacity: f64, condensed_opacity: f64) -> Color {
        let condensed = blend(self.bg0, self.condensed_bg, condensed_opacity);
        blend(condensed, self.header_bg, header_opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_blend_named_colors() {
        assert_eq!(blend(Color::Black, Color::Red, 0.7), Color::Red);
        assert_eq!(blend(Color::Black, Color::Red, 0.2), Color::Black);
    }

    #[test]
    fn test_header_color_natural_state() {
        let theme = Theme::default();
        // Natural opacities: full background opaque, condensed transparent.
        assert_eq!(theme.header_color(1.0, 0.0), theme.header_bg);
        assert_eq!(theme.header_color(0.0, 1.0), theme.condensed_bg);
    }
}
