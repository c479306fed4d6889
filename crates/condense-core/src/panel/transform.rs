//! Turning a header displacement into per-layer translations and opacities.

use std::collections::HashMap;

use serde::Serialize;

use super::options::{Dimensions, PanelOptions};

/// Visual layers the panel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Wrapper around the whole header.
    HeaderContainer,
    /// Optional bar at the top of the header, pinned while condensing.
    TopBar,
    /// Background shown when the header is expanded.
    HeaderBackground,
    /// Background faded in as the header condenses.
    CondensedBackground,
}

impl Layer {
    pub const ALL: [Layer; 4] = [
        Layer::HeaderContainer,
        Layer::TopBar,
        Layer::HeaderBackground,
        Layer::CondensedBackground,
    ];

    /// Opacity a layer has when no override is applied.
    pub fn natural_opacity(self) -> f64 {
        match self {
            Layer::CondensedBackground => 0.0,
            _ => 1.0,
        }
    }
}

/// Receives computed layer styles. `None` clears the override and returns the
/// layer to its natural value.
pub trait TransformSink {
    fn translate_y(&mut self, layer: Layer, y: Option<f64>);
    fn set_opacity(&mut self, layer: Layer, opacity: Option<f64>);
}

/// Overrides currently applied to a layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LayerStyle {
    pub translate_y: Option<f64>,
    pub opacity: Option<f64>,
}

/// Sink that remembers the latest style of every layer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    styles: HashMap<Layer, LayerStyle>,
    writes: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self, layer: Layer) -> LayerStyle {
        self.styles.get(&layer).copied().unwrap_or_default()
    }

    pub fn translate(&self, layer: Layer) -> f64 {
        self.style(layer).translate_y.unwrap_or(0.0)
    }

    pub fn opacity(&self, layer: Layer) -> f64 {
        self.style(layer)
            .opacity
            .unwrap_or_else(|| layer.natural_opacity())
    }

    /// Total number of style writes received.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Layers with at least one active override, in layer order.
    pub fn snapshot(&self) -> Vec<(Layer, LayerStyle)> {
        let mut styles: Vec<_> = self
            .styles
            .iter()
            .filter(|(_, style)| style.translate_y.is_some() || style.opacity.is_some())
            .map(|(layer, style)| (*layer, *style))
            .collect();
        styles.sort_by_key(|(layer, _)| *layer);
        styles
    }
}

impl TransformSink for RecordingSink {
    fn translate_y(&mut self, layer: Layer, y: Option<f64>) {
        self.styles.entry(layer).or_default().translate_y = y;
        self.writes += 1;
    }

    fn set_opacity(&mut self, layer: Layer, opacity: Option<f64>) {
        self.styles.entry(layer).or_default().opacity = opacity;
        self.writes += 1;
    }
}

/// Applies displacement `y` to the header layers under one configuration.
#[derive(Debug, Clone, Copy)]
pub struct TransformApplier<'a> {
    pub options: &'a PanelOptions,
    pub dims: &'a Dimensions,
}

impl<'a> TransformApplier<'a> {
    pub fn new(options: &'a PanelOptions, dims: &'a Dimensions) -> Self {
        Self { options, dims }
    }

    /// Move the header container and, when condensing, the layers inside it.
    pub fn transform_header(
        &self,
        y: Option<f64>,
        top_bar: Option<Layer>,
        sink: &mut dyn TransformSink,
    ) {
        sink.translate_y(Layer::HeaderContainer, y.map(|y| -y));

        if self.options.condenses {
            self.condense_header(y, top_bar, sink);
        }
    }

    /// Pin the top bar and crossfade the backgrounds for displacement `y`.
    pub fn condense_header(
        &self,
        y: Option<f64>,
        top_bar: Option<Layer>,
        sink: &mut dyn TransformSink,
    ) {
        let margin = self.dims.header_margin();

        if !self.options.scroll_away_topbar {
            if let Some(layer) = top_bar {
                sink.translate_y(layer, y.map(|y| y.min(margin)));
            }
        }

        // A zero margin leaves nothing to fade across.
        let dissolve = !self.options.no_dissolve && margin != 0.0;

        if dissolve {
            sink.set_opacity(Layer::HeaderBackground, y.map(|y| (margin - y) / margin));
        }
        sink.translate_y(Layer::HeaderBackground, y.map(|y| y / 2.0));

        if dissolve {
            sink.set_opacity(Layer::CondensedBackground, y.map(|y| y / margin));
        }
        sink.translate_y(Layer::CondensedBackground, y.map(|y| y / 2.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condensing() -> PanelOptions {
        PanelOptions {
            condenses: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_container_only_without_condenses() {
        let options = PanelOptions::default();
        let dims = Dimensions::new(120.0);
        let mut sink = RecordingSink::new();

        TransformApplier::new(&options, &dims).transform_header(
            Some(30.0),
            Some(Layer::TopBar),
            &mut sink,
        );

        assert_eq!(sink.translate(Layer::HeaderContainer), -30.0);
        assert_eq!(sink.style(Layer::TopBar), LayerStyle::default());
        assert_eq!(sink.style(Layer::HeaderBackground), LayerStyle::default());
    }

    #[test]
    fn test_crossfade_halfway() {
        let options = condensing();
        let dims = Dimensions::with_condensed(120.0, 80.0);
        let mut sink = RecordingSink::new();

        TransformApplier::new(&options, &dims).transform_header(
            Some(20.0),
            Some(Layer::TopBar),
            &mut sink,
        );

        assert_eq!(sink.translate(Layer::HeaderContainer), -20.0);
        assert_eq!(sink.translate(Layer::TopBar), 20.0);
        assert_eq!(sink.opacity(Layer::HeaderBackground), 0.5);
        assert_eq!(sink.opacity(Layer::CondensedBackground), 0.5);
        assert_eq!(sink.translate(Layer::HeaderBackground), 10.0);
        assert_eq!(sink.translate(Layer::CondensedBackground), 10.0);
    }

    #[test]
    fn test_top_bar_pinned_at_margin() {
        let options = condensing();
        let dims = Dimensions::with_condensed(120.0, 80.0);
        let mut sink = RecordingSink::new();

        TransformApplier::new(&options, &dims).condense_header(
            Some(100.0),
            Some(Layer::TopBar),
            &mut sink,
        );

        assert_eq!(sink.translate(Layer::TopBar), 40.0);
    }

    #[test]
    fn test_scroll_away_topbar_leaves_bar_alone() {
        let options = PanelOptions {
            scroll_away_topbar: true,
            ..condensing()
        };
        let dims = Dimensions::with_condensed(120.0, 80.0);
        let mut sink = RecordingSink::new();

        TransformApplier::new(&options, &dims).condense_header(
            Some(30.0),
            Some(Layer::TopBar),
            &mut sink,
        );

        assert_eq!(sink.style(Layer::TopBar), LayerStyle::default());
    }

    #[test]
    fn test_no_dissolve_still_translates() {
        let options = PanelOptions {
            no_dissolve: true,
            ..condensing()
        };
        let dims = Dimensions::with_condensed(120.0, 80.0);
        let mut sink = RecordingSink::new();

        TransformApplier::new(&options, &dims).condense_header(Some(30.0), None, &mut sink);

        assert_eq!(sink.style(Layer::HeaderBackground).opacity, None);
        assert_eq!(sink.style(Layer::CondensedBackground).opacity, None);
        assert_eq!(sink.translate(Layer::HeaderBackground), 15.0);
        assert_eq!(sink.translate(Layer::CondensedBackground), 15.0);
    }

    #[test]
    fn test_zero_margin_skips_crossfade() {
        let options = condensing();
        let dims = Dimensions::with_condensed(90.0, 90.0);
        let mut sink = RecordingSink::new();

        TransformApplier::new(&options, &dims).condense_header(Some(0.0), None, &mut sink);

        assert_eq!(sink.style(Layer::HeaderBackground).opacity, None);
        assert_eq!(sink.style(Layer::CondensedBackground).opacity, None);
        assert!(sink.opacity(Layer::HeaderBackground).is_finite());
    }

    #[test]
    fn test_reset_clears_overrides() {
        let options = condensing();
        let dims = Dimensions::with_condensed(120.0, 80.0);
        let applier = TransformApplier::new(&options, &dims);
        let mut sink = RecordingSink::new();

        applier.transform_header(Some(35.0), Some(Layer::TopBar), &mut sink);
        assert!(!sink.snapshot().is_empty());

        applier.transform_header(None, Some(Layer::TopBar), &mut sink);
        assert!(sink.snapshot().is_empty());
        assert_eq!(sink.opacity(Layer::CondensedBackground), 0.0);
    }
}
