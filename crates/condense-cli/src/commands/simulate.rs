use anyhow::{bail, Result};
use serde::Serialize;
use tracing::debug;

use condense_core::panel::{LayerStyle, RecordingSink, ScrollRegion, StaticHeader};
use condense_core::scroll::ManualClock;
use condense_core::{AppConfig, HeaderState, Layer, PanelEvent, ScrollHeaderPanel, Scroller};

/// Viewport used for the simulated scroll container
const VIEWPORT: f64 = 600.0;

pub struct SimulateArgs {
    pub offsets: Vec<f64>,
    pub header_height: f64,
    pub condensed_height: Option<f64>,
    pub smooth_to: Option<f64>,
    pub json: bool,
}

/// Panel state after one simulated scroll position
#[derive(Debug, Serialize)]
struct Step {
    scroll_top: f64,
    y: f64,
    state: HeaderState,
    events: Vec<PanelEvent>,
    layers: Vec<(Layer, LayerStyle)>,
}

pub async fn run(config: &AppConfig, args: SimulateArgs) -> Result<()> {
    if args.header_height <= 0.0 {
        bail!("header height must be positive");
    }

    let steps = simulate(config, &args);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    println!(
        "{:>9} {:>9} {:<13} {:>10} {:>10} {:>8} {:>8}",
        "scroll", "y", "state", "container", "top-bar", "bg", "cond"
    );
    for step in &steps {
        let style = |layer: Layer| {
            step.layers
                .iter()
                .find(|(l, _)| *l == layer)
                .map(|(_, s)| *s)
                .unwrap_or_default()
        };
        let translate = |layer: Layer| {
            style(layer)
                .translate_y
                .map(|v| format!("{:.1}", v))
                .unwrap_or_else(|| "-".to_string())
        };
        let opacity = |layer: Layer| {
            style(layer)
                .opacity
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "-".to_string())
        };

        println!(
            "{:>9.1} {:>9.1} {:<13} {:>10} {:>10} {:>8} {:>8}",
            step.scroll_top,
            step.y,
            step.state.label(),
            translate(Layer::HeaderContainer),
            translate(Layer::TopBar),
            opacity(Layer::HeaderBackground),
            opacity(Layer::CondensedBackground),
        );
    }

    Ok(())
}

fn simulate(config: &AppConfig, args: &SimulateArgs) -> Vec<Step> {
    let clock = ManualClock::new();
    let content = args.header_height
        + args.offsets.iter().copied().fold(0.0, f64::max)
        + args.smooth_to.unwrap_or(0.0).max(0.0)
        + VIEWPORT;

    let mut panel = ScrollHeaderPanel::from_config(
        ScrollRegion::new(content, VIEWPORT),
        RecordingSink::new(),
        &config.panel,
        config.animation.duration(),
    )
    .with_clock(clock.clone())
    .with_header(StaticHeader::new(args.header_height));

    panel.measure_header_height();
    if let Some(condensed) = args.condensed_height {
        panel.set_condensed_header_height(condensed);
    }
    panel.drain_events().for_each(drop);

    let mut steps = Vec::new();

    for &offset in &args.offsets {
        panel.scroller_mut().set_scroll_top(offset);
        steps.push(record(&mut panel));
    }

    if let Some(target) = args.smooth_to {
        panel.scroll(target, true);
        steps.push(record(&mut panel));

        let interval = config.animation.frame_interval();
        while panel.is_animating() {
            clock.advance(interval);
            panel.animation_frame();
            steps.push(record(&mut panel));
        }
    }

    debug!(steps = steps.len(), "Simulation finished");
    steps
}

fn record(panel: &mut ScrollHeaderPanel) -> Step {
    if panel.scroller_mut().take_scroll_event() {
        panel.handle_scroll();
    }

    Step {
        scroll_top: panel.scroller().scroll_top(),
        y: panel.y(),
        state: panel.header_state(),
        events: panel.drain_events().collect(),
        layers: panel.sink().snapshot(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(offsets: &[f64]) -> SimulateArgs {
        SimulateArgs {
            offsets: offsets.to_vec(),
            header_height: 300.0,
            condensed_height: None,
            smooth_to: None,
            json: false,
        }
    }

    #[test]
    fn test_offsets_drive_header_state() {
        let config = AppConfig::default();
        let steps = simulate(&config, &args(&[0.0, 50.0, 400.0]));

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].state, HeaderState::Expanded);
        assert_eq!(steps[1].y, 50.0);
        assert_eq!(steps[1].state, HeaderState::Interpolated);
        assert_eq!(steps[2].y, 300.0);
        assert_eq!(steps[2].state, HeaderState::Hidden);
    }

    #[test]
    fn test_keep_condensed_pins_at_margin() {
        let mut config = AppConfig::default();
        config.panel.condenses = true;
        config.panel.keep_condensed_header = true;
        let steps = simulate(&config, &args(&[400.0]));

        assert_eq!(steps[0].y, 200.0);
        assert_eq!(steps[0].state, HeaderState::Condensed);
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let config = AppConfig::default();
        let mut a = args(&[]);
        a.smooth_to = Some(120.0);
        let steps = simulate(&config, &a);

        let last = steps.last().unwrap();
        assert!(steps.len() > 2);
        assert_eq!(last.scroll_top, 120.0);
        assert_eq!(last.y, 120.0);
    }

    #[test]
    fn test_scroll_events_recorded() {
        let config = AppConfig::default();
        let steps = simulate(&config, &args(&[10.0, 10.0]));

        assert!(steps[0]
            .events
            .iter()
            .any(|e| matches!(e, PanelEvent::ContentScroll { scroll_top } if *scroll_top == 10.0)));
        // Same offset again does not scroll
        assert!(steps[1].events.is_empty());
    }
}
