//! Scroll offset to header displacement.
//!
//! Given the previous [`ScrollState`] and a new scroll offset, [`step`] works
//! out how far the header is pushed up (`y`) and which [`HeaderState`] it is
//! in. It is a pure function; applying the result is the panel's job.

use super::options::{Dimensions, PanelOptions};
use super::state::{HeaderState, ScrollState};

/// Compute the next scroll state for `scroll_top`.
pub fn step(
    prev: &ScrollState,
    scroll_top: f64,
    options: &PanelOptions,
    dims: &Dimensions,
) -> ScrollState {
    let delta = scroll_top - prev.prev_scroll_top;
    let mut y = if options.no_reveal {
        scroll_top
    } else {
        prev.y + delta
    }
    .max(0.0);

    let max_delta = dims.header_max_delta(options);
    let margin = dims.header_margin();

    let header_state = if y > max_delta {
        y = max_delta;
        if options.keep_condensed_header {
            HeaderState::Condensed
        } else {
            HeaderState::Hidden
        }
    } else if options.condenses && scroll_top >= margin {
        y = y.max(margin);
        HeaderState::Condensed
    } else if y == 0.0 {
        HeaderState::Expanded
    } else {
        HeaderState::Interpolated
    };

    ScrollState {
        y,
        prev_scroll_top: scroll_top.max(0.0),
        header_state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(offsets: &[f64], options: &PanelOptions, dims: &Dimensions) -> Vec<ScrollState> {
        let mut state = ScrollState::default();
        offsets
            .iter()
            .map(|&top| {
                state = step(&state, top, options, dims);
                state
            })
            .collect()
    }

    #[test]
    fn test_reveal_mode_stays_bounded() {
        let options = PanelOptions::default();
        let dims = Dimensions::new(120.0);
        let offsets = [0.0, 30.0, 90.0, 400.0, 380.0, 300.0, 290.0, 500.0, 10.0, 0.0, 60.0];

        for state in run(&offsets, &options, &dims) {
            assert!(state.y >= 0.0 && state.y <= 120.0, "y out of range: {}", state.y);
            assert_eq!(state.header_state == HeaderState::Hidden, state.y == 120.0);
        }
    }

    #[test]
    fn test_scrolling_up_reveals_header() {
        let options = PanelOptions::default();
        let dims = Dimensions::new(120.0);
        let states = run(&[500.0, 470.0], &options, &dims);

        assert_eq!(states[0].header_state, HeaderState::Hidden);
        assert_eq!(states[1].y, 90.0);
        assert_eq!(states[1].header_state, HeaderState::Interpolated);
    }

    #[test]
    fn test_no_reveal_tracks_offset_directly() {
        let options = PanelOptions {
            no_reveal: true,
            ..Default::default()
        };
        let dims = Dimensions::new(120.0);

        // Different histories that end on the same offset agree.
        let a = run(&[0.0, 100.0, 50.0], &options, &dims);
        let b = run(&[110.0, 20.0, 50.0], &options, &dims);
        assert_eq!(a[2].y, 50.0);
        assert_eq!(b[2].y, 50.0);

        for top in [0.0, 10.0, 77.0, 120.0] {
            let state = step(&ScrollState::default(), top, &options, &dims);
            assert_eq!(state.y, top);
        }
    }

    #[test]
    fn test_condenses_pins_at_margin() {
        let options = PanelOptions {
            condenses: true,
            ..Default::default()
        };
        let dims = Dimensions::with_condensed(120.0, 80.0);
        let state = step(&ScrollState::default(), 40.0, &options, &dims);

        assert_eq!(state.y, 40.0);
        assert_eq!(state.header_state, HeaderState::Condensed);

        // Scrolling back up from deep content keeps at least the margin.
        let deep = run(&[300.0, 290.0], &options, &dims);
        assert_eq!(deep[0].header_state, HeaderState::Hidden);
        assert_eq!(deep[1].y, 110.0);
        assert_eq!(deep[1].header_state, HeaderState::Condensed);
    }

    #[test]
    fn test_keep_condensed_header_never_hides() {
        let options = PanelOptions {
            condenses: true,
            keep_condensed_header: true,
            ..Default::default()
        };
        let dims = Dimensions::with_condensed(120.0, 80.0);
        let state = step(&ScrollState::default(), 1000.0, &options, &dims);

        assert_eq!(state.y, 40.0);
        assert_eq!(state.header_state, HeaderState::Condensed);
    }

    #[test]
    fn test_negative_offset_clamps() {
        let options = PanelOptions::default();
        let dims = Dimensions::new(120.0);
        let state = step(&ScrollState::default(), -15.0, &options, &dims);

        assert_eq!(state.y, 0.0);
        assert_eq!(state.prev_scroll_top, 0.0);
        assert_eq!(state.header_state, HeaderState::Expanded);
    }
}
