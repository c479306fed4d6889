//! L3 Molecular Layer: Smooth scroll driver
//!
//! Combines the easing curve and timing helpers into a per-frame scroll
//! animation. Each request gets a fresh [`AnimationHandle`]; starting a new
//! request makes the previous handle stale, and a stale step simply stops
//! rescheduling itself the next time a frame runs.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::easing::ease_out_quad;
use super::timing::{elapsed_ms, is_complete};

/// Default smooth scroll duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

/// Identifies one smooth scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// A scheduled animation step
#[derive(Debug, Clone, Copy)]
struct ScheduledStep {
    handle: AnimationHandle,
    /// Animation start time
    start: Instant,
    /// Scroll offset when the request was made
    from: f64,
    /// Requested offset
    to: f64,
}

/// Outcome of running one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStep {
    /// Write this interpolated offset; the step stays scheduled.
    Progress(f64),
    /// Snap to this target and run a final state update; the step is done.
    Finished(f64),
}

/// Per-frame smooth scroll driver.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    duration: Duration,
    generation: u64,
    current: Option<AnimationHandle>,
    scheduled: Vec<ScheduledStep>,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl SmoothScroll {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            generation: 0,
            current: None,
            scheduled: Vec::new(),
        }
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Handle of the request allowed to write, if one is running.
    pub fn current(&self) -> Option<AnimationHandle> {
        self.current
    }

    /// Check if any step is waiting for a frame, stale ones included
    #[inline]
    pub fn has_scheduled(&self) -> bool {
        !self.scheduled.is_empty()
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.current.is_some()
    }

    /// Begin animating from `from` to `to`, superseding any running request.
    ///
    /// The first step runs immediately at `now` and its result is returned
    /// alongside the new handle.
    pub fn start(&mut self, from: f64, to: f64, now: Instant) -> (AnimationHandle, FrameStep) {
        self.generation += 1;
        let handle = AnimationHandle(self.generation);

        if let Some(previous) = self.current.replace(handle) {
            debug!(
                superseded = previous.generation(),
                by = handle.generation(),
                "Smooth scroll superseded"
            );
        }
        debug!(generation = handle.generation(), from, to, "Smooth scroll started");

        let step = ScheduledStep {
            handle,
            start: now,
            from,
            to,
        };
        let first = self.evaluate(&step, now);
        if matches!(first, FrameStep::Finished(_)) {
            self.current = None;
        } else {
            self.scheduled.push(step);
        }

        (handle, first)
    }

    /// Run every scheduled step for the frame at `now`.
    ///
    /// Stale steps are dropped without producing a write. Returns the step
    /// result of the current request, if it is still running.
    pub fn frame(&mut self, now: Instant) -> Option<FrameStep> {
        let scheduled = std::mem::take(&mut self.scheduled);
        let mut outcome = None;

        for step in scheduled {
            if self.current != Some(step.handle) {
                trace!(generation = step.handle.generation(), "Dropping stale scroll step");
                continue;
            }

            let result = self.evaluate(&step, now);
            match result {
                FrameStep::Progress(offset) => {
                    trace!(generation = step.handle.generation(), offset, "Scroll frame");
                    self.scheduled.push(step);
                }
                FrameStep::Finished(target) => {
                    debug!(generation = step.handle.generation(), target, "Smooth scroll finished");
                    self.current = None;
                }
            }
            outcome = Some(result);
        }

        outcome
    }

    /// Make every scheduled step stale.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            debug!(generation = handle.generation(), "Smooth scroll cancelled");
        }
    }

    fn evaluate(&self, step: &ScheduledStep, now: Instant) -> FrameStep {
        if is_complete(step.start, now, self.duration) {
            return FrameStep::Finished(step.to);
        }

        let elapsed = elapsed_ms(step.start, now);
        let duration = self.duration.as_secs_f64() * 1000.0;
        FrameStep::Progress(ease_out_quad(elapsed, step.from, step.to - step.from, duration))
    }
}
