//! Smooth scrolling for the header panel
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Quadratic ease-out curve
//! - `timing` - Clocks and elapsed-time helpers
//!
//! ## L3 Molecular Layer
//! - `animation` - Per-frame driver with superseding handles
//!
//! # Usage
//!
//! ```ignore
//! use condense_core::scroll::{SmoothScroll, FrameStep};
//!
//! let mut driver = SmoothScroll::default();
//! let (_handle, first) = driver.start(current, target, clock.now());
//!
//! // Once per display frame
//! match driver.frame(clock.now()) {
//!     Some(FrameStep::Progress(offset)) => scroller.set_scroll_top(offset),
//!     Some(FrameStep::Finished(target)) => { /* snap and update state */ }
//!     None => {}
//! }
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

pub use animation::{AnimationHandle, FrameStep, SmoothScroll, DEFAULT_DURATION};
pub use easing::ease_out_quad;
pub use timing::{Clock, ManualClock, SystemClock};
