//! Time subsystem.
//!
//! Provides stable, testable frame timing and value animation without
//! coupling to a runtime. Intended usage:
//! - one `FrameClock` per render loop; call `tick()` once per frame
//! - feed `FrameTime::dt` to every running `Tween`

mod easing;
mod frame_clock;
mod tween;

pub use easing::Easing;
pub use frame_clock::{FrameClock, FrameTime};
pub use tween::{Tween, TweenStep};
