//! Drives the filled width toward its target.

use std::time::Duration;

use dashbar_engine::time::{Easing, Tween};

/// Duration of a progress transition unless configured otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AnimatorState {
    Idle,
    Animating,
}

/// Owner of the single animated quantity, `filled_width`.
///
/// Holds at most one [`Tween`]. Starting a new animation cancels and drops
/// the previous one before the new one exists, so there is only ever one
/// writer. Every new animation starts from the current `filled_width`, not
/// from zero and not from the previous target.
#[derive(Debug, Clone)]
pub struct ProgressAnimator {
    filled_width: f32,
    target: f32,
    tween: Option<Tween>,
    duration: Duration,
    easing: Easing,
}

impl ProgressAnimator {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { filled_width: 0.0, target: 0.0, tween: None, duration, easing }
    }

    #[inline]
    pub fn state(&self) -> AnimatorState {
        if self.tween.is_some() { AnimatorState::Animating } else { AnimatorState::Idle }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state() == AnimatorState::Animating
    }

    #[inline]
    pub fn filled_width(&self) -> f32 {
        self.filled_width
    }

    /// Where the current (or last) animation ends.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Start value of the in-flight animation, if any.
    pub fn animation_start(&self) -> Option<f32> {
        self.tween.as_ref().map(|t| t.from())
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Applies to animations started afterwards.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Applies to animations started afterwards.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Cancels any running animation and starts a new one from the current
    /// filled width to `target`. Always enters `Animating`, even when the
    /// target equals the current value.
    pub fn animate_to(&mut self, target: f32) {
        self.cancel();
        let target = non_negative(target);
        log::debug!(
            "filled width {:.2} -> {:.2} over {:?}",
            self.filled_width,
            target,
            self.duration
        );
        self.target = target;
        self.tween = Some(Tween::start(self.filled_width, target, self.duration, self.easing));
    }

    /// Cancels any running animation and sets the value directly.
    pub fn jump_to(&mut self, value: f32) {
        self.cancel();
        self.filled_width = non_negative(value);
        self.target = self.filled_width;
    }

    /// Moves toward a new target after a geometry change: keeps animating if
    /// an animation is running, otherwise jumps.
    pub fn retarget(&mut self, target: f32) {
        if self.is_animating() {
            self.animate_to(target);
        } else {
            self.jump_to(target);
        }
    }

    /// Completes the running animation at its target. Returns `true` if an
    /// animation was running.
    pub fn finish(&mut self) -> bool {
        if self.tween.take().is_none() {
            return false;
        }
        self.filled_width = self.target;
        true
    }

    /// Feeds one frame delta to the running animation.
    ///
    /// Returns `true` when a new value was delivered (the caller should
    /// repaint). On the final step the animator returns to `Idle`.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };

        match tween.advance(dt) {
            Some(step) => {
                self.filled_width = step.value();
                if step.is_finished() {
                    self.tween = None;
                    log::trace!("filled width settled at {:.2}", self.filled_width);
                }
                true
            }
            None => {
                self.tween = None;
                false
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(mut tween) = self.tween.take() {
            tween.cancel();
            log::trace!("cancelled animation at {:.2} (was heading to {:.2})", self.filled_width, tween.to());
        }
    }
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION, Easing::AccelerateDecelerate)
    }
}

fn non_negative(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_to_idle(a: &mut ProgressAnimator) -> usize {
        let mut frames = 0;
        while a.advance(FRAME) {
            frames += 1;
            assert!(frames < 10_000, "animation never finished");
        }
        frames
    }

    #[test]
    fn starts_idle_at_zero() {
        let a = ProgressAnimator::default();
        assert_eq!(a.state(), AnimatorState::Idle);
        assert_eq!(a.filled_width(), 0.0);
        assert_eq!(a.duration(), Duration::from_millis(300));
    }

    #[test]
    fn reaches_target_and_goes_idle() {
        let mut a = ProgressAnimator::default();
        a.animate_to(120.0);
        assert_eq!(a.state(), AnimatorState::Animating);
        let frames = run_to_idle(&mut a);
        assert_eq!(frames, 19);
        assert_eq!(a.filled_width(), 120.0);
        assert_eq!(a.state(), AnimatorState::Idle);
        assert!(!a.advance(FRAME));
    }

    #[test]
    fn values_are_monotonic_toward_target() {
        let mut a = ProgressAnimator::default();
        a.animate_to(80.0);
        let mut prev = 0.0;
        while a.advance(FRAME) {
            assert!(a.filled_width() >= prev);
            assert!(a.filled_width() <= 80.0);
            prev = a.filled_width();
        }
    }

    #[test]
    fn restart_begins_at_current_value() {
        let mut a = ProgressAnimator::default();
        a.animate_to(100.0);
        for _ in 0..5 {
            a.advance(FRAME);
        }
        let mid = a.filled_width();
        assert!(mid > 0.0 && mid < 100.0);

        a.animate_to(40.0);
        assert_eq!(a.animation_start(), Some(mid));
        assert_eq!(a.target(), 40.0);

        run_to_idle(&mut a);
        assert_eq!(a.filled_width(), 40.0);
    }

    #[test]
    fn same_target_is_a_no_op_animation() {
        let mut a = ProgressAnimator::default();
        a.jump_to(50.0);
        a.animate_to(50.0);
        assert!(a.is_animating());
        while a.advance(FRAME) {
            assert_eq!(a.filled_width(), 50.0);
        }
        assert_eq!(a.filled_width(), 50.0);
    }

    #[test]
    fn finish_jumps_to_target() {
        let mut a = ProgressAnimator::default();
        a.animate_to(64.0);
        a.advance(FRAME);
        assert!(a.finish());
        assert_eq!(a.filled_width(), 64.0);
        assert!(!a.finish());
    }

    #[test]
    fn retarget_while_idle_jumps() {
        let mut a = ProgressAnimator::default();
        a.retarget(30.0);
        assert!(!a.is_animating());
        assert_eq!(a.filled_width(), 30.0);
    }

    #[test]
    fn retarget_while_animating_keeps_animating() {
        let mut a = ProgressAnimator::default();
        a.animate_to(30.0);
        a.advance(FRAME);
        a.retarget(60.0);
        assert!(a.is_animating());
        assert_eq!(a.target(), 60.0);
    }

    #[test]
    fn negative_and_nan_targets_clamp_to_zero() {
        let mut a = ProgressAnimator::default();
        a.animate_to(-10.0);
        assert_eq!(a.target(), 0.0);
        a.jump_to(f32::NAN);
        assert_eq!(a.filled_width(), 0.0);
    }

    #[test]
    fn settings_apply_to_next_animation() {
        let mut a = ProgressAnimator::default();
        a.set_duration(Duration::ZERO);
        a.set_easing(Easing::Linear);
        a.animate_to(10.0);
        assert!(a.advance(Duration::ZERO));
        assert_eq!(a.filled_width(), 10.0);
        assert!(!a.is_animating());
    }
}
