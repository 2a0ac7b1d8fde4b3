use std::time::Duration;

use super::Easing;

/// One interpolated value produced by [`Tween::advance`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TweenStep {
    Running(f32),
    /// Final step; the value is exactly the tween's `to`.
    Finished(f32),
}

impl TweenStep {
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            TweenStep::Running(v) | TweenStep::Finished(v) => v,
        }
    }

    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, TweenStep::Finished(_))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum State {
    Running,
    Finished,
    Cancelled,
}

/// Time-driven interpolation of a single `f32` from `from` to `to`.
///
/// A tween does not own a timer: the caller feeds it frame deltas through
/// [`advance`](Self::advance) and receives the new value plus a completion
/// signal. Values are delivered in order and never repeat a stale one.
/// Once finished or cancelled, `advance` returns `None`.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    state: State,
}

impl Tween {
    /// Starts a tween at `from`. No value is emitted until the first `advance`.
    pub fn start(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self { from, to, duration, elapsed: Duration::ZERO, easing, state: State::Running }
    }

    /// Moves the tween forward by `dt`.
    ///
    /// A zero-length tween finishes on its first advance.
    pub fn advance(&mut self, dt: Duration) -> Option<TweenStep> {
        if self.state != State::Running {
            return None;
        }

        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.elapsed >= self.duration {
            self.state = State::Finished;
            return Some(TweenStep::Finished(self.to));
        }

        Some(TweenStep::Running(self.value()))
    }

    /// Stops the tween where it is. Further `advance` calls return `None`.
    pub fn cancel(&mut self) {
        if self.state == State::Running {
            self.state = State::Cancelled;
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return if self.state == State::Finished { 1.0 } else { 0.0 };
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Interpolated value at the current progress.
    pub fn value(&self) -> f32 {
        if self.state == State::Finished {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    #[inline]
    pub fn from(&self) -> f32 {
        self.from
    }

    #[inline]
    pub fn to(&self) -> f32 {
        self.to
    }
}
