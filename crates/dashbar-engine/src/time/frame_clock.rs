use std::time::Duration;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick.
    pub dt: Duration,

    /// Total of all `dt` values handed out so far, this one included.
    pub elapsed: Duration,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Every tick advances by exactly one fixed step and never reads the wall
/// clock, so animation output is reproducible frame for frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    elapsed: Duration,
    frame_index: u64,
}

impl FrameClock {
    /// Creates a clock that advances by `step` on every tick.
    pub fn fixed_step(step: Duration) -> Self {
        Self { step, elapsed: Duration::ZERO, frame_index: 0 }
    }

    /// Fixed-step clock at `fps` frames per second.
    pub fn fixed_fps(fps: u32) -> Self {
        Self::fixed_step(Duration::from_secs(1) / fps.max(1))
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.elapsed += self.step;
        let ft = FrameTime { dt: self.step, elapsed: self.elapsed, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}
