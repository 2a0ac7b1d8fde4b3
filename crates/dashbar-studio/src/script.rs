use dashbar_ui::prelude::*;

/// One scripted interaction with the bar.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    Increase,
    Decrease,
    SetCurrent(i32),
    SetMax(i32),
    DashColor(Color),
}

impl Action {
    pub fn apply(self, bar: &mut DashedProgressBar) {
        match self {
            Action::Increase => bar.increase(),
            Action::Decrease => bar.decrease(),
            Action::SetCurrent(n) => bar.set_current_dash_count(n),
            Action::SetMax(n) => bar.set_max_dash_count(n),
            Action::DashColor(c) => bar.set_dash_color(c),
        }
    }
}

/// Actions keyed by the frame they fire on, in frame order.
pub struct Script {
    steps: Vec<(u64, Action)>,
}

impl Script {
    /// Fills the bar one dash at a time, interrupts itself mid-animation,
    /// overshoots, and finally regroups into more dashes.
    pub fn demo() -> Self {
        let mut steps = vec![
            (20, Action::Increase),
            (40, Action::Increase),
            // restarts before the previous animation lands
            (48, Action::Increase),
            (70, Action::Decrease),
            (90, Action::SetCurrent(99)),
            (115, Action::DashColor(Color::from_srgb_u8(255, 170, 0, 255))),
            (120, Action::SetCurrent(-1)),
            (145, Action::SetMax(8)),
        ];
        for (i, frame) in (150..=220).step_by(10).enumerate() {
            steps.push((frame, Action::SetCurrent(i as i32 + 1)));
        }
        Self { steps }
    }

    /// Frame index after which nothing else is scheduled.
    pub fn last_frame(&self) -> u64 {
        self.steps.last().map_or(0, |(f, _)| *f)
    }

    /// Actions that fire on `frame`.
    pub fn at(&self, frame: u64) -> impl Iterator<Item = Action> + '_ {
        self.steps.iter().filter(move |(f, _)| *f == frame).map(|(_, a)| *a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_in_frame_order() {
        let s = Script::demo();
        assert!(s.steps.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(s.last_frame(), 220);
    }

    #[test]
    fn demo_ends_full_on_eight_dashes() {
        let s = Script::demo();
        let mut bar = DashedProgressBar::new();
        bar.set_max_dash_count(5);
        for frame in 0..=s.last_frame() {
            for action in s.at(frame) {
                action.apply(&mut bar);
            }
        }
        assert_eq!(bar.max_dash_count(), 8);
        assert_eq!(bar.current_dash_count(), 8);
    }

    #[test]
    fn overshoot_clamps() {
        let mut bar = DashedProgressBar::new();
        bar.set_max_dash_count(5);
        Action::SetCurrent(99).apply(&mut bar);
        assert_eq!(bar.current_dash_count(), 5);
    }
}
