//! Progress indicator drawn as a row of rounded dashes.
//!
//! The bar is two rounded shapes (background strip, filled strip) with the
//! gaps between dashes erased afterwards inside an off-screen layer.

mod animator;
pub mod layout;

use std::time::Duration;

use dashbar_engine::coords::{Corners, Rect, Vec2};
use dashbar_engine::paint::{Color, Paint};
use dashbar_engine::path::RoundRectSpec;
use dashbar_engine::time::Easing;

use crate::config::DashedProgressConfig;
use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

pub use animator::{AnimatorState, ProgressAnimator, DEFAULT_DURATION};
pub use layout::DashLayout;

/// Offset added to a non-zero target, as a fraction of the separator width.
pub const DEFAULT_CORNER_COMPENSATION: f32 = 1.0 / 3.0;

/// Height reported by `measure`.
pub const DEFAULT_HEIGHT: f32 = 8.0;

/// Width reported by `measure` when the host offers unbounded space.
const FALLBACK_WIDTH: f32 = 200.0;

/// Paints derived from the configured colors.
///
/// Built once at construction and rebuilt only when a color setter runs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DashPaints {
    pub dash: Paint,
    pub background: Paint,
    pub separator: Paint,
}

impl DashPaints {
    pub fn new(dash_color: Color, background_color: Color) -> Self {
        Self {
            dash: Paint::solid(dash_color),
            background: Paint::solid(background_color),
            separator: Paint::eraser(),
        }
    }
}

/// A dashed progress bar.
///
/// # Example
/// ```rust,ignore
/// let mut bar = DashedProgressBar::new();
/// bar.set_max_dash_count(5);
/// bar.set_current_dash_count(3);
/// // drive with UiScene::advance / UiScene::frame
/// ```
pub struct DashedProgressBar {
    max_dash_count: u32,
    current_dash_count: u32,
    dash_color: Color,
    dash_background_color: Color,
    paints: DashPaints,
    corner_compensation: f32,
    height: f32,
    size: Vec2,
    animator: ProgressAnimator,
    redraw: bool,
}

impl DashedProgressBar {
    /// One dash, nothing filled, default colors.
    pub fn new() -> Self {
        Self {
            max_dash_count: 1,
            current_dash_count: 0,
            dash_color: Color::CYAN,
            dash_background_color: Color::GRAY,
            paints: DashPaints::new(Color::CYAN, Color::GRAY),
            corner_compensation: DEFAULT_CORNER_COMPENSATION,
            height: DEFAULT_HEIGHT,
            size: Vec2::zero(),
            animator: ProgressAnimator::default(),
            redraw: true,
        }
    }

    /// Builds a bar from a loaded configuration.
    ///
    /// The initial `current_dash_count` goes through the normal setter, so the
    /// bar animates from empty to its starting value.
    pub fn from_config(config: &DashedProgressConfig) -> Self {
        let mut bar = Self::new();
        bar.set_dash_color(config.dash_color);
        bar.set_dash_background_color(config.dash_background_color);
        bar.set_corner_compensation(config.corner_compensation);
        bar.set_animation_duration(config.animation_duration);
        bar.set_easing(config.easing);
        bar.height = config.height;
        bar.set_max_dash_count(config.max_dash_count);
        bar.set_current_dash_count(config.current_dash_count);
        bar
    }

    // ── counts ────────────────────────────────────────────────────────────

    /// Sets the number of dashes. Values below 1 are clamped to 1.
    ///
    /// The current count is clamped into the new range and the fill snaps to
    /// its new target without animating.
    pub fn set_max_dash_count(&mut self, n: i32) {
        let max = match u32::try_from(n) {
            Ok(v) if v >= 1 => v,
            _ => {
                log::warn!("max_dash_count {n} is below 1; using 1");
                1
            }
        };
        self.max_dash_count = max;
        self.current_dash_count = self.current_dash_count.min(max);
        self.animator.jump_to(self.target_filled_width());
        self.redraw = true;
    }

    /// Sets the number of filled dashes, clamped to `[0, max_dash_count]`,
    /// and animates the fill toward it.
    pub fn set_current_dash_count(&mut self, n: i32) {
        self.apply_current_dash_count(u32::try_from(n).unwrap_or(0));
    }

    /// Fills one more dash.
    pub fn increase(&mut self) {
        self.apply_current_dash_count(self.current_dash_count.saturating_add(1));
    }

    /// Empties the last filled dash.
    pub fn decrease(&mut self) {
        self.apply_current_dash_count(self.current_dash_count.saturating_sub(1));
    }

    fn apply_current_dash_count(&mut self, n: u32) {
        self.current_dash_count = n.min(self.max_dash_count);
        self.animator.animate_to(self.target_filled_width());
        self.redraw = true;
    }

    // ── appearance ────────────────────────────────────────────────────────

    pub fn set_dash_color(&mut self, color: Color) {
        self.dash_color = color;
        self.paints = DashPaints::new(self.dash_color, self.dash_background_color);
        self.redraw = true;
    }

    pub fn set_dash_background_color(&mut self, color: Color) {
        self.dash_background_color = color;
        self.paints = DashPaints::new(self.dash_color, self.dash_background_color);
        self.redraw = true;
    }

    /// Fraction of a separator the fill reaches past its last dash.
    /// Negative or non-finite values are treated as 0.
    pub fn set_corner_compensation(&mut self, fraction: f32) {
        self.corner_compensation = if fraction.is_finite() { fraction.max(0.0) } else { 0.0 };
        self.animator.retarget(self.target_filled_width());
        self.redraw = true;
    }

    /// Applies from the next progress change on.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animator.set_duration(duration);
    }

    /// Applies from the next progress change on.
    pub fn set_easing(&mut self, easing: Easing) {
        self.animator.set_easing(easing);
    }

    // ── queries ───────────────────────────────────────────────────────────

    pub fn max_dash_count(&self) -> u32 { self.max_dash_count }
    pub fn current_dash_count(&self) -> u32 { self.current_dash_count }
    pub fn dash_color(&self) -> Color { self.dash_color }
    pub fn dash_background_color(&self) -> Color { self.dash_background_color }
    pub fn paints(&self) -> &DashPaints { &self.paints }
    pub fn corner_compensation(&self) -> f32 { self.corner_compensation }
    pub fn animator(&self) -> &ProgressAnimator { &self.animator }
    pub fn size(&self) -> Vec2 { self.size }

    /// Current animated fill extent.
    pub fn filled_width(&self) -> f32 {
        self.animator.filled_width()
    }

    /// Geometry at the size the bar was last resized to.
    pub fn layout(&self) -> DashLayout {
        DashLayout::compute(self.size.x, self.size.y, self.max_dash_count)
    }

    /// Where the fill settles for the current dash count.
    pub fn target_filled_width(&self) -> f32 {
        self.layout().target_filled_width(self.current_dash_count, self.corner_compensation)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Jumps a running animation to its end.
    pub fn finish_animation(&mut self) {
        if self.animator.finish() {
            self.redraw = true;
        }
    }

    /// A setter changed something visible since the last `take_redraw`.
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }
}

impl Default for DashedProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for DashedProgressBar {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { FALLBACK_WIDTH };
        constraints.constrain(Vec2::new(w, self.height))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if rect.is_empty() || !rect.is_finite() {
            return;
        }
        let layout = DashLayout::compute(rect.width(), rect.height(), self.max_dash_count);
        let radius = layout.requested_corner_radius;
        let filled = self.animator.filled_width().min(layout.width);

        painter.with_layer(|p| {
            p.fill_round_rect(RoundRectSpec::uniform(rect, radius, Corners::ALL), self.paints.background);

            if filled > 0.0 {
                let fill = Rect::new(rect.left(), rect.top(), filled, rect.height());
                p.fill_round_rect(RoundRectSpec::uniform(fill, radius, Corners::ALL), self.paints.dash);
            }

            for gap in layout.separators() {
                p.fill_round_rect(RoundRectSpec::square(gap.translated(rect.origin)), self.paints.separator);
            }
        });
    }

    fn resize(&mut self, size: Vec2) {
        if size == self.size {
            return;
        }
        log::debug!("dashed progress resized to {}x{}", size.x, size.y);
        self.size = size;
        self.animator.retarget(self.target_filled_width());
        self.redraw = true;
    }

    fn advance(&mut self, dt: Duration) -> bool {
        self.animator.advance(dt)
    }

    fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashbar_engine::render::render_to_pixmap;
    use dashbar_engine::scene::{DrawCmd, DrawList};

    const FRAME: Duration = Duration::from_millis(16);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-3
    }

    fn bar(max: i32) -> DashedProgressBar {
        let mut b = DashedProgressBar::new();
        b.resize(Vec2::new(200.0, 20.0));
        b.set_max_dash_count(max);
        b
    }

    fn settle(b: &mut DashedProgressBar) {
        let mut frames = 0;
        while b.advance(FRAME) {
            frames += 1;
            assert!(frames < 1000);
        }
    }

    fn record(b: &DashedProgressBar) -> DrawList {
        let mut list = DrawList::new();
        b.paint(&mut Painter::new(&mut list), Rect::from_origin_size(Vec2::zero(), b.size()));
        list
    }

    fn erasers(list: &DrawList) -> usize {
        list.items()
            .iter()
            .filter(|c| matches!(c, DrawCmd::FillPath(f) if f.paint.is_eraser()))
            .count()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn defaults() {
        let b = DashedProgressBar::new();
        assert_eq!(b.max_dash_count(), 1);
        assert_eq!(b.current_dash_count(), 0);
        assert_eq!(b.dash_color(), Color::CYAN);
        assert_eq!(b.dash_background_color(), Color::GRAY);
        assert_eq!(b.filled_width(), 0.0);
        assert!(!b.is_animating());
        assert!(b.needs_redraw());
    }

    #[test]
    fn max_below_one_clamps_to_one() {
        let mut b = bar(0);
        assert_eq!(b.max_dash_count(), 1);
        b.set_max_dash_count(-3);
        assert_eq!(b.max_dash_count(), 1);
        assert!(b.layout().dash_width > 0.0);
    }

    // ── progress ──────────────────────────────────────────────────────────

    #[test]
    fn three_of_five_settles_on_target() {
        let mut b = bar(5);
        b.set_current_dash_count(3);
        assert!(b.is_animating());
        assert_eq!(b.animator().animation_start(), Some(0.0));
        settle(&mut b);
        assert!(!b.is_animating());
        assert!(approx(b.filled_width(), 121.667));
    }

    #[test]
    fn every_count_settles_on_its_target() {
        let mut b = bar(5);
        for n in 0..=5 {
            b.set_current_dash_count(n);
            settle(&mut b);
            let expected = b.layout().target_filled_width(n as u32, DEFAULT_CORNER_COMPENSATION);
            assert!(approx(b.filled_width(), expected), "n={n}");
        }
    }

    #[test]
    fn out_of_range_counts_clamp() {
        let mut low = bar(5);
        let mut zero = bar(5);
        low.set_current_dash_count(2);
        zero.set_current_dash_count(2);
        settle(&mut low);
        settle(&mut zero);

        low.set_current_dash_count(-5);
        zero.set_current_dash_count(0);
        settle(&mut low);
        settle(&mut zero);
        assert_eq!(low.current_dash_count(), zero.current_dash_count());
        assert_eq!(low.filled_width(), zero.filled_width());

        let mut high = bar(5);
        let mut full = bar(5);
        high.set_current_dash_count(105);
        full.set_current_dash_count(5);
        settle(&mut high);
        settle(&mut full);
        assert_eq!(high.current_dash_count(), 5);
        assert_eq!(high.filled_width(), full.filled_width());
        assert!(approx(full.filled_width(), 200.0));
    }

    #[test]
    fn resetting_settled_count_is_idempotent() {
        let mut b = bar(5);
        b.set_current_dash_count(2);
        settle(&mut b);
        let before = b.filled_width();
        b.set_current_dash_count(2);
        assert!(b.is_animating());
        settle(&mut b);
        assert_eq!(b.filled_width(), before);
    }

    #[test]
    fn second_set_restarts_from_current_value() {
        let mut b = bar(5);
        b.set_current_dash_count(5);
        for _ in 0..6 {
            b.advance(FRAME);
        }
        let mid = b.filled_width();
        assert!(mid > 0.0 && mid < 200.0);

        b.set_current_dash_count(1);
        assert_eq!(b.animator().animation_start(), Some(mid));
        assert!(approx(b.animator().target(), 40.0 + 5.0 / 3.0));
        settle(&mut b);
        assert!(approx(b.filled_width(), 40.0 + 5.0 / 3.0));
    }

    #[test]
    fn increase_and_decrease_step_by_one() {
        let mut b = bar(3);
        b.increase();
        b.increase();
        b.increase();
        b.increase();
        assert_eq!(b.current_dash_count(), 3);
        b.decrease();
        assert_eq!(b.current_dash_count(), 2);
        b.set_current_dash_count(0);
        b.decrease();
        assert_eq!(b.current_dash_count(), 0);
    }

    #[test]
    fn shrinking_max_clamps_current_and_snaps() {
        let mut b = bar(5);
        b.set_current_dash_count(4);
        b.advance(FRAME);
        b.set_max_dash_count(2);
        assert_eq!(b.current_dash_count(), 2);
        assert!(!b.is_animating());
        assert!(approx(b.filled_width(), 200.0));
    }

    #[test]
    fn finish_animation_jumps_to_target() {
        let mut b = bar(4);
        b.set_current_dash_count(1);
        b.take_redraw();
        b.finish_animation();
        assert!(b.needs_redraw());
        assert_eq!(b.filled_width(), b.target_filled_width());
    }

    #[test]
    fn resize_while_idle_moves_fill_to_new_target() {
        let mut b = bar(4);
        b.set_current_dash_count(2);
        settle(&mut b);
        b.resize(Vec2::new(400.0, 20.0));
        assert!(!b.is_animating());
        assert!(approx(b.filled_width(), b.target_filled_width()));
        assert!(b.filled_width() > 200.0);
    }

    #[test]
    fn set_before_layout_animates_once_sized() {
        let mut b = DashedProgressBar::new();
        b.set_max_dash_count(5);
        b.set_current_dash_count(3);
        assert_eq!(b.animator().target(), 0.0);
        b.resize(Vec2::new(200.0, 20.0));
        assert!(b.is_animating());
        settle(&mut b);
        assert!(approx(b.filled_width(), 121.667));
    }

    #[test]
    fn huge_max_dash_count_paints_without_separators() {
        let mut b = bar(i32::MAX);
        assert_eq!(b.max_dash_count(), i32::MAX as u32);
        b.set_current_dash_count(i32::MAX);
        b.finish_animation();
        let list = record(&b);
        assert_eq!(erasers(&list), 0);
        // layer, background, fill, layer
        assert_eq!(list.len(), 4);
    }

    // ── redraw requests ───────────────────────────────────────────────────

    #[test]
    fn color_change_rebuilds_paints_and_requests_redraw() {
        let mut b = bar(3);
        b.take_redraw();
        let red = Color::from_srgb_u8(255, 0, 0, 255);
        b.set_dash_color(red);
        assert!(b.take_redraw());
        assert!(!b.take_redraw());
        assert_eq!(b.paints().dash, Paint::solid(red));
        assert_eq!(b.paints().background, Paint::solid(Color::GRAY));
        assert!(b.paints().separator.is_eraser());
    }

    #[test]
    fn background_color_change_rebuilds_paints_and_requests_redraw() {
        let mut b = bar(3);
        b.take_redraw();
        let dark = Color::from_srgb_u8(32, 32, 32, 255);
        b.set_dash_background_color(dark);
        assert!(b.take_redraw());
        assert_eq!(b.dash_background_color(), dark);
        assert_eq!(b.paints().background, Paint::solid(dark));
        assert_eq!(b.paints().dash, Paint::solid(Color::CYAN));
        assert!(b.paints().separator.is_eraser());
    }

    #[test]
    fn advance_reports_new_values() {
        let mut b = bar(2);
        b.set_current_dash_count(1);
        assert!(b.advance(FRAME));
        settle(&mut b);
        assert!(!b.advance(FRAME));
    }

    // ── painting ──────────────────────────────────────────────────────────

    #[test]
    fn paint_is_wrapped_in_one_layer() {
        let mut b = bar(5);
        b.set_current_dash_count(2);
        b.finish_animation();
        let list = record(&b);
        assert!(list.is_balanced());
        assert!(matches!(list.items().first(), Some(DrawCmd::PushLayer)));
        assert!(matches!(list.items().last(), Some(DrawCmd::PopLayer)));
        assert_eq!(erasers(&list), 4);
    }

    #[test]
    fn single_dash_has_no_separators() {
        let mut b = bar(1);
        b.set_current_dash_count(1);
        b.finish_animation();
        let list = record(&b);
        assert_eq!(erasers(&list), 0);
        // layer, background, fill, layer
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn degenerate_bounds_record_nothing() {
        let mut b = bar(5);
        b.set_current_dash_count(3);
        b.finish_animation();
        for rect in [
            Rect::new(0.0, 0.0, 0.0, 20.0),
            Rect::new(0.0, 0.0, 200.0, 0.0),
            Rect::new(0.0, 0.0, -10.0, 20.0),
            Rect::new(0.0, 0.0, f32::NAN, 20.0),
        ] {
            let mut list = DrawList::new();
            b.paint(&mut Painter::new(&mut list), rect);
            assert!(list.is_empty(), "{rect:?}");
        }
    }

    #[test]
    fn unsized_bar_records_nothing() {
        let mut b = DashedProgressBar::new();
        b.set_max_dash_count(5);
        assert!(record(&b).is_empty());
    }

    #[test]
    fn empty_fill_is_not_recorded() {
        let b = bar(3);
        // layer, background, 2 separators, layer
        assert_eq!(record(&b).len(), 5);
    }

    #[test]
    fn rendered_pixels_show_fill_gaps_and_track() {
        let mut b = bar(5);
        b.set_current_dash_count(3);
        b.finish_animation();

        let list = record(&b);
        let pm = render_to_pixmap(&list, 200, 20, Color::transparent()).unwrap();
        let px = |x, y| pm.pixel(x, y).unwrap();

        // filled dash
        let filled = px(100, 10);
        assert_eq!((filled.red(), filled.green(), filled.blue(), filled.alpha()), (0, 255, 255, 255));

        // separator gap after the first dash
        assert_eq!(px(42, 10).alpha(), 0);

        // unfilled dash
        let track = px(150, 10);
        assert_eq!(track.alpha(), 255);
        assert!((135..=137).contains(&track.red()));
        assert_eq!(track.red(), track.green());

        // rounded outer corner
        assert_eq!(px(0, 0).alpha(), 0);
    }

    #[test]
    fn separators_do_not_erase_the_backdrop() {
        let b = bar(5);
        let list = record(&b);
        let backdrop = Color::from_srgb_u8(255, 255, 255, 255);
        let pm = render_to_pixmap(&list, 200, 20, backdrop).unwrap();
        let gap = pm.pixel(42, 10).unwrap();
        assert_eq!((gap.red(), gap.alpha()), (255, 255));
    }
}
