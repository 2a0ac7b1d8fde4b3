//! Dash geometry derived from the widget bounds and the dash count.

use dashbar_engine::coords::Rect;

/// Requested corner radius is `min(width, height) / CORNER_RADIUS_DIVISOR`.
///
/// This asks for more than half the minor side; the path builder caps it, so
/// every rounded end comes out as round as the shape allows.
pub const CORNER_RADIUS_DIVISOR: f32 = 1.5;

/// Separator width is `pitch / SEPARATOR_DIVISOR`.
pub const SEPARATOR_DIVISOR: f32 = 8.0;

/// Separators narrower than this (in logical px) are not drawn.
///
/// Bounds the number of separators by the strip width: at most
/// `width / (MIN_SEPARATOR_WIDTH · SEPARATOR_DIVISOR)` of them, whatever
/// the dash count.
pub const MIN_SEPARATOR_WIDTH: f32 = 0.5;

/// Per-dash geometry for one size and dash count.
///
/// Along the x axis the strip is divided into `max_dash_count` equal cells of
/// [`pitch`](Self::pitch). Boundary `i` (for `i` in `1..max_dash_count`) owns
/// the separator gap `[i·pitch, i·pitch + separator_width]`, so dash `k > 0`
/// spans `[k·pitch + separator_width, (k + 1)·pitch]` and the first dash,
/// having no gap before it, spans the whole first cell.
///
/// When the dash count is so high that separators would be thinner than
/// [`MIN_SEPARATOR_WIDTH`], none are drawn and the strip reads as one bar.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DashLayout {
    pub width: f32,
    pub height: f32,
    pub max_dash_count: u32,
    pub dash_width: f32,
    pub separator_width: f32,
    /// Radius the outline ends up with: the request capped at half the
    /// minor side, so `corner_radius <= min(width, height) / 2`.
    pub corner_radius: f32,
    /// Radius handed to the path builder, see [`CORNER_RADIUS_DIVISOR`].
    pub requested_corner_radius: f32,
}

impl DashLayout {
    /// Pure function of the bounds and dash count.
    ///
    /// `max_dash_count == 0` is treated as 1. Negative or non-finite sizes
    /// are treated as 0 (a widget that has not been laid out yet).
    pub fn compute(width: f32, height: f32, max_dash_count: u32) -> Self {
        let width = sanitize(width);
        let height = sanitize(height);
        let max_dash_count = max_dash_count.max(1);

        let pitch = width / max_dash_count as f32;
        let separator_width = pitch / SEPARATOR_DIVISOR;

        let minor = width.min(height);
        let requested_corner_radius = minor / CORNER_RADIUS_DIVISOR;

        Self {
            width,
            height,
            max_dash_count,
            dash_width: (pitch - separator_width).max(0.0),
            separator_width,
            corner_radius: requested_corner_radius.min(minor / 2.0),
            requested_corner_radius,
        }
    }

    /// Width of one dash plus one separator.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.dash_width + self.separator_width
    }

    /// Separator strips for boundaries `1..max_dash_count`, left to right.
    ///
    /// Empty when separators would be narrower than [`MIN_SEPARATOR_WIDTH`].
    pub fn separators(&self) -> impl Iterator<Item = Rect> + '_ {
        let end = if self.separator_width >= MIN_SEPARATOR_WIDTH { self.max_dash_count } else { 1 };
        (1..end).map(move |i| {
            Rect::new(i as f32 * self.pitch(), 0.0, self.separator_width, self.height)
        })
    }

    /// Filled width that shows exactly `dash_count` dashes.
    ///
    /// `dash_count` full cells plus `compensation × separator_width`, so the
    /// rounded trailing edge of the fill lands inside the next gap instead of
    /// leaving a bite out of the last filled dash. Zero dashes map to zero;
    /// the result never exceeds the strip width.
    pub fn target_filled_width(&self, dash_count: u32, compensation: f32) -> f32 {
        if dash_count == 0 {
            return 0.0;
        }
        let count = dash_count.min(self.max_dash_count) as f32;
        let offset = self.separator_width * compensation.max(0.0);
        (count * self.pitch() + offset).min(self.width)
    }
}

fn sanitize(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
