//! Rounded rectangle with independently rounded or square corners.

use crate::coords::{Corners, Rect, Vec2};

use super::{Path, PathBuilder};

/// Input to [`build_round_rect_path`].
///
/// `rx` / `ry` are requests: negative values are treated as zero and each is
/// capped at half of the rect's width / height when the path is built, so
/// callers may ask for "as round as possible" with an oversized radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoundRectSpec {
    pub rect: Rect,
    pub rx: f32,
    pub ry: f32,
    pub corners: Corners,
}

impl RoundRectSpec {
    #[inline]
    pub const fn new(rect: Rect, rx: f32, ry: f32, corners: Corners) -> Self {
        Self { rect, rx, ry, corners }
    }

    /// Same radius on both axes.
    #[inline]
    pub const fn uniform(rect: Rect, radius: f32, corners: Corners) -> Self {
        Self::new(rect, radius, radius, corners)
    }

    /// Plain rectangle, all corners square.
    #[inline]
    pub const fn square(rect: Rect) -> Self {
        Self::new(rect, 0.0, 0.0, Corners::NONE)
    }

    /// Radii actually used for the path: non-negative and at most half the
    /// corresponding side.
    pub fn clamped_radii(&self) -> (f32, f32) {
        let clamp = |r: f32, side: f32| {
            if r > 0.0 { r.min(side / 2.0) } else { 0.0 }
        };
        (clamp(self.rx, self.rect.width()), clamp(self.ry, self.rect.height()))
    }
}

/// Builds the closed outline described by `spec`.
///
/// The walk starts at `(right, top + ry)` and visits the top-right, top-left,
/// bottom-left and bottom-right corners in turn (counter-clockwise on screen),
/// each step relative to the previous point. A rounded corner is one
/// quadratic segment whose control point is the rect's corner; a square
/// corner is the two straight legs through it.
///
/// Returns an empty path when the rect has no area (including NaN sizes).
/// When every corner is square the result is the four edges of the rect and
/// the start point moves to the bottom-right corner.
pub fn build_round_rect_path(spec: &RoundRectSpec) -> Path {
    let rect = spec.rect;
    if rect.is_empty() || !rect.is_finite() {
        return Path::empty();
    }

    let (rx, ry) = spec.clamped_radii();
    let inner_w = rect.width() - 2.0 * rx;
    let inner_h = rect.height() - 2.0 * ry;
    let c = spec.corners;

    let mut pb = PathBuilder::new();
    pb.move_to(Vec2::new(rect.right(), rect.top() + ry));

    corner(&mut pb, c.top_right, Vec2::new(0.0, -ry), Vec2::new(-rx, -ry));
    pb.rel_line_to(-inner_w, 0.0);

    corner(&mut pb, c.top_left, Vec2::new(-rx, 0.0), Vec2::new(-rx, ry));
    pb.rel_line_to(0.0, inner_h);

    corner(&mut pb, c.bottom_left, Vec2::new(0.0, ry), Vec2::new(rx, ry));
    pb.rel_line_to(inner_w, 0.0);

    corner(&mut pb, c.bottom_right, Vec2::new(rx, 0.0), Vec2::new(rx, -ry));

    // The right edge is the closing line back to the exact start point.
    pb.close();
    pb.finish()
}

/// `apex` and `end` are offsets from the current point.
fn corner(pb: &mut PathBuilder, rounded: bool, apex: Vec2, end: Vec2) {
    if rounded {
        pb.rel_quad_to(apex.x, apex.y, end.x, end.y);
    } else {
        pb.rel_line_to(apex.x, apex.y);
        pb.rel_line_to(end.x - apex.x, end.y - apex.y);
    }
}
