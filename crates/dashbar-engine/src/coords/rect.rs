use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rect from its edges. `right < left` yields a negative width,
    /// which callers treat as empty.
    #[inline]
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Same size, moved by `offset`.
    #[inline]
    pub fn translated(self, offset: Vec2) -> Self {
        Self { origin: self.origin + offset, size: self.size }
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.left() && p.y >= self.top() && p.x < self.right() && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn from_ltrb_round_trips_edges() {
        let rect = Rect::from_ltrb(2.0, 3.0, 12.0, 8.0);
        assert_eq!(rect, r(2.0, 3.0, 10.0, 5.0));
        assert_eq!(rect.right(), 12.0);
        assert_eq!(rect.bottom(), 8.0);
    }

    #[test]
    fn translated_keeps_size() {
        let rect = r(1.0, 1.0, 4.0, 5.0).translated(Vec2::new(10.0, -1.0));
        assert_eq!(rect, r(11.0, 0.0, 4.0, 5.0));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_or_negative_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, -1.0).is_empty());
        assert!(Rect::from_ltrb(10.0, 0.0, 4.0, 5.0).is_empty());
    }

    #[test]
    fn is_empty_nan_size() {
        assert!(r(0.0, 0.0, f32::NAN, 5.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
