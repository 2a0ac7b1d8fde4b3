use crate::coords::Vec2;

use super::{Path, PathEl};

/// Relative tolerance for treating two line directions as the same.
const COLLINEAR_EPS: f32 = 1e-5;

/// Incremental [`Path`] builder with absolute and relative commands.
///
/// Normalization performed while building:
/// - zero-length lines are dropped
/// - a line continuing the previous line in the same direction extends it
/// - quads with a control point on one of their endpoints become lines
/// - on `close`, a final line that continues into the first line of the
///   subpath is folded into it (the subpath start moves back)
///
/// With these rules an all-square rounded rect collapses to its four edges.
#[derive(Debug, Default)]
pub struct PathBuilder {
    els: Vec<PathEl>,
    /// Index of the `MoveTo` that opened the current subpath.
    subpath: Option<usize>,
    start: Vec2,
    current: Vec2,
    /// Start point of the trailing `LineTo`, when the last element is one.
    line_from: Option<Vec2>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        // A trailing MoveTo with nothing after it is replaced rather than kept.
        if let Some(PathEl::MoveTo(_)) = self.els.last() {
            self.els.pop();
        }
        self.subpath = Some(self.els.len());
        self.els.push(PathEl::MoveTo(p));
        self.start = p;
        self.current = p;
        self.line_from = None;
        self
    }

    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.ensure_subpath();
        if p == self.current {
            return self;
        }

        let current = self.current;
        let extends = matches!(self.els.last(), Some(PathEl::LineTo(_)))
            && self.line_from.is_some_and(|from| same_direction(current - from, p - current));
        if extends {
            if let Some(last) = self.els.last_mut() {
                *last = PathEl::LineTo(p);
            }
            self.current = p;
            return self;
        }

        self.els.push(PathEl::LineTo(p));
        self.line_from = Some(self.current);
        self.current = p;
        self
    }

    pub fn quad_to(&mut self, ctrl: Vec2, p: Vec2) -> &mut Self {
        self.ensure_subpath();
        if ctrl == self.current || ctrl == p {
            return self.line_to(p);
        }
        self.els.push(PathEl::QuadTo(ctrl, p));
        self.line_from = None;
        self.current = p;
        self
    }

    #[inline]
    pub fn rel_line_to(&mut self, dx: f32, dy: f32) -> &mut Self {
        let p = self.current + Vec2::new(dx, dy);
        self.line_to(p)
    }

    /// Relative quad: both the control and end point are offsets from the
    /// current point.
    #[inline]
    pub fn rel_quad_to(&mut self, dcx: f32, dcy: f32, dx: f32, dy: f32) -> &mut Self {
        let ctrl = self.current + Vec2::new(dcx, dcy);
        let p = self.current + Vec2::new(dx, dy);
        self.quad_to(ctrl, p)
    }

    pub fn close(&mut self) -> &mut Self {
        let Some(sub) = self.subpath else {
            return self;
        };

        let start = self.start;
        self.line_to(start);
        self.fold_closing_line(sub);

        self.els.push(PathEl::Close);
        self.subpath = None;
        self.current = self.start;
        self.line_from = None;
        self
    }

    /// Returns the finished path. An unclosed trailing subpath is kept open.
    pub fn finish(mut self) -> Path {
        if let Some(PathEl::MoveTo(_)) = self.els.last() {
            self.els.pop();
        }
        Path { els: self.els }
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn ensure_subpath(&mut self) {
        if self.subpath.is_none() {
            let p = self.current;
            self.move_to(p);
        }
    }

    /// Merges a last line ending at the subpath start with the first line
    /// leaving it, when both run in the same direction.
    fn fold_closing_line(&mut self, sub: usize) {
        let len = self.els.len();
        // MoveTo + first line + at least one more element + closing line.
        if len < sub + 4 {
            return;
        }
        let (Some(from), PathEl::LineTo(end), PathEl::LineTo(first)) =
            (self.line_from, self.els[len - 1], self.els[sub + 1])
        else {
            return;
        };
        if end != self.start || !same_direction(end - from, first - end) {
            return;
        }

        self.els.pop();
        self.els[sub] = PathEl::MoveTo(from);
        self.start = from;
        self.current = from;
    }
}

fn same_direction(a: Vec2, b: Vec2) -> bool {
    let scale = a.length() * b.length();
    scale > 0.0 && a.cross(b).abs() <= COLLINEAR_EPS * scale && a.dot(b) > 0.0
}
