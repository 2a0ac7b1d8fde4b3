use crate::coords::{Rect, Vec2};

/// A single path command in absolute coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic Bézier: control point, end point.
    QuadTo(Vec2, Vec2),
    /// Closes the current subpath with a straight line back to its start.
    Close,
}

/// A drawable segment yielded by [`Path::segments`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    Line { from: Vec2, to: Vec2 },
    Quad { from: Vec2, ctrl: Vec2, to: Vec2 },
}

impl Segment {
    #[inline]
    pub fn from(&self) -> Vec2 {
        match *self {
            Segment::Line { from, .. } | Segment::Quad { from, .. } => from,
        }
    }

    #[inline]
    pub fn to(&self) -> Vec2 {
        match *self {
            Segment::Line { to, .. } | Segment::Quad { to, .. } => to,
        }
    }

    #[inline]
    pub fn is_line(&self) -> bool {
        matches!(self, Segment::Line { .. })
    }
}

/// Closed or open boundary made of line and quadratic segments.
///
/// An empty path (no elements) is valid and fills nothing; it is what the
/// builders return for degenerate input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub(crate) els: Vec<PathEl>,
}

impl Path {
    /// A path with no geometry.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    /// `true` when the path has nothing to fill.
    pub fn is_empty(&self) -> bool {
        self.segments().next().is_none()
    }

    /// `true` when every subpath ends with [`PathEl::Close`].
    pub fn is_closed(&self) -> bool {
        let mut open = false;
        for el in &self.els {
            match el {
                PathEl::MoveTo(_) => {
                    if open {
                        return false;
                    }
                    open = true;
                }
                PathEl::Close => open = false,
                _ => {}
            }
        }
        !open && !self.els.is_empty()
    }

    /// Iterates drawable segments, including the implicit line emitted by a
    /// `Close` whose current point is not already at the subpath start.
    pub fn segments(&self) -> Segments<'_> {
        Segments { els: &self.els, idx: 0, start: Vec2::zero(), current: Vec2::zero() }
    }

    /// Bounding box of all points, control points included.
    ///
    /// Control points of the rounded-rect builder sit on the rect corners, so
    /// for those paths this is exactly the source rect.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.els.iter().flat_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => [Some(p), None],
            PathEl::QuadTo(c, p) => [Some(c), Some(p)],
            PathEl::Close => [None, None],
        }).flatten();

        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Vec2::new(min.x.min(p.x), min.y.min(p.y)),
                Vec2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Rect::from_origin_size(min, max - min))
    }

    /// Exact signed area enclosed by the path, treating every subpath as closed.
    ///
    /// Positive for clockwise winding in the y-down space. The quadratic
    /// contribution is two thirds of the control triangle beyond the chord.
    pub fn signed_area(&self) -> f32 {
        let twice: f32 = self
            .segments()
            .map(|seg| match seg {
                Segment::Line { from, to } => from.cross(to),
                Segment::Quad { from, ctrl, to } => {
                    from.cross(to) + (2.0 / 3.0) * (ctrl - from).cross(to - from)
                }
            })
            .sum();
        twice / 2.0
    }

    /// Translates every point by `offset`.
    #[must_use]
    pub fn translated(mut self, offset: Vec2) -> Self {
        for el in &mut self.els {
            match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => *p = *p + offset,
                PathEl::QuadTo(c, p) => {
                    *c = *c + offset;
                    *p = *p + offset;
                }
                PathEl::Close => {}
            }
        }
        self
    }
}

/// Iterator returned by [`Path::segments`].
pub struct Segments<'a> {
    els: &'a [PathEl],
    idx: usize,
    start: Vec2,
    current: Vec2,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        while let Some(el) = self.els.get(self.idx) {
            self.idx += 1;
            match *el {
                PathEl::MoveTo(p) => {
                    self.start = p;
                    self.current = p;
                }
                PathEl::LineTo(p) => {
                    let from = self.current;
                    self.current = p;
                    return Some(Segment::Line { from, to: p });
                }
                PathEl::QuadTo(ctrl, p) => {
                    let from = self.current;
                    self.current = p;
                    return Some(Segment::Quad { from, ctrl, to: p });
                }
                PathEl::Close => {
                    let from = self.current;
                    self.current = self.start;
                    if from != self.start {
                        return Some(Segment::Line { from, to: self.start });
                    }
                }
            }
        }
        None
    }
}
